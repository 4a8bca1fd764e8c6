//! Wire codec for amenity filters.
//!
//! The transport format is a flat list of strings: `"key:value"` for each
//! discrete value and `"key:min-max"` for an active range (an absent bound
//! encodes as the empty string). Parsing splits on the first `:` and treats
//! a remainder containing `-` as a range.
//!
//! Known format limitation, preserved for wire compatibility: a discrete
//! value containing a literal `-` is indistinguishable from a range and
//! parses as one.

use super::store::{AmenitySet, AmenityValue};

/// Flatten an amenity set into filter strings. Inactive values (empty
/// discrete lists, ranges with neither bound) are skipped.
pub fn encode(values: &AmenitySet) -> Vec<String> {
    let mut entries = Vec::new();
    for (key, value) in values {
        match value {
            AmenityValue::Discrete(list) => {
                for item in list {
                    entries.push(format!("{key}:{item}"));
                }
            }
            AmenityValue::Range { min, max } => {
                if min.is_some() || max.is_some() {
                    entries.push(format!(
                        "{key}:{}-{}",
                        min.as_deref().unwrap_or(""),
                        max.as_deref().unwrap_or("")
                    ));
                }
            }
        }
    }
    entries
}

/// Rebuild an amenity set from filter strings.
///
/// Entries without a `:` are dropped. Repeated discrete keys accumulate in
/// order; a repeated range key keeps the last entry. Never panics, whatever
/// the input.
pub fn parse<I, S>(entries: I) -> AmenitySet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = AmenitySet::new();
    for entry in entries {
        let Some((key, rest)) = entry.as_ref().split_once(':') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        if let Some((min, max)) = rest.split_once('-') {
            values.insert(
                key.to_string(),
                AmenityValue::Range {
                    min: non_empty(min),
                    max: non_empty(max),
                },
            );
        } else {
            match values.get_mut(key) {
                Some(AmenityValue::Discrete(list)) => list.push(rest.to_string()),
                _ => {
                    values.insert(
                        key.to_string(),
                        AmenityValue::Discrete(vec![rest.to_string()]),
                    );
                }
            }
        }
    }
    values
}

fn non_empty(bound: &str) -> Option<String> {
    if bound.is_empty() {
        None
    } else {
        Some(bound.to_string())
    }
}
