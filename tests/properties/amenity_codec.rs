//! Property tests for the amenity filter codec.

use proptest::prelude::*;

use cascada::amenity::{encode, parse, AmenitySet, AmenityValue};

fn key_strategy() -> impl Strategy<Value = String> {
    // Keys are characteristic ids: slugs without separators that would
    // collide with the wire format.
    proptest::string::string_regex("[a-z][a-z0-9_]{0,11}").unwrap()
}

fn discrete_value_strategy() -> impl Strategy<Value = String> {
    // Values free of ':' and '-': the documented format limitation makes
    // '-' ambiguous, and ':' only splits once, so these generators stay on
    // the unambiguous subset the round-trip law covers.
    proptest::string::string_regex("[A-Za-z0-9+º ]{1,10}").unwrap()
}

fn bound_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[0-9]{1,6}").unwrap())
}

fn amenity_set_strategy() -> impl Strategy<Value = AmenitySet> {
    let value = prop_oneof![
        prop::collection::vec(discrete_value_strategy(), 1..4)
            .prop_map(AmenityValue::Discrete),
        (bound_strategy(), bound_strategy())
            .prop_map(|(min, max)| AmenityValue::Range { min, max }),
    ];
    prop::collection::btree_map(key_strategy(), value, 0..6)
}

/// Drop entries the codec is specified to skip (inactive values) and
/// deduplicate discrete lists the way toggling would.
fn normalize(set: &AmenitySet) -> AmenitySet {
    set.iter()
        .filter(|(_, value)| value.is_active())
        .map(|(key, value)| {
            let value = match value {
                AmenityValue::Discrete(values) => {
                    let mut seen = Vec::new();
                    for v in values {
                        if !seen.contains(v) {
                            seen.push(v.clone());
                        }
                    }
                    AmenityValue::Discrete(seen)
                }
                range => range.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: encode → parse reconstructs every active value exactly
    /// (on the unambiguous value subset).
    #[test]
    fn property_codec_round_trips(set in amenity_set_strategy()) {
        let normalized = normalize(&set);
        let encoded = encode(&normalized);
        let parsed = parse(encoded.iter().map(String::as_str));
        prop_assert_eq!(parsed, normalized);
    }

    /// PROPERTY: every encoded entry carries its key before the first ':'.
    #[test]
    fn property_encoded_entries_are_keyed(set in amenity_set_strategy()) {
        for entry in encode(&set) {
            let (key, _) = entry.split_once(':').expect("every entry has a colon");
            prop_assert!(set.contains_key(key), "unknown key {}", key);
        }
    }

    /// PROPERTY: parse never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(entries in prop::collection::vec(".{0,32}", 0..8)) {
        let _ = parse(entries.iter().map(String::as_str));
    }

    /// PROPERTY: parsing is idempotent: re-encoding a parsed set and
    /// parsing again reproduces every active value.
    #[test]
    fn property_parse_encode_parse_is_stable(entries in prop::collection::vec("[a-z]{1,6}:[A-Za-z0-9 -]{0,10}", 0..8)) {
        let first = parse(entries.iter().map(String::as_str));
        let second = parse(encode(&first).iter().map(String::as_str));
        // Inactive values (e.g. a bare "key:-") are skipped by encode, so
        // only the active part of the first parse must survive.
        let active: AmenitySet = first
            .into_iter()
            .filter(|(_, value)| value.is_active())
            .collect();
        prop_assert_eq!(active, second);
    }
}
