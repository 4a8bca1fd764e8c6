//! Amenity selection state.
//!
//! The store is the consumer-facing layer above the picker: it translates
//! between the picker's leaf-id vocabulary (via leaf meta) and the domain's
//! characteristic-key/value vocabulary, and it manages the one input shape
//! that does not fit the tree model: numeric ranges with independent
//! min/max fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::SelectionMode;
use crate::model::catalog::CharacteristicRef;
use crate::model::node::HierarchyNode;

/// Value held for one characteristic key.
///
/// A key never mixes shapes: the characteristic's declared catalog type
/// decides which one is legal, and writing one shape over the other
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmenityValue {
    /// Discrete values of a select/boolean characteristic, insertion order.
    Discrete(Vec<String>),
    /// Bounds of a number-range characteristic.
    Range {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<String>,
    },
}

impl AmenityValue {
    /// A value filters results iff it has any content: a non-empty discrete
    /// list, or a range with at least one bound.
    pub fn is_active(&self) -> bool {
        match self {
            Self::Discrete(values) => !values.is_empty(),
            Self::Range { min, max } => min.is_some() || max.is_some(),
        }
    }
}

/// Partial range update: `None` leaves a bound untouched, `Some("")` clears
/// it, anything else sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangePatch {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl RangePatch {
    pub fn min(value: impl Into<String>) -> Self {
        Self {
            min: Some(value.into()),
            max: None,
        }
    }

    pub fn max(value: impl Into<String>) -> Self {
        Self {
            min: None,
            max: Some(value.into()),
        }
    }
}

/// The full amenity set, keyed by characteristic id. `BTreeMap` keeps
/// serialization deterministic.
pub type AmenitySet = BTreeMap<String, AmenityValue>;

/// Stateful wrapper enforcing the mode rule over an [`AmenitySet`].
#[derive(Debug, Clone)]
pub struct AmenityStore {
    mode: SelectionMode,
    values: AmenitySet,
}

impl AmenityStore {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            values: AmenitySet::new(),
        }
    }

    /// Search screens toggle, so multiple is the usual mode.
    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    pub fn values(&self) -> &AmenitySet {
        &self.values
    }

    /// Replace the whole set (e.g. when loading a saved listing for edit).
    pub fn set_values(&mut self, values: AmenitySet) {
        self.values = values;
    }

    /// Record a discrete value: single mode replaces, multiple mode toggles.
    /// A key currently holding a range is replaced by a fresh list.
    pub fn set_discrete(&mut self, key: &str, value: &str) {
        let next = match (self.mode, self.values.get(key)) {
            (SelectionMode::Multiple, Some(AmenityValue::Discrete(current))) => {
                if current.iter().any(|existing| existing == value) {
                    current
                        .iter()
                        .filter(|existing| existing.as_str() != value)
                        .cloned()
                        .collect()
                } else {
                    let mut list = current.clone();
                    list.push(value.to_string());
                    list
                }
            }
            _ => vec![value.to_string()],
        };
        self.values
            .insert(key.to_string(), AmenityValue::Discrete(next));
    }

    /// Shallow-merge a range patch, preserving the untouched bound so two
    /// independent min/max inputs never clobber each other. A key currently
    /// holding a discrete list is replaced by a fresh range.
    pub fn set_range(&mut self, key: &str, patch: RangePatch) {
        let (mut min, mut max) = match self.values.get(key) {
            Some(AmenityValue::Range { min, max }) => (min.clone(), max.clone()),
            _ => (None, None),
        };
        if let Some(value) = patch.min {
            min = normalize_bound(value);
        }
        if let Some(value) = patch.max {
            max = normalize_bound(value);
        }
        self.values
            .insert(key.to_string(), AmenityValue::Range { min, max });
    }

    /// Membership test against the discrete form only; range keys have no
    /// "is selected" notion.
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        match self.values.get(key) {
            Some(AmenityValue::Discrete(values)) => values.iter().any(|v| v == value),
            _ => false,
        }
    }

    /// Whether the key currently filters anything.
    pub fn is_active(&self, key: &str) -> bool {
        self.values.get(key).is_some_and(AmenityValue::is_active)
    }

    /// Map a committed picker leaf back into the store through its meta
    /// payload. Returns false (and changes nothing) for leaves without a
    /// characteristic reference.
    pub fn apply_leaf(&mut self, leaf: &HierarchyNode) -> bool {
        let Some(meta) = &leaf.meta else {
            return false;
        };
        let Ok(reference) = serde_json::from_value::<CharacteristicRef>(meta.clone()) else {
            return false;
        };
        self.set_discrete(&reference.characteristic_id, &reference.value);
        true
    }

    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Empty input fields clear their bound rather than storing "".
fn normalize_bound(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
