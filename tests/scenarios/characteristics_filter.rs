//! Scenario: Characteristics Filter
//!
//! Journey: A visitor narrows the search by amenities.
//!
//! Steps:
//! 1. Open the characteristics picker (multi-select, stays open)
//! 2. Toggle option leaves; each commit emits the full selection
//! 3. The amenity store mirrors the committed leaves via their meta
//! 4. The filter strings round-trip through the wire codec

use cascada::amenity::{encode, parse, AmenityStore, AmenityValue, RangePatch};
use cascada::picker::{OpenArbiter, PanelPicker, PickerOptions};

use crate::common::*;

/// SCENARIO: the pool characteristic from the search screen.
///
/// Select "Sí" then "No": both stay selected. Re-select "Sí": only "No"
/// remains. The panel never closes in multi mode.
#[test]
fn scenario_pool_toggles() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::multiple());
    let tree = pool_tree();

    picker.handle(&tree, open_event());
    picker.handle(&tree, hover(0, "pool", 2));

    let change = picker.handle(&tree, select(1, "pool-Sí")).unwrap();
    assert_eq!(change.ids, vec!["pool-Sí".to_string()]);
    assert!(picker.is_open());

    let change = picker.handle(&tree, select(1, "pool-No")).unwrap();
    assert_eq!(
        change.ids,
        vec!["pool-Sí".to_string(), "pool-No".to_string()]
    );

    let change = picker.handle(&tree, select(1, "pool-Sí")).unwrap();
    assert_eq!(change.ids, vec!["pool-No".to_string()]);
    assert!(picker.is_open());
}

/// The committed leaves map back to characteristic key/value pairs through
/// their meta payload.
#[test]
fn scenario_leaves_feed_the_store() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::multiple());
    let tree = pool_tree();
    let mut store = AmenityStore::multiple();

    picker.handle(&tree, open_event());
    let change = picker.handle(&tree, select(1, "pool-Sí")).unwrap();
    for node in &change.nodes {
        assert!(store.apply_leaf(node));
    }

    assert!(store.is_selected("pool", "Sí"));
    assert_eq!(encode(store.values()), vec!["pool:Sí".to_string()]);
}

/// SCENARIO: the publish-listing form serializes its amenity state and the
/// edit form reconstructs it (round-trip law).
#[test]
fn scenario_amenity_round_trip() {
    let mut store = AmenityStore::multiple();
    store.set_discrete("bedrooms", "3+");
    store.set_range("area_m2", RangePatch::min("100"));
    store.set_range("area_m2", RangePatch::max("200"));

    let filters = encode(store.values());
    assert!(filters.contains(&"bedrooms:3+".to_string()));
    assert!(filters.contains(&"area_m2:100-200".to_string()));
    assert_eq!(filters.len(), 2);

    let parsed = parse(filters.iter().map(String::as_str));
    assert_eq!(&parsed, store.values());
}

/// Independent min/max inputs patch the same range without clobbering each
/// other, and a lone bound still counts as an active filter.
#[test]
fn scenario_half_bounded_range() {
    let mut store = AmenityStore::multiple();
    store.set_range("area_m2", RangePatch::max("200"));
    assert!(store.is_active("area_m2"));

    let filters = encode(store.values());
    assert_eq!(filters, vec!["area_m2:-200".to_string()]);

    let parsed = parse(filters.iter().map(String::as_str));
    assert_eq!(
        parsed.get("area_m2"),
        Some(&AmenityValue::Range {
            min: None,
            max: Some("200".to_string()),
        })
    );
}

/// The documented `-` ambiguity: a discrete value containing a dash comes
/// back as a range. Known wire-format limitation, preserved.
#[test]
fn scenario_dash_value_ambiguity_is_preserved() {
    let mut store = AmenityStore::multiple();
    store.set_discrete("furnishing", "semi-amueblado");

    let filters = encode(store.values());
    let parsed = parse(filters.iter().map(String::as_str));
    assert_ne!(&parsed, store.values());
    assert!(matches!(
        parsed.get("furnishing"),
        Some(AmenityValue::Range { .. })
    ));
}
