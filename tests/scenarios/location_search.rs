//! Scenario: Location Search
//!
//! Journey: A visitor picks a location for their property search.
//!
//! Steps:
//! 1. Open the location picker from its trigger
//! 2. Hover provinces to drill into municipalities and sectors
//! 3. Commit a leaf; the panel closes (single-select)
//! 4. Reopen: the draft path is gone, the committed value is not

use cascada::picker::{OpenArbiter, PanelPicker, PickerOptions};
use cascada::SelectionMode;

use crate::common::*;

/// SCENARIO: the landing-page tree with a lone selectable province.
///
/// Activating "Distrito Nacional" must emit exactly (["do"], [node]) and
/// close the panel.
#[test]
fn scenario_single_province_commit() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::single());
    let tree = distrito_nacional();

    picker.handle(&tree, open_event());
    assert!(picker.is_open());

    // Hovering a leaf opens nothing.
    picker.handle(&tree, hover(0, "do", 2));
    assert_eq!(picker.columns(&tree).len(), 1);

    let change = picker
        .handle(&tree, select(0, "do"))
        .expect("leaf activation commits");
    assert_eq!(change.ids, vec!["do".to_string()]);
    assert_eq!(change.nodes.len(), 1);
    assert_eq!(change.nodes[0].label, "Distrito Nacional");
    assert!(
        !picker.is_open(),
        "closeOnLeafSelect defaults to true in single mode"
    );
}

#[test]
fn scenario_drill_down_to_sector() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::single());
    let tree = province_tree();

    picker.handle(&tree, open_event());
    picker.handle(&tree, hover(0, "azua", 2));
    picker.handle(&tree, hover(1, "azua_las-charcas", 2));
    assert_eq!(picker.columns(&tree).len(), 3);

    let change = picker
        .handle(&tree, select(2, "azua_las-charcas_hatillo"))
        .expect("sector commit");
    assert_eq!(change.ids, vec!["azua_las-charcas_hatillo".to_string()]);
    assert!(!picker.is_open());

    // Reopening starts from a clean path but keeps the committed mirror.
    picker.handle(&tree, open_event());
    assert!(picker.path().is_empty());
    assert_eq!(picker.value(), ["azua_las-charcas_hatillo".to_string()]);
    assert!(picker
        .highlighted(&tree)
        .contains("azua"), "ancestors of the committed leaf stay highlighted");
}

#[test]
fn scenario_hover_retargets_a_shallower_column() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::single());
    let tree = province_tree();

    picker.handle(&tree, open_event());
    picker.handle(&tree, hover(0, "azua", 2));
    picker.handle(&tree, hover(1, "azua_las-charcas", 3));
    assert_eq!(picker.columns(&tree).len(), 3);

    // Moving the pointer back onto another depth-0 branch collapses the
    // deeper columns and retargets the second one.
    picker.handle(&tree, hover(0, "santiago", 4));
    let columns = picker.columns(&tree);
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1][0].id, "santiago_tamboril");
    assert_eq!(picker.path(), ["santiago".to_string()]);

    // Hovering a leaf row is a no-op and leaves the columns alone.
    picker.handle(&tree, hover(0, "do", 5));
    assert_eq!(picker.columns(&tree).len(), 2);
}

/// A selection committed under one catalog must not resolve once the
/// catalog changes (stale ids render unselected, silently).
#[test]
fn scenario_stale_selection_survives_catalog_swap() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::single());
    let tree = province_tree();

    picker.handle(&tree, open_event());
    picker.handle(&tree, select(0, "do"));

    let replacement = distrito_nacional();
    assert!(picker.highlighted(&replacement).contains("do"));

    let empty: Vec<cascada::HierarchyNode> = Vec::new();
    assert!(picker.highlighted(&empty).is_empty());
    picker.handle(&empty, open_event());
    assert!(picker.is_open());
    assert!(picker.columns(&empty).is_empty(), "empty tree renders zero columns");
}

#[test]
fn scenario_mode_is_observable_on_options() {
    let picker = PanelPicker::new(OpenArbiter::new(), PickerOptions::multiple());
    assert_eq!(picker.options().mode, SelectionMode::Multiple);
    assert!(!picker.options().closes_on_leaf_select());
}
