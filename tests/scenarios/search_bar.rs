//! Scenario: Search Bar
//!
//! Journey: the three pickers of the search bar coexist on one page.
//!
//! Steps:
//! 1. Open the location picker
//! 2. Open the property-type picker: the location picker is already closed
//!    before the new panel renders (arbiter mutual exclusion)
//! 3. Resize the viewport: every column stays inside the horizontal bounds

use cascada::picker::{
    OpenArbiter, PanelPicker, PickerEvent, PickerOptions, Rect, Size,
};

use crate::common::*;

#[test]
fn scenario_only_one_panel_open_across_the_page() {
    let arbiter = OpenArbiter::new();
    let mut location = PanelPicker::new(arbiter.clone(), PickerOptions::single());
    let mut types = PanelPicker::new(arbiter.clone(), PickerOptions::multiple());
    let mut characteristics = PanelPicker::new(arbiter, PickerOptions::multiple());

    let location_tree = province_tree();
    let type_tree = vec![
        cascada::HierarchyNode::leaf("apartamento", "Apartamento"),
        cascada::HierarchyNode::leaf("villa", "Villa"),
    ];
    let characteristic_tree = pool_tree();

    location.handle(&location_tree, open_event());
    assert!(location.is_open());

    types.handle(&type_tree, open_event());
    assert!(
        !location.is_open(),
        "the previous holder closes before the new panel is visible"
    );
    assert!(types.is_open());

    characteristics.handle(&characteristic_tree, open_event());
    assert!(!types.is_open());
    assert!(characteristics.is_open());

    // Exactly one holder at any time.
    let open_count = [&location, &types, &characteristics]
        .iter()
        .filter(|picker| picker.is_open())
        .count();
    assert_eq!(open_count, 1);
}

#[test]
fn scenario_evicted_picker_keeps_its_committed_value() {
    let arbiter = OpenArbiter::new();
    let mut location = PanelPicker::new(arbiter.clone(), PickerOptions::single());
    let mut types = PanelPicker::new(arbiter, PickerOptions::multiple());
    let location_tree = province_tree();
    let type_tree = vec![cascada::HierarchyNode::leaf("villa", "Villa")];

    location.handle(&location_tree, open_event());
    location.handle(&location_tree, select(0, "do"));
    assert_eq!(location.value(), ["do".to_string()]);

    // Reopen location, then evict it by opening types.
    location.handle(&location_tree, open_event());
    location.handle(&location_tree, hover(0, "azua", 2));
    types.handle(&type_tree, open_event());

    assert!(!location.is_open());
    assert_eq!(
        location.value(),
        ["do".to_string()],
        "eviction discards the draft path, never the committed selection"
    );
    location.handle(&location_tree, open_event());
    assert!(location.path().is_empty());
}

#[test]
fn scenario_resize_keeps_every_column_inside_the_viewport() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::single());
    let tree = province_tree();

    picker.handle(&tree, open_event());
    picker.handle(&tree, hover(0, "azua", 2));
    picker.handle(&tree, hover(1, "azua_las-charcas", 3));
    assert_eq!(picker.columns(&tree).len(), 3);

    for width in [120, 60, 36] {
        let viewport = Size { width, height: 20 };
        picker.handle(
            &tree,
            PickerEvent::ViewportChanged {
                trigger: trigger(),
                viewport,
            },
        );
        let margin = picker.layout().viewport_margin;
        let rects = picker.column_rects(&tree);
        assert_eq!(rects.len(), 3, "resize keeps the open columns");
        for rect in rects {
            assert!(rect.x >= margin, "width {width}: {rect:?}");
            assert!(
                rect.right() <= width - margin,
                "width {width}: {rect:?}"
            );
        }
    }
}

#[test]
fn scenario_flyout_columns_align_with_their_spawning_row() {
    let arbiter = OpenArbiter::new();
    let mut picker = PanelPicker::new(arbiter, PickerOptions::single());
    let tree = province_tree();

    picker.handle(&tree, open_event());
    let origin = picker.panel_origin().unwrap();

    // Hover the row three cells below the panel top.
    let row_y = origin.y + 3;
    picker.handle(
        &tree,
        PickerEvent::NodeHovered {
            column: 0,
            id: "azua".to_string(),
            item: Rect::new(origin.x, row_y, 24, 1),
        },
    );

    let rects = picker.column_rects(&tree);
    assert_eq!(rects[0].y, origin.y, "column 0 sits at the panel top");
    assert_eq!(
        rects[1].y, row_y,
        "the flyout column is flush with the row that spawned it"
    );
}
