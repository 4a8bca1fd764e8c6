//! Property tests for the panel placement math.

use proptest::prelude::*;

use cascada::picker::{column_rects, panel_position, PanelLayout, Point, Rect, Size};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: whenever the panel fits between the margins, its position
    /// keeps it fully inside the viewport; otherwise it pins to the left
    /// margin.
    #[test]
    fn property_panel_stays_inside_the_viewport(
        trigger_x in -50i32..200,
        trigger_width in 1i32..40,
        panel_width in 1i32..60,
        viewport_width in 20i32..200,
        margin in 0i32..5,
    ) {
        let trigger = Rect::new(trigger_x, 0, trigger_width, 1);
        let viewport = Size { width: viewport_width, height: 40 };
        let panel = Size { width: panel_width, height: 10 };

        let pos = panel_position(&trigger, panel, viewport, margin);

        prop_assert_eq!(pos.y, trigger.bottom() + 1);
        prop_assert!(pos.x >= margin);
        if panel_width <= viewport_width - 2 * margin {
            prop_assert!(pos.x + panel_width <= viewport_width - margin);
        } else {
            prop_assert_eq!(pos.x, margin);
        }
    }

    /// PROPERTY: after any viewport change, no column rect extends past
    /// either horizontal edge minus the margin (whenever a column fits at
    /// all).
    #[test]
    fn property_columns_never_escape_the_viewport(
        origin_x in -50i32..200,
        origin_y in 0i32..40,
        tops in prop::collection::vec(-5i32..30, 1..5),
        viewport_width in 40i32..200,
    ) {
        let layout = PanelLayout::default();
        let viewport = Size { width: viewport_width, height: 50 };
        let heights: Vec<i32> = tops.iter().map(|_| 6).collect();

        let rects = column_rects(
            Point { x: origin_x, y: origin_y },
            &tops,
            &heights,
            &layout,
            viewport,
        );

        prop_assert_eq!(rects.len(), tops.len());
        for rect in rects {
            prop_assert!(rect.x >= layout.viewport_margin);
            prop_assert!(rect.right() <= viewport.width - layout.viewport_margin);
        }
    }
}
