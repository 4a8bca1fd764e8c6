//! Pure placement math for the panel and its columns.
//!
//! All coordinates are integer cells (the terminal grid plays the role of
//! CSS pixels). Measurement (trigger rectangles, hovered-row rectangles,
//! viewport size) happens at the input boundary; everything here is a pure
//! function of those numbers, so placement is unit-testable without a
//! terminal.

use serde::Serialize;

/// Screen position in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Extent in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Axis-aligned rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Cell sizes used to lay out a panel.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    /// Width of every column.
    pub column_width: i32,
    /// Height of one item row.
    pub row_height: i32,
    /// Minimum distance kept from either horizontal viewport edge.
    pub viewport_margin: i32,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            column_width: 24,
            row_height: 1,
            viewport_margin: 2,
        }
    }
}

/// Rows between the trigger's bottom edge and the panel's top edge.
pub const TRIGGER_GAP: i32 = 1;

/// Place the panel relative to its trigger.
///
/// The panel sits directly below the trigger. If it would overflow the right
/// viewport edge it flips to align its right edge with the trigger's right
/// edge, and in every case it is clamped so it never extends past either
/// horizontal edge minus `margin`.
pub fn panel_position(trigger: &Rect, panel: Size, viewport: Size, margin: i32) -> Point {
    let y = trigger.bottom() + TRIGGER_GAP;

    let mut x = trigger.x;
    if x + panel.width > viewport.width - margin {
        x = trigger.right() - panel.width;
    }
    let max_x = (viewport.width - margin - panel.width).max(margin);
    Point {
        x: x.clamp(margin, max_x),
        y,
    }
}

/// Vertical offset of a flyout column: the spawning row's top relative to
/// the panel's top, captured at hover time.
pub fn flyout_offset(item: &Rect, panel: &Rect) -> i32 {
    item.y - panel.y
}

/// Lay out `heights.len()` columns: each directly right of its predecessor,
/// vertically offset by its captured flyout top, then clamped so no column
/// extends past either horizontal viewport edge minus `margin`.
pub fn column_rects(
    origin: Point,
    tops: &[i32],
    heights: &[i32],
    layout: &PanelLayout,
    viewport: Size,
) -> Vec<Rect> {
    let margin = layout.viewport_margin;
    let max_x = (viewport.width - margin - layout.column_width).max(margin);

    heights
        .iter()
        .enumerate()
        .map(|(index, &height)| {
            let base_x = origin.x + index as i32 * layout.column_width;
            let top = tops.get(index).copied().unwrap_or(0);
            Rect {
                x: base_x.clamp(margin, max_x),
                y: origin.y + top,
                width: layout.column_width,
                height,
            }
        })
        .collect()
}
