//! Cascading Panel Picker
//!
//! The stateful half of the widget: lifecycle, geometry and cross-instance
//! coordination. Selection math lives in [`crate::engine`].
//!
//! # Module Structure
//!
//! - `arbiter` - page-wide "one panel open" coordination
//! - `geometry` - pure placement math (panel, flyout columns, clamping)
//! - `options` - per-instance configuration
//! - `state` - the `PanelPicker` state machine and its event type

mod arbiter;
mod geometry;
mod options;
mod state;

// Re-export public API
pub use arbiter::{OpenArbiter, PickerId};
pub use geometry::{
    column_rects, flyout_offset, panel_position, PanelLayout, Point, Rect, Size, TRIGGER_GAP,
};
pub use options::{PickerOptions, DEFAULT_VISIBLE_ITEMS};
pub use state::{PanelPicker, PickerEvent, SelectionChange};
