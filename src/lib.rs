//! cascada - cascading multi-column panel picker
//!
//! cascada is the hierarchical selection widget of a property-search UI,
//! split into a reusable core: a recursive tree model, a pure selection
//! engine (columns, activation, highlighting), a stateful panel controller
//! with viewport-aware positioning and single-open coordination, and an
//! amenity store that maps committed leaves back to characteristic filters.

pub mod amenity;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod picker;
pub mod ui;

// Re-exports for convenience
pub use amenity::{AmenitySet, AmenityStore, AmenityValue, RangePatch};
pub use config::{Config, ConfigWarning};
pub use engine::{activate, compute_columns, highlighted_ids, path_from_ids, SelectionMode};
pub use error::{CascadaError, CascadaResult};
pub use model::{HierarchyNode, RawProvince};
pub use picker::{
    OpenArbiter, PanelLayout, PanelPicker, PickerEvent, PickerOptions, Point, Rect,
    SelectionChange, Size,
};
