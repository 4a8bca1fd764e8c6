//! Per-instance picker configuration.

use crate::engine::SelectionMode;

/// Items shown per column before the "show more" affordance kicks in.
pub const DEFAULT_VISIBLE_ITEMS: usize = 5;

/// Configuration for one picker instance.
#[derive(Debug, Clone)]
pub struct PickerOptions {
    pub mode: SelectionMode,
    /// Collapsed columns show this many items.
    pub initial_visible_items: usize,
    /// Whether a leaf selection also closes the panel. `None` picks the
    /// mode default: single-select closes, multi-select stays open.
    pub close_on_leaf_select: Option<bool>,
}

impl PickerOptions {
    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            initial_visible_items: DEFAULT_VISIBLE_ITEMS,
            close_on_leaf_select: None,
        }
    }

    pub fn with_visible_items(mut self, count: usize) -> Self {
        self.initial_visible_items = count;
        self
    }

    pub fn with_close_on_leaf_select(mut self, close: bool) -> Self {
        self.close_on_leaf_select = Some(close);
        self
    }

    /// Resolve the close-on-select behavior against the mode default.
    pub fn closes_on_leaf_select(&self) -> bool {
        self.close_on_leaf_select
            .unwrap_or(self.mode == SelectionMode::Single)
    }
}
