//! Pure selection engine.
//!
//! Everything in this module is side-effect free: given a forest, a
//! navigation path and a selection, it computes visible columns, activation
//! outcomes and highlight sets. The stateful picker controller in
//! [`crate::picker`] is a thin lifecycle wrapper around these functions.

mod columns;
mod highlight;
mod selection;

pub use columns::{compute_columns, labels_for_ids, path_from_ids};
pub use highlight::highlighted_ids;
pub use selection::{activate, Activation, SelectionMode};
