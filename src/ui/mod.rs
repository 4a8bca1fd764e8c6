//! Terminal presentation of the picker.
//!
//! # Module Structure
//!
//! - `theme` - design tokens (glyphs, colors) with ASCII fallbacks
//! - `terminal` - capability detection
//! - `render` - canvas painting of triggers, columns and bars
//! - `input` - key/mouse mapping and the interactive browse loop

pub mod input;
pub mod render;
pub mod terminal;
pub mod theme;

pub use input::{key_to_action, run_interactive, BrowseAction, BrowseApp, BrowseSummary};
pub use render::{render_help_bar, render_status_bar, Canvas};
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Glyphs;
