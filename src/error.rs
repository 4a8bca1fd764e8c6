//! Error types for cascada.
//!
//! Library errors use `thiserror`; the picker core itself has no failure
//! modes (bad tree data degrades silently, see the engine docs), so every
//! variant here belongs to the boundary: catalog files, configuration and
//! the terminal session.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cascada operations
pub type CascadaResult<T> = Result<T, CascadaError>;

/// Main error type for cascada operations
#[derive(Error, Debug)]
pub enum CascadaError {
    /// Catalog file missing on disk
    #[error("catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    /// Catalog file exists but is not valid catalog JSON
    #[error("invalid catalog in {path}: {message}")]
    InvalidCatalog { path: PathBuf, message: String },

    /// Configuration file is not valid TOML for our schema
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Amenity filter JSON did not match `string[] | {min?, max?}` per key
    #[error("invalid amenity set: {message}")]
    InvalidAmenitySet { message: String },

    /// Interactive commands need a real terminal
    #[error("interactive mode requires a terminal (stdout is not a tty)")]
    NotATerminal,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
