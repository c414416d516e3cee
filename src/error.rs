//! Error types for the comparator.

use thiserror::Error;

/// Errors raised by catalog loading, display list mutation and config.
#[derive(Error, Debug)]
pub enum ComparatorError {
    /// Add was triggered with nothing selected
    #[error("no celestial body selected")]
    NoSelection,

    /// The key does not exist in the catalog
    #[error("unknown catalog key: {0}")]
    UnknownCatalogKey(String),

    /// An operation needed at least one displayed body
    #[error("display list is empty")]
    EmptyList,

    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Rejected catalog contents (duplicate keys, bad diameters)
    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for comparator operations.
pub type Result<T> = std::result::Result<T, ComparatorError>;
