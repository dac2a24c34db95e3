//! Error types for markme

use thiserror::Error;

/// Main error type for markme operations.
///
/// Rendering itself never fails; these errors come from the layers
/// around it (configuration, storage, export).
#[derive(Error, Debug)]
pub enum MarkmeError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error for stored records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store error (corrupt record, unusable path)
    #[error("Store error: {0}")]
    Store(String),

    /// A document id that does not exist or has expired
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Rejected user input
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// Result type alias for markme operations
pub type Result<T> = std::result::Result<T, MarkmeError>;
