//! Error types for toolcat
//!
//! Centralized error handling using thiserror.
//!
//! Writes to the persistence medium fail loud (`Persistence`). Reads of
//! corrupt or missing data never surface here; the store treats them as
//! an empty collection.

use thiserror::Error;

/// All error types that can occur in toolcat
#[derive(Debug, Error)]
pub enum ToolcatError {
    /// The persistence medium rejected a write (quota exceeded, medium
    /// unavailable). Propagated to the caller with no automatic retry.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for toolcat operations
pub type Result<T> = std::result::Result<T, ToolcatError>;
