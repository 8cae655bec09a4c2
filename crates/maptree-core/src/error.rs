//! Error types for the JSON round-trip boundary.
//!
//! Rendering itself is total and has no error path; the only fallible
//! operations are serialization and reparsing on the copy path.

use thiserror::Error;

/// Errors from serializing a tree to JSON or parsing one back.
#[derive(Error, Debug)]
pub enum TreeError {
    /// JSON serialize/parse failure, including non-finite floats the format
    /// cannot represent.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout maptree-core.
pub type Result<T> = std::result::Result<T, TreeError>;
