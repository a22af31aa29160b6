//! Errors returned by payload construction

use thiserror::Error;

/// Failures that request construction reports to its caller.
///
/// Assertion failures never use this type; they abort the running test.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request could not be assembled (bad URI, header, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] axum::http::Error),

    /// The transport failed to produce a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Schema nesting went past the configured limit
    #[error("Schema nesting depth {depth} exceeds maximum of {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// Strict evaluation rejected the schema
    #[error("Invalid schema:\n{}", .0.join("\n"))]
    InvalidSchema(Vec<String>),
}
