//! Persistence layer error types

use thiserror::Error;

/// Errors that can occur while opening database connections
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Connection URL could not be used
    #[error("Invalid {role} connection URL: {reason}")]
    InvalidUrl { role: &'static str, reason: String },

    /// Database error from SQLx
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
