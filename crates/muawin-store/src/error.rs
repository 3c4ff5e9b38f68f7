//! Error types for muawin-store

use thiserror::Error;

/// Result type alias for muawin-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in muawin-store
///
/// A missing record is not an error; lookups return `Ok(None)`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from muawin-core
    #[error("Core error: {0}")]
    Core(#[from] muawin_core::Error),

    /// SQLite driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Condition list could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
