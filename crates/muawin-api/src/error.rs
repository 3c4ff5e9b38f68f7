//! Error types for muawin-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Result type alias for muawin-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in muawin-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from muawin-core
    #[error("{0}")]
    Core(#[from] muawin_core::Error),

    /// Error from muawin-store
    #[error("Storage error: {0}")]
    Store(#[from] muawin_store::Error),

    /// Requested patient does not exist
    #[error("Patient {0} not found")]
    NotFound(String),

    /// Listener could not be bound or the server stopped with an error
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(e) if e.is_user_error() => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Store(muawin_store::Error::Core(e)) if e.is_user_error() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short category name used in JSON error bodies.
    pub fn category(&self) -> &'static str {
        match self.status() {
            StatusCode::UNPROCESSABLE_ENTITY => "validation",
            StatusCode::NOT_FOUND => "not_found",
            _ => "internal",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
