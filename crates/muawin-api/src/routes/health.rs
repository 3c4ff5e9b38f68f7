//! Health check endpoint.

use crate::AppState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Server status ("healthy").
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name.clone(),
        version: state.version.clone(),
    })
}
