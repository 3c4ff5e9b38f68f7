//! Shared handler state.

use muawin_store::PatientStore;
use std::sync::Arc;

/// State cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Record store
    pub store: Arc<dyn PatientStore>,
    /// Name reported by the health check
    pub service_name: String,
    /// Version reported by the health check
    pub version: String,
}

impl AppState {
    /// Creates state around `store`, reporting this crate's name and version.
    pub fn new(store: Arc<dyn PatientStore>) -> Self {
        Self {
            store,
            service_name: "muawin".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_name", &self.service_name)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
