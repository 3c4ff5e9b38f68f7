//! Route table.

mod api;
mod form;
mod health;

pub use health::HealthResponse;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// | route                     | purpose                          |
/// |---------------------------|----------------------------------|
/// | `GET /`                   | lookup page, `?id=&show_all=`    |
/// | `POST /patients`          | save the intake form             |
/// | `GET /api/patients`       | all records as JSON              |
/// | `GET/PUT /api/patients/{id}` | one record as JSON            |
/// | `GET /health`             | health report                    |
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::show_page))
        .route("/patients", axum::routing::post(form::save_patient))
        .route("/api/patients", get(api::list_patients))
        .route(
            "/api/patients/{id}",
            get(api::get_patient).put(api::put_patient),
        )
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
