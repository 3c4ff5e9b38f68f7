//! Integration tests for the JSON API and health check.

use crate::common::{jane_form, TestHarness};
use axum::http::StatusCode;
use muawin_api::routes::HealthResponse;
use muawin_core::{Condition, PatientRecord};
use serde_json::json;

#[tokio::test]
async fn test_get_missing_patient_is_404() {
    let harness = TestHarness::new().await;
    let (status, body) = harness.get("/api/patients/P999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"]["category"], "not_found");
}

#[tokio::test]
async fn test_put_then_get_roundtrip() {
    let harness = TestHarness::new().await;
    let (status, body) = harness
        .put_json(
            "/api/patients/P001",
            json!({
                "id": "IGNORED",
                "name": "Jane Doe",
                "age": 34,
                "conditions": { "flags": ["diabetes"] }
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let saved: PatientRecord = serde_json::from_str(&body).unwrap();
    assert_eq!(saved.id.as_str(), "P001");

    let (status, body) = harness.get("/api/patients/P001").await;
    assert_eq!(status, StatusCode::OK);
    let loaded: PatientRecord = serde_json::from_str(&body).unwrap();
    assert_eq!(loaded, saved);
    assert!(loaded.conditions.contains(Condition::Diabetes));
}

#[tokio::test]
async fn test_put_is_idempotent() {
    let harness = TestHarness::new().await;
    let payload = json!({ "name": "Ali", "age": 60, "gender": "Male", "language": "Punjabi" });

    harness.put_json("/api/patients/P005", payload.clone()).await;
    let (_, first) = harness.get("/api/patients").await;
    harness.put_json("/api/patients/P005", payload).await;
    let (_, second) = harness.get("/api/patients").await;

    assert_eq!(first, second);
    let list: Vec<PatientRecord> = serde_json::from_str(&second).unwrap();
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_put_invalid_age_is_422() {
    let harness = TestHarness::new().await;
    let (status, body) = harness
        .put_json("/api/patients/P003", json!({ "age": 130 }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("validation"));
    let (status, _) = harness.get("/api/patients/P003").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_put_age_outside_byte_range_is_json_422() {
    let harness = TestHarness::new().await;
    for age in [json!(256), json!(-1)] {
        let (status, body) = harness
            .put_json("/api/patients/P004", json!({ "name": "X", "age": age }))
            .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "age {age}");
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["error"]["category"], "validation");
        assert!(value["error"]["message"].as_str().unwrap().contains("between 0 and 120"));
    }
}

#[tokio::test]
async fn test_put_malformed_body_is_json_422() {
    let harness = TestHarness::new().await;
    let (status, body) = harness
        .put_json("/api/patients/P004", json!({ "gender": "Unknown" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["error"]["category"], "validation");
}

#[tokio::test]
async fn test_list_includes_form_saves() {
    let harness = TestHarness::new().await;
    harness.post_form("/patients", jane_form()).await;
    harness
        .put_json("/api/patients/P000", json!({ "name": "First" }))
        .await;

    let (status, body) = harness.get("/api/patients").await;
    assert_eq!(status, StatusCode::OK);
    let list: Vec<PatientRecord> = serde_json::from_str(&body).unwrap();
    let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["P000", "P001"]);
}

#[tokio::test]
async fn test_health() {
    let harness = TestHarness::new().await;
    let (status, body) = harness.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "muawin");
    assert!(!health.version.is_empty());
}
