//! Integration tests for the HTML lookup / edit / save cycle.

use crate::common::{jane_form, TestHarness};
use axum::http::StatusCode;
use muawin_core::{Condition, Gender, Language, PatientId, PatientRecord};
use muawin_store::PatientStore;

#[tokio::test]
async fn test_landing_page_shows_lookup_only() {
    let harness = TestHarness::new().await;
    let (status, html) = harness.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Load Patient Data"));
    assert!(!html.contains("Save Patient Information"));
}

#[tokio::test]
async fn test_unknown_patient_starts_blank_record() {
    let harness = TestHarness::new().await;
    let (status, html) = harness.get("/?id=P999").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Patient with ID P999 not found. Creating new record."));
    assert!(html.contains("name=\"name\" value=\"\""));
    assert!(html.contains("value=\"0\""));
    assert!(html.contains("<option value=\"Male\" selected>"));
    assert!(html.contains("<option value=\"English\" selected>"));
    assert!(!html.contains(" checked>"));

    // Loading alone must not create the record.
    let id = PatientId::new("P999").unwrap();
    assert!(harness.store.lookup(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_blank_id_is_rejected() {
    let harness = TestHarness::new().await;
    let (status, html) = harness.get("/?id=+++").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("Please enter a Patient ID"));
    assert!(!html.contains("Save Patient Information"));
}

#[tokio::test]
async fn test_save_then_load() {
    let harness = TestHarness::new().await;

    let (status, html) = harness.post_form("/patients", jane_form()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Patient information saved successfully!"));

    let stored = harness
        .store
        .lookup(&PatientId::new("P001").unwrap())
        .await
        .unwrap()
        .expect("record should be stored");
    assert_eq!(stored.name, "Jane Doe");
    assert_eq!(stored.age, 34);
    assert_eq!(stored.gender, Gender::Female);
    assert_eq!(stored.language, Language::Urdu);
    assert!(stored.conditions.contains(Condition::Diabetes));
    assert!(stored.conditions.contains(Condition::Asthma));
    assert_eq!(stored.conditions.custom(), ["Migraine", "Gout"]);

    let (status, html) = harness.get("/?id=P001").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!html.contains("not found"));
    assert!(html.contains("value=\"Jane Doe\""));
    assert!(html.contains("value=\"diabetes\" checked"));
    assert!(html.contains(">Migraine, Gout</textarea>"));
}

#[tokio::test]
async fn test_resave_overwrites() {
    let harness = TestHarness::new().await;
    harness.post_form("/patients", jane_form()).await;

    let (status, _) = harness
        .post_form(
            "/patients",
            "id=P001&name=Jane+Smith&age=35&gender=Female&language=English&custom_conditions=",
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let all = harness.store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Jane Smith");
    assert!(all[0].conditions.is_empty());
}

#[tokio::test]
async fn test_invalid_age_is_not_saved() {
    let harness = TestHarness::new().await;
    let (status, html) = harness
        .post_form(
            "/patients",
            "id=P002&name=Old&age=150&gender=Male&language=English&custom_conditions=",
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("age: must be between 0 and 120"));
    assert!(html.contains("Save Patient Information"));
    let id = PatientId::new("P002").unwrap();
    assert!(harness.store.lookup(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rejected_form_keeps_submitted_values() {
    let harness = TestHarness::new().await;
    harness.post_form("/patients", jane_form()).await;

    let (status, html) = harness
        .post_form(
            "/patients",
            "id=P001&name=Jane+Smith&age=150&gender=Other&language=Punjabi\
             &condition=copd&custom_conditions=Lupus",
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(html.contains("value=\"Jane Smith\""));
    assert!(html.contains("value=\"150\""));
    assert!(html.contains("<option value=\"Other\" selected>"));
    assert!(html.contains("<option value=\"Punjabi\" selected>"));
    assert!(html.contains("value=\"copd\" checked"));
    assert!(!html.contains("value=\"diabetes\" checked"));
    assert!(html.contains(">Lupus</textarea>"));

    // the stored record is untouched
    let stored = harness
        .store
        .lookup(&PatientId::new("P001").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.name, "Jane Doe");
}

#[tokio::test]
async fn test_save_keeps_sidebar_open() {
    let harness = TestHarness::new().await;
    let body = format!("{}&show_all=true", jane_form());

    let (status, html) = harness.post_form("/patients", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Patient List"));
    assert!(html.contains("<td>P001</td><td>Jane Doe</td>"));

    let (_, closed) = harness.post_form("/patients", jane_form()).await;
    assert!(!closed.contains("Patient List"));
}

#[tokio::test]
async fn test_sidebar_lists_all_patients() {
    let harness = TestHarness::new().await;
    for raw in ["P002", "P001"] {
        let record = PatientRecord::new(PatientId::new(raw).unwrap()).with_name(format!("Name {raw}"));
        harness.store.upsert(&record).await.unwrap();
    }

    let (_, hidden) = harness.get("/").await;
    assert!(!hidden.contains("Patient List"));

    let (status, html) = harness.get("/?show_all=true").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Patient List"));
    let first = html.find("<td>P001</td>").unwrap();
    let second = html.find("<td>P002</td>").unwrap();
    assert!(first < second);
}
