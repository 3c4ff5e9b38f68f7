//! JSON API over the record store.

use crate::{AppState, Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use muawin_core::{ConditionSet, Gender, Language, PatientId, PatientRecord, MAX_AGE};
use serde::Deserialize;

/// Body of `PUT /api/patients/{id}`. The id comes from the path.
#[derive(Debug, Deserialize)]
pub(crate) struct PatientPayload {
    #[serde(default)]
    name: String,
    #[serde(default)]
    age: i64,
    #[serde(default)]
    gender: Gender,
    #[serde(default)]
    language: Language,
    #[serde(default)]
    conditions: ConditionSet,
}

impl PatientPayload {
    fn into_record(self, id: PatientId) -> muawin_core::Result<PatientRecord> {
        let age = u8::try_from(self.age)
            .ok()
            .filter(|age| *age <= MAX_AGE)
            .ok_or_else(|| {
                muawin_core::Error::validation_field("age", format!("must be between 0 and {MAX_AGE}"))
            })?;
        let record = PatientRecord::new(id)
            .with_name(self.name)
            .with_age(age)
            .with_gender(self.gender)
            .with_language(self.language)
            .with_conditions(self.conditions);
        record.validate()?;
        Ok(record)
    }
}

pub(crate) async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<PatientRecord>>> {
    Ok(Json(state.store.list_all().await?))
}

pub(crate) async fn get_patient(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PatientRecord>> {
    let id = PatientId::new(&raw_id)?;
    state
        .store
        .lookup(&id)
        .await?
        .map(Json)
        .ok_or_else(|| Error::NotFound(id.into_string()))
}

pub(crate) async fn put_patient(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: std::result::Result<Json<PatientPayload>, JsonRejection>,
) -> Result<Json<PatientRecord>> {
    let id = PatientId::new(&raw_id)?;
    // Malformed bodies get the same JSON error shape as invalid values.
    let Json(payload) =
        payload.map_err(|rejection| muawin_core::Error::validation(rejection.body_text()))?;
    let record = payload.into_record(id)?;
    state.store.upsert(&record).await?;
    Ok(Json(record))
}
