//! HTML handlers: load, new-patient and save.

use crate::render::{render_page, FormValues, Notice, Page};
use crate::{AppState, Result};
use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use muawin_core::{PatientForm, PatientId, PatientRecord};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    id: Option<String>,
    #[serde(default)]
    show_all: bool,
}

pub(crate) async fn show_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<(StatusCode, Html<String>)> {
    let patients = if query.show_all {
        state.store.list_all().await?
    } else {
        Vec::new()
    };
    // No id submitted yet: just the lookup bar.
    let Some(raw_id) = query.id else {
        let html = render_page(&Page {
            show_all: query.show_all,
            patients: &patients,
            ..Default::default()
        });
        return Ok((StatusCode::OK, Html(html)));
    };

    let id = match PatientId::new(&raw_id) {
        Ok(id) => id,
        Err(e) => {
            let html = render_page(&Page {
                lookup_id: &raw_id,
                notice: Some(Notice::Error(user_message(&e))),
                show_all: query.show_all,
                patients: &patients,
                ..Default::default()
            });
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)));
        }
    };

    let (record, notice) = match state.store.lookup(&id).await? {
        Some(record) => (record, None),
        None => {
            tracing::info!(patient = %id, "Patient not found, starting new record");
            let notice = Notice::Warning(format!(
                "Patient with ID {id} not found. Creating new record."
            ));
            (PatientRecord::new(id), Some(notice))
        }
    };

    let html = render_page(&Page {
        lookup_id: record.id.as_str(),
        notice,
        form: Some(FormValues::from(&record)),
        show_all: query.show_all,
        patients: &patients,
    });
    Ok((StatusCode::OK, Html(html)))
}

pub(crate) async fn save_patient(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<(StatusCode, Html<String>)> {
    let show_all = pairs.iter().any(|(k, v)| k == "show_all" && v == "true");
    let form = PatientForm::from_pairs(pairs);
    let submitted = FormValues::from(&form);

    let (status, notice, values) = match form.into_record() {
        Ok(record) => {
            state.store.upsert(&record).await?;
            let notice = Notice::Success("Patient information saved successfully!".to_string());
            (StatusCode::OK, notice, FormValues::from(&record))
        }
        Err(e) if e.is_user_error() => {
            tracing::debug!(patient = %submitted.id, error = %e, "Rejected patient form");
            (StatusCode::UNPROCESSABLE_ENTITY, Notice::Error(user_message(&e)), submitted)
        }
        Err(e) => return Err(e.into()),
    };

    let patients = if show_all {
        state.store.list_all().await?
    } else {
        Vec::new()
    };
    let lookup_id = values.id.clone();
    // Without an id there is nothing the form could save to.
    let form = (!lookup_id.is_empty()).then_some(values);
    let html = render_page(&Page {
        lookup_id: &lookup_id,
        notice: Some(notice),
        form,
        show_all,
        patients: &patients,
    });
    Ok((status, Html(html)))
}

fn user_message(err: &muawin_core::Error) -> String {
    match err {
        muawin_core::Error::Validation {
            field: Some(field),
            message,
        } if field != "id" => format!("{field}: {message}"),
        muawin_core::Error::Validation { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
