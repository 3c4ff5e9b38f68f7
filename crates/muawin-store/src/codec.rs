//! Column encoding for the `patients` table.
//!
//! `pre_conditions` is a JSON array of condition names, catalogue labels
//! first. Decoding is lenient: values that do not parse fall back to the
//! form defaults and are logged, so one bad row never blocks a lookup.

use crate::Result;
use muawin_core::{ConditionSet, Gender, Language, PatientId, MAX_AGE};

/// Encodes conditions as the stored JSON array.
pub fn encode_conditions(conditions: &ConditionSet) -> Result<String> {
    Ok(serde_json::to_string(&conditions.to_names())?)
}

/// Decodes the stored JSON array. Malformed or missing values yield an
/// empty set.
pub fn decode_conditions(id: &PatientId, raw: Option<&str>) -> ConditionSet {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return ConditionSet::new();
    };
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(names) => ConditionSet::from_names(names),
        Err(e) => {
            tracing::warn!(patient = %id, error = %e, "Ignoring malformed pre_conditions");
            ConditionSet::new()
        }
    }
}

/// Decodes a stored gender, defaulting on unknown values.
pub fn decode_gender(id: &PatientId, raw: Option<&str>) -> Gender {
    match raw.map(str::parse::<Gender>) {
        Some(Ok(gender)) => gender,
        Some(Err(_)) => {
            tracing::warn!(patient = %id, value = ?raw, "Unknown gender, using default");
            Gender::default()
        }
        None => Gender::default(),
    }
}

/// Decodes a stored language, defaulting on unknown values.
pub fn decode_language(id: &PatientId, raw: Option<&str>) -> Language {
    match raw.map(str::parse::<Language>) {
        Some(Ok(language)) => language,
        Some(Err(_)) => {
            tracing::warn!(patient = %id, value = ?raw, "Unknown language, using default");
            Language::default()
        }
        None => Language::default(),
    }
}

/// Decodes a stored age, clamping into `0..=MAX_AGE`.
pub fn decode_age(id: &PatientId, raw: Option<i64>) -> u8 {
    let raw = raw.unwrap_or(0);
    let clamped = raw.clamp(0, i64::from(MAX_AGE));
    if clamped != raw {
        tracing::warn!(patient = %id, age = raw, "Age out of range, clamping");
    }
    u8::try_from(clamped).unwrap_or(0)
}
