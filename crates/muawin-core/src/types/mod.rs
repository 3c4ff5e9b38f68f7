//! Core types for patient records.

mod conditions;
mod form;
mod ids;
mod patient;
mod proptests;

pub use conditions::{Condition, ConditionSet};
pub use form::PatientForm;
pub use ids::PatientId;
pub use patient::{Gender, Language, PatientRecord, MAX_AGE};
