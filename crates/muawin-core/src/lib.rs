#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Muawin Core Library
//!
//! Core types and configuration for the patient intake form.

pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{
    Condition, ConditionSet, Gender, Language, PatientForm, PatientId, PatientRecord, MAX_AGE,
};
