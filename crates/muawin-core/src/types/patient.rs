//! The patient record and its enumerated fields.

use super::{ConditionSet, PatientId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound accepted for a patient's age.
pub const MAX_AGE: u8 = 120;

/// Patient gender as offered on the intake form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male (form default)
    #[default]
    Male,
    /// Female
    Female,
    /// Other
    Other,
}

impl Gender {
    /// All options, in form order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Stored and displayed name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| Error::validation_field("gender", format!("unknown gender '{s}'")))
    }
}

/// Preferred language for the patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English (form default)
    #[default]
    English,
    /// Urdu
    Urdu,
    /// Punjabi
    Punjabi,
    /// Other
    Other,
}

impl Language {
    /// All options, in form order.
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Urdu,
        Language::Punjabi,
        Language::Other,
    ];

    /// Stored and displayed name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::Punjabi => "Punjabi",
            Language::Other => "Other",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s.trim())
            .ok_or_else(|| Error::validation_field("language", format!("unknown language '{s}'")))
    }
}

/// One row of the patient table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Upsert key
    pub id: PatientId,
    /// Full name, may be empty
    #[serde(default)]
    pub name: String,
    /// Age in years, `0..=MAX_AGE`
    #[serde(default)]
    pub age: u8,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
    /// Preferred language
    #[serde(default)]
    pub language: Language,
    /// Pre-existing conditions
    #[serde(default)]
    pub conditions: ConditionSet,
}

impl PatientRecord {
    /// A blank record for a patient seen for the first time.
    pub fn new(id: PatientId) -> Self {
        Self {
            id,
            name: String::new(),
            age: 0,
            gender: Gender::default(),
            language: Language::default(),
            conditions: ConditionSet::new(),
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age.
    pub fn with_age(mut self, age: u8) -> Self {
        self.age = age;
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Replaces the conditions.
    pub fn with_conditions(mut self, conditions: ConditionSet) -> Self {
        self.conditions = conditions;
        self
    }

    /// Checks the bounds the form enforces.
    pub fn validate(&self) -> Result<()> {
        if self.age > MAX_AGE {
            return Err(Error::validation_field(
                "age",
                format!("must be between 0 and {MAX_AGE}"),
            ));
        }
        Ok(())
    }
}
