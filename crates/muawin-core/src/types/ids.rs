//! Patient identifier.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-supplied identifier for a patient record (e.g. `P001`).
///
/// Surrounding whitespace is trimmed on construction and the result must
/// not be empty. The identifier is the upsert key of the record store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientId(String);

impl PatientId {
    /// Creates a patient ID, trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use muawin_core::PatientId;
    ///
    /// let id = PatientId::new("  P001 ").unwrap();
    /// assert_eq!(id.as_str(), "P001");
    /// assert!(PatientId::new("   ").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(Error::validation_field("id", "Please enter a Patient ID"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PatientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PatientId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PatientId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PatientId> for String {
    fn from(id: PatientId) -> Self {
        id.0
    }
}
