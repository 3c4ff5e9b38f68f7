//! Parsing a submitted intake form into a [`PatientRecord`].

use super::{Condition, ConditionSet, Gender, Language, PatientId, PatientRecord, MAX_AGE};
use crate::{Error, Result};

/// Raw values of a submitted intake form.
///
/// Field names match the `name` attributes of the rendered HTML form:
/// `id`, `name`, `age`, `gender`, `language`, one `condition` entry per
/// ticked checkbox (value is the condition key), and `custom_conditions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    /// Patient identifier (hidden field)
    pub id: String,
    /// Full name
    pub name: String,
    /// Age as typed
    pub age: String,
    /// Selected gender
    pub gender: String,
    /// Selected language
    pub language: String,
    /// Condition keys of ticked checkboxes
    pub conditions: Vec<String>,
    /// Comma-separated custom conditions
    pub custom_conditions: String,
}

impl PatientForm {
    /// Collects form fields from urlencoded key/value pairs.
    ///
    /// Unknown keys are ignored; repeated `condition` keys accumulate.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "id" => form.id = value.into(),
                "name" => form.name = value.into(),
                "age" => form.age = value.into(),
                "gender" => form.gender = value.into(),
                "language" => form.language = value.into(),
                "condition" => form.conditions.push(value.into()),
                "custom_conditions" => form.custom_conditions = value.into(),
                _ => {}
            }
        }
        form
    }

    /// Validates the form and builds the record to upsert.
    pub fn into_record(self) -> Result<PatientRecord> {
        let id = PatientId::new(&self.id)?;
        let age = parse_age(&self.age)?;
        let gender: Gender = self.gender.parse()?;
        let language: Language = self.language.parse()?;

        let mut conditions = ConditionSet::new();
        for key in &self.conditions {
            let condition = Condition::from_key(key).ok_or_else(|| {
                Error::validation_field("condition", format!("unknown condition '{key}'"))
            })?;
            conditions.insert(condition);
        }
        conditions.replace_custom_text(&self.custom_conditions);

        let record = PatientRecord::new(id)
            .with_name(self.name.trim())
            .with_age(age)
            .with_gender(gender)
            .with_language(language)
            .with_conditions(conditions);
        record.validate()?;
        Ok(record)
    }
}

fn parse_age(raw: &str) -> Result<u8> {
    let age_error = || Error::validation_field("age", format!("must be between 0 and {MAX_AGE}"));
    let age: u8 = raw.trim().parse().map_err(|_| age_error())?;
    if age > MAX_AGE {
        return Err(age_error());
    }
    Ok(age)
}
