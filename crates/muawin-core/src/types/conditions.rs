//! Pre-existing condition catalogue and per-patient condition sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Commonly tracked conditions, offered as checkboxes on the intake form.
///
/// Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Diabetes
    Diabetes,
    /// Hypertension
    Hypertension,
    /// Asthma
    Asthma,
    /// Heart Disease
    HeartDisease,
    /// Arthritis
    Arthritis,
    /// Chronic obstructive pulmonary disease
    Copd,
    /// Depression
    Depression,
    /// Anxiety
    Anxiety,
    /// Cancer
    Cancer,
    /// Thyroid Disorder
    ThyroidDisorder,
    /// Obesity
    Obesity,
}

impl Condition {
    /// The whole catalogue, in display order.
    pub const ALL: [Condition; 11] = [
        Condition::Diabetes,
        Condition::Hypertension,
        Condition::Asthma,
        Condition::HeartDisease,
        Condition::Arthritis,
        Condition::Copd,
        Condition::Depression,
        Condition::Anxiety,
        Condition::Cancer,
        Condition::ThyroidDisorder,
        Condition::Obesity,
    ];

    /// Human-readable label. This is also the name stored in the database.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::Hypertension => "Hypertension",
            Condition::Asthma => "Asthma",
            Condition::HeartDisease => "Heart Disease",
            Condition::Arthritis => "Arthritis",
            Condition::Copd => "COPD",
            Condition::Depression => "Depression",
            Condition::Anxiety => "Anxiety",
            Condition::Cancer => "Cancer",
            Condition::ThyroidDisorder => "Thyroid Disorder",
            Condition::Obesity => "Obesity",
        }
    }

    /// Machine key used for form fields and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::Hypertension => "hypertension",
            Condition::Asthma => "asthma",
            Condition::HeartDisease => "heart_disease",
            Condition::Arthritis => "arthritis",
            Condition::Copd => "copd",
            Condition::Depression => "depression",
            Condition::Anxiety => "anxiety",
            Condition::Cancer => "cancer",
            Condition::ThyroidDisorder => "thyroid_disorder",
            Condition::Obesity => "obesity",
        }
    }

    /// Looks up a catalogue entry by its exact label, ignoring surrounding
    /// whitespace. `"asthma"` is not `"Asthma"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Looks up a catalogue entry by its machine key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The conditions recorded for one patient: catalogue flags plus an
/// ordered list of free-text custom conditions.
///
/// Custom entries are always normalized: trimmed, non-empty, unique, and
/// never equal to a catalogue label (those become flags instead).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawConditionSet")]
pub struct ConditionSet {
    flags: BTreeSet<Condition>,
    custom: Vec<String>,
}

#[derive(Deserialize)]
struct RawConditionSet {
    #[serde(default)]
    flags: Vec<Condition>,
    #[serde(default)]
    custom: Vec<String>,
}

impl From<RawConditionSet> for ConditionSet {
    fn from(raw: RawConditionSet) -> Self {
        let mut set = ConditionSet::new();
        for condition in raw.flags {
            set.insert(condition);
        }
        for name in &raw.custom {
            set.add_custom(name);
        }
        set
    }
}

impl ConditionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored condition names.
    ///
    /// Names matching the catalogue become flags; everything else is kept
    /// as a custom condition.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            set.add_custom(name.as_ref());
        }
        set
    }

    /// Flattens the set into stored condition names: checked catalogue
    /// labels in catalogue order, then custom conditions.
    pub fn to_names(&self) -> Vec<String> {
        self.flags
            .iter()
            .map(|c| c.label().to_string())
            .chain(self.custom.iter().cloned())
            .collect()
    }

    /// Adds a catalogue condition. Chainable.
    pub fn with(mut self, condition: Condition) -> Self {
        self.insert(condition);
        self
    }

    /// Adds a custom condition. Chainable.
    pub fn with_custom(mut self, name: impl AsRef<str>) -> Self {
        self.add_custom(name.as_ref());
        self
    }

    /// Marks a catalogue condition as present.
    pub fn insert(&mut self, condition: Condition) {
        self.flags.insert(condition);
    }

    /// Sets a catalogue condition's flag.
    pub fn set(&mut self, condition: Condition, present: bool) {
        if present {
            self.flags.insert(condition);
        } else {
            self.flags.remove(&condition);
        }
    }

    /// Returns `true` if the catalogue condition is flagged.
    pub fn contains(&self, condition: Condition) -> bool {
        self.flags.contains(&condition)
    }

    /// Flagged catalogue conditions, in catalogue order.
    pub fn flags(&self) -> impl Iterator<Item = Condition> + '_ {
        self.flags.iter().copied()
    }

    /// Custom conditions, in entry order.
    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    /// Adds a condition by name.
    ///
    /// Catalogue labels set the matching flag. Blank names and duplicates
    /// are ignored. Returns `true` if the set changed.
    pub fn add_custom(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if let Some(condition) = Condition::from_label(name) {
            return self.flags.insert(condition);
        }
        if self.custom.iter().any(|c| c == name) {
            return false;
        }
        self.custom.push(name.to_string());
        true
    }

    /// Replaces the custom conditions with the comma-separated entries in
    /// `text`. Catalogue flags already set are kept.
    pub fn replace_custom_text(&mut self, text: &str) {
        self.custom.clear();
        for entry in text.split(',') {
            self.add_custom(entry);
        }
    }

    /// Custom conditions joined for the free-text area.
    pub fn custom_text(&self) -> String {
        self.custom.join(", ")
    }

    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.custom.is_empty()
    }

    /// Number of recorded conditions, flags and custom combined.
    pub fn len(&self) -> usize {
        self.flags.len() + self.custom.len()
    }
}
