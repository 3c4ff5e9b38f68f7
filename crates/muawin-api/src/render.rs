//! Server-side HTML rendering of the intake page.
//!
//! The page has three parts: the patient-ID lookup bar, the edit form
//! (only once a patient is loaded or started), and a sidebar that can
//! list every stored record.

use muawin_core::{Condition, Gender, Language, PatientForm, PatientRecord, MAX_AGE};
use std::fmt::{self, Write};

/// Banner shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Operation completed
    Success(String),
    /// Not a failure, but worth pointing out (e.g. new patient)
    Warning(String),
    /// Operation rejected
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "success",
            Notice::Warning(_) => "warning",
            Notice::Error(_) => "error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }
}

/// Values shown in the edit form, kept as entered.
///
/// Built from a stored record, or from a rejected submission so the
/// user's other edits survive the round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    /// Patient identifier
    pub id: String,
    /// Full name
    pub name: String,
    /// Age text
    pub age: String,
    /// Selected gender
    pub gender: String,
    /// Selected language
    pub language: String,
    /// Ticked catalogue conditions
    pub checked: Vec<Condition>,
    /// Custom conditions text
    pub custom_text: String,
}

impl From<&PatientRecord> for FormValues {
    fn from(record: &PatientRecord) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.name.clone(),
            age: record.age.to_string(),
            gender: record.gender.to_string(),
            language: record.language.to_string(),
            checked: record.conditions.flags().collect(),
            custom_text: record.conditions.custom_text(),
        }
    }
}

impl From<&PatientForm> for FormValues {
    fn from(form: &PatientForm) -> Self {
        Self {
            id: form.id.trim().to_string(),
            name: form.name.clone(),
            age: form.age.clone(),
            gender: form.gender.clone(),
            language: form.language.clone(),
            checked: form
                .conditions
                .iter()
                .filter_map(|key| Condition::from_key(key))
                .collect(),
            custom_text: form.custom_conditions.clone(),
        }
    }
}

/// Everything needed to render the page.
#[derive(Debug, Default)]
pub struct Page<'a> {
    /// Value of the lookup box
    pub lookup_id: &'a str,
    /// Optional banner
    pub notice: Option<Notice>,
    /// Values for the edit form; no form is shown without them
    pub form: Option<FormValues>,
    /// Whether the sidebar list is toggled on
    pub show_all: bool,
    /// Records for the sidebar list
    pub patients: &'a [PatientRecord],
}

/// Escapes text for HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the full HTML document.
pub fn render_page(page: &Page<'_>) -> String {
    let mut out = String::new();
    write_page(&mut out, page).ok();
    out
}

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
main{flex:1;padding:1.5rem}aside{width:22rem;padding:1.5rem;background:#f4f4f6}\
.notice{padding:.6rem;border-radius:4px;margin:.8rem 0}\
.success{background:#dff5e1}.warning{background:#fff4d6}.error{background:#fde0e0}\
.cols{display:grid;grid-template-columns:repeat(3,1fr);gap:.3rem}\
label{display:block;margin:.3rem 0}table{border-collapse:collapse;width:100%}\
td,th{border-bottom:1px solid #ccc;padding:.2rem;text-align:left;font-size:.85rem}";

fn write_page(out: &mut String, page: &Page<'_>) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\"><head><meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Muawin - Patient Information</title>")?;
    writeln!(out, "<style>{STYLE}</style></head><body>")?;

    writeln!(out, "<main><h1>Patient Information</h1>")?;
    write_lookup(out, page)?;
    if let Some(notice) = &page.notice {
        writeln!(
            out,
            "<div class=\"notice {}\">{}</div>",
            notice.class(),
            escape(notice.message())
        )?;
    }
    if let Some(form) = &page.form {
        write_form(out, form, page.show_all)?;
    }
    writeln!(out, "</main>")?;

    write_sidebar(out, page)?;
    writeln!(out, "</body></html>")
}

fn write_lookup(out: &mut String, page: &Page<'_>) -> fmt::Result {
    writeln!(out, "<form method=\"get\" action=\"/\" class=\"lookup\">")?;
    writeln!(
        out,
        "<label>Enter Patient ID (e.g., P001): <input type=\"text\" name=\"id\" value=\"{}\"></label>",
        escape(page.lookup_id)
    )?;
    if page.show_all {
        writeln!(out, "<input type=\"hidden\" name=\"show_all\" value=\"true\">")?;
    }
    writeln!(out, "<button type=\"submit\">Load Patient Data</button></form>")
}

fn write_form(out: &mut String, form: &FormValues, show_all: bool) -> fmt::Result {
    writeln!(out, "<form method=\"post\" action=\"/patients\" class=\"patient\">")?;
    writeln!(out, "<h2>Patient Information</h2>")?;
    writeln!(
        out,
        "<input type=\"hidden\" name=\"id\" value=\"{}\">",
        escape(&form.id)
    )?;
    if show_all {
        writeln!(out, "<input type=\"hidden\" name=\"show_all\" value=\"true\">")?;
    }
    writeln!(
        out,
        "<label>Full Name <input type=\"text\" name=\"name\" value=\"{}\"></label>",
        escape(&form.name)
    )?;
    writeln!(
        out,
        "<label>Age <input type=\"number\" name=\"age\" min=\"0\" max=\"{MAX_AGE}\" value=\"{}\"></label>",
        escape(&form.age)
    )?;

    writeln!(out, "<label>Gender <select name=\"gender\">")?;
    for gender in Gender::ALL {
        write_option(out, gender.as_str(), gender.as_str() == form.gender)?;
    }
    writeln!(out, "</select></label>")?;

    writeln!(out, "<label>Preferred Language <select name=\"language\">")?;
    for language in Language::ALL {
        write_option(out, language.as_str(), language.as_str() == form.language)?;
    }
    writeln!(out, "</select></label>")?;

    writeln!(out, "<h2>Pre-existing Conditions</h2><div class=\"cols\">")?;
    for condition in Condition::ALL {
        let checked = if form.checked.contains(&condition) {
            " checked"
        } else {
            ""
        };
        writeln!(
            out,
            "<label><input type=\"checkbox\" name=\"condition\" value=\"{}\"{checked}> {}</label>",
            condition.key(),
            condition.label()
        )?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "<p>Add custom conditions (if not listed above):</p>")?;
    writeln!(
        out,
        "<label>Enter conditions separated by commas<br>\
         <textarea name=\"custom_conditions\" rows=\"4\" cols=\"60\">{}</textarea></label>",
        escape(&form.custom_text)
    )?;
    writeln!(
        out,
        "<button type=\"submit\">Save Patient Information</button></form>"
    )
}

fn write_option(out: &mut String, value: &str, selected: bool) -> fmt::Result {
    let selected = if selected { " selected" } else { "" };
    writeln!(out, "<option value=\"{value}\"{selected}>{value}</option>")
}

fn write_sidebar(out: &mut String, page: &Page<'_>) -> fmt::Result {
    writeln!(out, "<aside><form method=\"get\" action=\"/\">")?;
    if !page.lookup_id.is_empty() {
        writeln!(
            out,
            "<input type=\"hidden\" name=\"id\" value=\"{}\">",
            escape(page.lookup_id)
        )?;
    }
    let checked = if page.show_all { " checked" } else { "" };
    writeln!(
        out,
        "<label><input type=\"checkbox\" name=\"show_all\" value=\"true\"{checked}> View All Patients</label>"
    )?;
    writeln!(out, "<button type=\"submit\">Refresh</button></form>")?;

    if page.show_all {
        writeln!(out, "<h3>Patient List</h3>")?;
        writeln!(
            out,
            "<table><tr><th>id</th><th>name</th><th>age</th><th>gender</th><th>language</th></tr>"
        )?;
        for patient in page.patients {
            writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(patient.id.as_str()),
                escape(&patient.name),
                patient.age,
                patient.gender,
                patient.language
            )?;
        }
        writeln!(out, "</table>")?;
    }
    writeln!(out, "</aside>")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use muawin_core::{ConditionSet, PatientId};

    fn jane() -> PatientRecord {
        PatientRecord::new(PatientId::new("P001").unwrap())
            .with_name("Jane <Doe>")
            .with_age(34)
            .with_gender(Gender::Female)
            .with_conditions(
                ConditionSet::new()
                    .with(Condition::Asthma)
                    .with_custom("Migraine")
                    .with_custom("Gout"),
            )
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_only_lookup() {
        let html = render_page(&Page::default());
        assert!(html.contains("Load Patient Data"));
        assert!(!html.contains("Save Patient Information"));
        assert!(!html.contains("Patient List"));
    }

    #[test]
    fn test_form_prefilled_from_record() {
        let html = render_page(&Page {
            lookup_id: "P001",
            form: Some(FormValues::from(&jane())),
            ..Default::default()
        });
        assert!(html.contains("value=\"Jane &lt;Doe&gt;\""));
        assert!(html.contains("value=\"34\""));
        assert!(html.contains("<option value=\"Female\" selected>"));
        assert!(html.contains("value=\"asthma\" checked"));
        assert!(!html.contains("value=\"diabetes\" checked"));
        assert!(html.contains(">Migraine, Gout</textarea>"));
    }

    #[test]
    fn test_form_from_rejected_submission_keeps_entries() {
        let form = PatientForm::from_pairs([
            ("id", " P001 "),
            ("name", "Jane <Doe>"),
            ("age", "150"),
            ("gender", "Female"),
            ("language", "Punjabi"),
            ("condition", "copd"),
            ("condition", "lycanthropy"),
            ("custom_conditions", "Gout"),
        ]);
        let values = FormValues::from(&form);
        assert_eq!(values.id, "P001");
        assert_eq!(values.checked, [Condition::Copd]);

        let html = render_page(&Page {
            form: Some(values),
            ..Default::default()
        });
        assert!(html.contains("value=\"Jane &lt;Doe&gt;\""));
        assert!(html.contains("value=\"150\""));
        assert!(html.contains("<option value=\"Punjabi\" selected>"));
        assert!(html.contains("value=\"copd\" checked"));
        assert!(html.contains(">Gout</textarea>"));
    }

    #[test]
    fn test_form_carries_sidebar_toggle() {
        let html = render_page(&Page {
            form: Some(FormValues::from(&jane())),
            show_all: true,
            ..Default::default()
        });
        let form_start = html.find("action=\"/patients\"").unwrap();
        let form_end = html[form_start..].find("</form>").unwrap() + form_start;
        assert!(html[form_start..form_end].contains("name=\"show_all\" value=\"true\""));
    }

    #[test]
    fn test_notice_rendered() {
        let html = render_page(&Page {
            notice: Some(Notice::Warning("Patient with ID P9 not found.".into())),
            ..Default::default()
        });
        assert!(html.contains("class=\"notice warning\""));
        assert!(html.contains("Patient with ID P9 not found."));
    }

    #[test]
    fn test_sidebar_list() {
        let patients = vec![jane()];
        let html = render_page(&Page {
            show_all: true,
            patients: &patients,
            ..Default::default()
        });
        assert!(html.contains("Patient List"));
        assert!(html.contains("<td>P001</td><td>Jane &lt;Doe&gt;</td><td>34</td><td>Female</td><td>English</td>"));
    }
}
