//! Turns form state into something a host can paint.
//!
//! [`render`] produces a serializable [`View`]; [`View::to_html`] runs it through
//! the embedded templates. Templates are named `*.html` so minijinja escapes
//! every interpolated value.

use minijinja::{context, Environment};
use serde::Serialize;
use std::sync::OnceLock;
use strum::IntoEnumIterator;

use crate::dto::form_dto::SubmissionSummary;
use crate::error::{Error, Result};
use crate::models::application::{ApplicationRecord, Position, Skill};
use crate::models::field::{FieldKind, FieldName};
use crate::services::validation_service::ErrorMap;
use crate::views::visibility::visible_fields;

static TEMPLATE_ENV: OnceLock<std::result::Result<Environment<'static>, String>> =
    OnceLock::new();

const TEMPLATES: [(&str, &str); 2] = [
    ("form.html", include_str!("../../templates/form.html")),
    ("summary.html", include_str!("../../templates/summary.html")),
];

fn init_environment() -> std::result::Result<Environment<'static>, String> {
    let mut env = Environment::new();
    for (name, source) in TEMPLATES {
        env.add_template(name, source)
            .map_err(|e| format!("{}: {}", name, e))?;
    }
    Ok(env)
}

fn get_environment() -> Result<&'static Environment<'static>> {
    TEMPLATE_ENV
        .get_or_init(init_environment)
        .as_ref()
        .map_err(|msg| Error::TemplateLoad(msg.clone()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum View {
    Form(FormView),
    Summary(SummaryView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldView {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: FieldKind,
    pub input_type: Option<&'static str>,
    pub value: String,
    pub options: Vec<OptionView>,
    pub error: Option<String>,
}

/// An entry of the position `<select>` or one skill checkbox.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub title: String,
    pub summary: SubmissionSummary,
}

impl View {
    pub fn is_summary(&self) -> bool {
        matches!(self, View::Summary(_))
    }

    pub fn form(&self) -> Option<&FormView> {
        match self {
            View::Form(form) => Some(form),
            View::Summary(_) => None,
        }
    }

    pub fn summary(&self) -> Option<&SubmissionSummary> {
        match self {
            View::Summary(view) => Some(&view.summary),
            View::Form(_) => None,
        }
    }

    pub fn to_html(&self) -> Result<String> {
        let env = get_environment()?;
        let html = match self {
            View::Form(form) => env
                .get_template("form.html")?
                .render(context! { form => form })?,
            View::Summary(view) => env
                .get_template("summary.html")?
                .render(context! { title => view.title, summary => view.summary })?,
        };
        Ok(html)
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl FormView {
    pub fn field(&self, name: FieldName) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn visible_names(&self) -> Vec<FieldName> {
        self.fields.iter().map(|f| f.name).collect()
    }
}

/// Renders the current state. Hidden fields are left out entirely, so their
/// errors never surface even if `errors` still carries them.
pub fn render(
    record: &ApplicationRecord,
    errors: &ErrorMap,
    phase: FormPhase,
    title: &str,
) -> View {
    match phase {
        FormPhase::Submitted => View::Summary(SummaryView {
            title: title.to_string(),
            summary: SubmissionSummary::from(record),
        }),
        FormPhase::Editing => {
            let fields = visible_fields(record.position)
                .into_iter()
                .map(|name| field_view(name, record, errors))
                .collect();
            View::Form(FormView {
                title: title.to_string(),
                fields,
            })
        }
    }
}

fn field_view(name: FieldName, record: &ApplicationRecord, errors: &ErrorMap) -> FieldView {
    let kind = name.kind();
    FieldView {
        name,
        label: name.label(),
        kind,
        input_type: kind.input_type(),
        value: record.value_of(name),
        options: options_for(name, record),
        error: errors.get(&name).cloned(),
    }
}

fn options_for(name: FieldName, record: &ApplicationRecord) -> Vec<OptionView> {
    match name {
        FieldName::Position => {
            let placeholder = OptionView {
                value: String::new(),
                label: "Select Position".to_string(),
                selected: record.position.is_none(),
            };
            std::iter::once(placeholder)
                .chain(Position::iter().map(|p| OptionView {
                    value: p.to_string(),
                    label: p.to_string(),
                    selected: record.position == Some(p),
                }))
                .collect()
        }
        FieldName::AdditionalSkills => Skill::catalog()
            .into_iter()
            .map(|s| OptionView {
                value: s.to_string(),
                label: s.to_string(),
                selected: record.has_skill(s),
            })
            .collect(),
        _ => Vec::new(),
    }
}
