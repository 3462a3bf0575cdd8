use std::str::FromStr;

use crate::config::{get_config, Config};
use crate::dto::form_dto::{FieldChange, FormEvent, SkillToggle};
use crate::error::{Error, Result};
use crate::models::application::{ApplicationRecord, Position, Skill};
use crate::models::field::FieldName;
use crate::services::validation_service::{validate, ErrorMap};
use crate::utils::validation;
use crate::views::renderer::{render, FormPhase, View};
use crate::views::visibility::is_visible;

/// Owns the application record for one page load and drives the
/// `Editing -> Submitted` transition. Every operation returns the re-rendered view.
#[derive(Debug, Clone)]
pub struct FormService {
    record: ApplicationRecord,
    errors: ErrorMap,
    phase: FormPhase,
    title: String,
}

/// Uses the process-wide configuration from [`get_config`].
impl Default for FormService {
    fn default() -> Self {
        Self::new(get_config())
    }
}

impl FormService {
    pub fn new(config: &Config) -> Self {
        Self {
            record: ApplicationRecord::new(),
            errors: ErrorMap::new(),
            phase: FormPhase::Editing,
            title: config.form_title.clone(),
        }
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    /// Errors from the most recent rejected submit.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn view(&self) -> View {
        render(&self.record, &self.errors, self.phase, &self.title)
    }

    /// Replaces a field's value by its wire key. Skills go through [`Self::toggle_skill`].
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<View> {
        let field =
            FieldName::from_str(name).map_err(|_| Error::UnknownField(name.to_string()))?;
        self.set(field, value)
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) -> Result<View> {
        self.ensure_editing()?;
        let value = value.into();

        match field {
            FieldName::FullName => self.record.full_name = value,
            FieldName::Email => self.record.email = value,
            FieldName::PhoneNumber => self.record.phone_number = value,
            FieldName::Position => {
                self.record.position = Position::parse_option(&value)
                    .map_err(|_| Error::InvalidPosition(value.clone()))?;
            }
            FieldName::RelevantExperience => self.record.relevant_experience = value,
            FieldName::PortfolioUrl => self.record.portfolio_url = value,
            FieldName::ManagementExperience => self.record.management_experience = value,
            FieldName::PreferredInterviewTime => self.record.preferred_interview_time = value,
            FieldName::AdditionalSkills => {
                return Err(Error::UnsupportedUpdate(field.to_string()));
            }
        }

        tracing::debug!(
            field = %field,
            visible = is_visible(field, self.record.position),
            "Form field updated"
        );
        Ok(self.view())
    }

    /// Checks or unchecks one skill of the catalog.
    pub fn toggle_skill(&mut self, skill: &str, checked: bool) -> Result<View> {
        self.ensure_editing()?;
        let parsed =
            Skill::from_str(skill).map_err(|_| Error::UnknownSkill(skill.to_string()))?;
        let changed = self.record.toggle_skill(parsed, checked);
        tracing::debug!(skill = %parsed, checked, changed, "Skill toggled");
        Ok(self.view())
    }

    /// Validates the record; only an empty error map moves the form to `Submitted`.
    /// Once submitted, further submits just return the summary again.
    pub fn submit(&mut self) -> Result<View> {
        if self.is_submitted() {
            return Ok(self.view());
        }

        self.errors = validate(&self.record);
        if self.errors.is_empty() {
            self.phase = FormPhase::Submitted;
            tracing::info!(
                position = %self.record.value_of(FieldName::Position),
                skills = %self.record.skills_display(),
                "Application submitted"
            );
        } else {
            let fields: Vec<FieldName> = self.errors.keys().copied().collect();
            tracing::debug!(
                error_count = fields.len(),
                fields = ?fields,
                "Application rejected by validation"
            );
        }
        Ok(self.view())
    }

    pub fn apply(&mut self, event: FormEvent) -> Result<View> {
        let result = match event {
            FormEvent::Change(change) => self.apply_change(change),
            FormEvent::Toggle(toggle) => self.apply_toggle(toggle),
            FormEvent::Submit => self.submit(),
        };
        if let Err(e) = &result {
            tracing::debug!(bad_input = e.is_bad_input(), "Form event refused: {}", e);
        }
        result
    }

    /// Parses a JSON event payload from the host page and applies it.
    pub fn apply_json(&mut self, raw: &str) -> Result<View> {
        let event = FormEvent::from_json(raw)?;
        self.apply(event)
    }

    fn apply_change(&mut self, change: FieldChange) -> Result<View> {
        validation::validate(&change)?;
        self.set_field(&change.name, change.value)
    }

    fn apply_toggle(&mut self, toggle: SkillToggle) -> Result<View> {
        validation::validate(&toggle)?;
        self.toggle_skill(&toggle.value, toggle.checked)
    }

    fn ensure_editing(&self) -> Result<()> {
        if self.is_submitted() {
            return Err(Error::AlreadySubmitted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_developer(form: &mut FormService) {
        form.set_field("fullName", "Grace Hopper").unwrap();
        form.set_field("email", "grace@example.com").unwrap();
        form.set_field("phoneNumber", "5551234").unwrap();
        form.set_field("position", "Developer").unwrap();
        form.set_field("relevantExperience", "3").unwrap();
        form.toggle_skill("JavaScript", true).unwrap();
        form.set_field("preferredInterviewTime", "2024-05-01T14:30").unwrap();
    }

    #[test]
    fn test_starts_editing_with_empty_record() {
        let form = FormService::default();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.record(), &ApplicationRecord::new());
        assert!(form.errors().is_empty());
        assert!(!form.view().is_summary());
    }

    #[test]
    fn test_set_field_last_write_wins() {
        let mut form = FormService::default();
        form.set_field("fullName", "Grace").unwrap();
        let view = form.set_field("fullName", "Grace Hopper").unwrap();
        assert_eq!(form.record().full_name, "Grace Hopper");
        let rendered = view.form().unwrap().field(FieldName::FullName).unwrap();
        assert_eq!(rendered.value, "Grace Hopper");
    }

    #[test]
    fn test_unknown_inputs_are_errors() {
        let mut form = FormService::default();
        assert!(matches!(
            form.set_field("salary", "100"),
            Err(Error::UnknownField(_))
        ));
        assert!(matches!(
            form.set_field("position", "Intern"),
            Err(Error::InvalidPosition(_))
        ));
        assert!(matches!(
            form.set_field("additionalSkills", "CSS"),
            Err(Error::UnsupportedUpdate(_))
        ));
        assert!(matches!(
            form.toggle_skill("Rust", true),
            Err(Error::UnknownSkill(_))
        ));
        assert_eq!(form.record(), &ApplicationRecord::new());
    }

    #[test]
    fn test_invalid_submit_stays_editing_and_shows_errors() {
        let mut form = FormService::default();
        form.set_field("email", "abc").unwrap();
        let view = form.submit().unwrap();

        assert_eq!(form.phase(), FormPhase::Editing);
        let email = view.form().unwrap().field(FieldName::Email).unwrap();
        assert_eq!(email.error.as_deref(), Some("Email is invalid"));
        assert!(form.errors().contains_key(&FieldName::FullName));
    }

    #[test]
    fn test_errors_stay_until_next_submit() {
        let mut form = FormService::default();
        form.submit().unwrap();
        assert!(form.errors().contains_key(&FieldName::FullName));

        form.set_field("fullName", "Grace").unwrap();
        assert!(form.errors().contains_key(&FieldName::FullName));

        form.submit().unwrap();
        assert!(!form.errors().contains_key(&FieldName::FullName));
    }

    #[test]
    fn test_valid_submit_moves_to_submitted() {
        let mut form = FormService::default();
        fill_developer(&mut form);
        let view = form.submit().unwrap();

        assert!(form.is_submitted());
        let summary = view.summary().expect("summary view");
        assert_eq!(summary.interview_date, "2024-05-01");
        assert_eq!(summary.interview_time, "14:30");
        assert_eq!(summary.additional_skills, "JavaScript");
    }

    #[test]
    fn test_submitted_record_is_read_only() {
        let mut form = FormService::default();
        fill_developer(&mut form);
        form.submit().unwrap();

        assert!(matches!(
            form.set_field("fullName", "Someone Else"),
            Err(Error::AlreadySubmitted)
        ));
        assert!(matches!(
            form.toggle_skill("CSS", true),
            Err(Error::AlreadySubmitted)
        ));
        assert_eq!(form.record().full_name, "Grace Hopper");

        let again = form.submit().unwrap();
        assert!(again.is_summary());
    }

    #[test]
    fn test_position_change_keeps_hidden_values() {
        let mut form = FormService::default();
        form.set_field("position", "Manager").unwrap();
        form.set_field("managementExperience", "Ran a team of 5").unwrap();

        let view = form.set_field("position", "Designer").unwrap();
        assert!(view
            .form()
            .unwrap()
            .field(FieldName::ManagementExperience)
            .is_none());
        assert_eq!(form.record().management_experience, "Ran a team of 5");

        let view = form.set_field("position", "Manager").unwrap();
        let field = view
            .form()
            .unwrap()
            .field(FieldName::ManagementExperience)
            .cloned()
            .unwrap();
        assert_eq!(field.value, "Ran a team of 5");
    }

    #[test]
    fn test_clearing_position_with_empty_option() {
        let mut form = FormService::default();
        form.set_field("position", "Designer").unwrap();
        form.set_field("position", "").unwrap();
        assert_eq!(form.record().position, None);
    }

    #[test]
    fn test_apply_json_events() {
        let mut form = FormService::default();
        form.apply_json(r#"{"type":"change","name":"fullName","value":"Ada"}"#)
            .unwrap();
        form.apply_json(r#"{"type":"toggle","value":"Python","checked":true}"#)
            .unwrap();
        assert_eq!(form.record().full_name, "Ada");
        assert_eq!(form.record().additional_skills, vec![Skill::Python]);

        let err = form
            .apply_json(r#"{"type":"change","name":"","value":"x"}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.is_bad_input());

        let view = form.apply_json(r#"{"type":"submit"}"#).unwrap();
        assert!(!view.is_summary());
    }
}
