use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::models::field::FieldName;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub fn requires_relevant_experience(&self) -> bool {
        matches!(self, Position::Developer | Position::Designer)
    }

    pub fn requires_portfolio(&self) -> bool {
        matches!(self, Position::Designer)
    }

    pub fn requires_management_experience(&self) -> bool {
        matches!(self, Position::Manager)
    }

    /// Parses the value of the position `<select>`; the empty option clears it.
    pub fn parse_option(raw: &str) -> Result<Option<Self>, strum::ParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

/// The fixed catalog behind the additional skills checkboxes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    #[strum(serialize = "CSS")]
    Css,
    Python,
}

impl Skill {
    pub fn catalog() -> Vec<Skill> {
        Skill::iter().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub position: Option<Position>,
    /// Raw text of the numeric input; parsed on demand.
    #[serde(default)]
    pub relevant_experience: String,
    #[serde(default)]
    pub portfolio_url: String,
    #[serde(default)]
    pub management_experience: String,
    #[serde(default)]
    pub additional_skills: Vec<Skill>,
    /// `YYYY-MM-DDTHH:MM`, as produced by a `datetime-local` picker.
    #[serde(default)]
    pub preferred_interview_time: String,
}

impl ApplicationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relevant_experience_years(&self) -> Option<f64> {
        let raw = self.relevant_experience.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<f64>().ok().filter(|years| years.is_finite())
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.additional_skills.contains(&skill)
    }

    /// Adds or removes a skill. Returns whether the set changed.
    pub fn toggle_skill(&mut self, skill: Skill, checked: bool) -> bool {
        if checked {
            if self.has_skill(skill) {
                return false;
            }
            self.additional_skills.push(skill);
            true
        } else {
            let before = self.additional_skills.len();
            self.additional_skills.retain(|s| *s != skill);
            before != self.additional_skills.len()
        }
    }

    /// Skills joined the way a list is stringified by default: comma separated,
    /// in the order they were checked.
    pub fn skills_display(&self) -> String {
        self.additional_skills
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Current value of a field as it would appear in its input.
    pub fn value_of(&self, field: FieldName) -> String {
        match field {
            FieldName::FullName => self.full_name.clone(),
            FieldName::Email => self.email.clone(),
            FieldName::PhoneNumber => self.phone_number.clone(),
            FieldName::Position => self
                .position
                .map(|p| p.to_string())
                .unwrap_or_default(),
            FieldName::RelevantExperience => self.relevant_experience.clone(),
            FieldName::PortfolioUrl => self.portfolio_url.clone(),
            FieldName::ManagementExperience => self.management_experience.clone(),
            FieldName::AdditionalSkills => self.skills_display(),
            FieldName::PreferredInterviewTime => self.preferred_interview_time.clone(),
        }
    }
}
