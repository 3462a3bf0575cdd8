use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::application::ApplicationRecord;
use crate::utils::time::split_interview_time;

/// A UI event forwarded by the host page.
///
/// ```json
/// {"type": "change", "name": "email", "value": "a@b.com"}
/// {"type": "toggle", "value": "CSS", "checked": true}
/// {"type": "submit"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    Change(FieldChange),
    Toggle(SkillToggle),
    Submit,
}

impl FormEvent {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FieldChange {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillToggle {
    #[validate(length(min = 1))]
    pub value: String,
    pub checked: bool,
}

/// Read-only snapshot shown once an application is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub name: String,
    pub email: String,
    pub position: String,
    pub experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: String,
    pub interview_date: String,
    pub interview_time: String,
}

impl From<&ApplicationRecord> for SubmissionSummary {
    fn from(record: &ApplicationRecord) -> Self {
        let (interview_date, interview_time) =
            split_interview_time(&record.preferred_interview_time);
        Self {
            name: record.full_name.clone(),
            email: record.email.clone(),
            position: record.position.map(|p| p.to_string()).unwrap_or_default(),
            experience: record.relevant_experience.clone(),
            portfolio_url: record.portfolio_url.clone(),
            management_experience: record.management_experience.clone(),
            additional_skills: record.skills_display(),
            interview_date,
            interview_time,
        }
    }
}
