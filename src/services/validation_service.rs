use std::collections::BTreeMap;

use crate::models::application::ApplicationRecord;
use crate::models::field::FieldName;
use crate::utils::validation::{is_missing, is_valid_email, is_valid_portfolio_url};

/// Field name to the message shown under that field.
pub type ErrorMap = BTreeMap<FieldName, String>;

/// Checks a record against every rule that applies to its current position.
///
/// Pure: conditional fields are required only while the position that shows
/// them is selected, so a stale value left behind by a position change is
/// neither required nor reported.
pub fn validate(record: &ApplicationRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if is_missing(&record.full_name) {
        errors.insert(FieldName::FullName, "Full Name is required".to_string());
    }

    if is_missing(&record.email) {
        errors.insert(FieldName::Email, "Email is required".to_string());
    } else if !is_valid_email(&record.email) {
        errors.insert(FieldName::Email, "Email is invalid".to_string());
    }

    if is_missing(&record.phone_number) {
        errors.insert(FieldName::PhoneNumber, "Phone Number is required".to_string());
    }

    match record.position {
        None => {
            errors.insert(FieldName::Position, "Position is required".to_string());
        }
        Some(position) => {
            if position.requires_relevant_experience()
                && !record.relevant_experience_years().is_some_and(|y| y > 0.0)
            {
                errors.insert(
                    FieldName::RelevantExperience,
                    "Relevant Experience is required and must be greater than 0".to_string(),
                );
            }

            if position.requires_portfolio() {
                if is_missing(&record.portfolio_url) {
                    errors.insert(FieldName::PortfolioUrl, "Portfolio URL is required".to_string());
                } else if !is_valid_portfolio_url(&record.portfolio_url) {
                    errors.insert(FieldName::PortfolioUrl, "Portfolio URL is invalid".to_string());
                }
            }

            if position.requires_management_experience()
                && is_missing(&record.management_experience)
            {
                errors.insert(
                    FieldName::ManagementExperience,
                    "Management Experience is required".to_string(),
                );
            }
        }
    }

    if record.additional_skills.is_empty() {
        errors.insert(
            FieldName::AdditionalSkills,
            "At least one skill must be selected".to_string(),
        );
    }

    if is_missing(&record.preferred_interview_time) {
        errors.insert(
            FieldName::PreferredInterviewTime,
            "Preferred Interview Time is required".to_string(),
        );
    }

    errors
}
