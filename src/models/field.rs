use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every input on the application form, keyed by the `name` attribute the
/// rendered markup uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Select,
    Checkboxes,
    DateTime,
}

impl FieldKind {
    /// Value of the `type` attribute for kinds rendered as a plain `<input>`.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Number => Some("number"),
            FieldKind::DateTime => Some("datetime-local"),
            FieldKind::Select | FieldKind::Checkboxes => None,
        }
    }
}

impl FieldName {
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::FullName => "Full Name",
            FieldName::Email => "Email",
            FieldName::PhoneNumber => "Phone Number",
            FieldName::Position => "Applying for Position",
            FieldName::RelevantExperience => "Relevant Experience (years)",
            FieldName::PortfolioUrl => "Portfolio URL",
            FieldName::ManagementExperience => "Management Experience",
            FieldName::AdditionalSkills => "Additional Skills",
            FieldName::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Email => FieldKind::Email,
            FieldName::PhoneNumber | FieldName::RelevantExperience => FieldKind::Number,
            FieldName::Position => FieldKind::Select,
            FieldName::AdditionalSkills => FieldKind::Checkboxes,
            FieldName::PreferredInterviewTime => FieldKind::DateTime,
            FieldName::FullName | FieldName::PortfolioUrl | FieldName::ManagementExperience => {
                FieldKind::Text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_field_names_use_camel_case_keys() {
        assert_eq!(FieldName::RelevantExperience.to_string(), "relevantExperience");
        let key: &str = FieldName::PortfolioUrl.as_ref();
        assert_eq!(key, "portfolioUrl");
        assert_eq!(
            FieldName::from_str("preferredInterviewTime").unwrap(),
            FieldName::PreferredInterviewTime
        );
        assert!(FieldName::from_str("salary").is_err());
    }

    #[test]
    fn test_serde_keys_match_strum_keys() {
        for field in FieldName::iter() {
            let json = serde_json::to_value(field).unwrap();
            let key: &str = field.as_ref();
            assert_eq!(json.as_str().unwrap(), key);
        }
    }

    #[test]
    fn test_only_skills_render_as_checkboxes() {
        let checkbox_fields: Vec<_> = FieldName::iter()
            .filter(|f| f.kind() == FieldKind::Checkboxes)
            .collect();
        assert_eq!(checkbox_fields, vec![FieldName::AdditionalSkills]);
        assert_eq!(FieldName::PhoneNumber.kind().input_type(), Some("number"));
        assert_eq!(FieldName::Position.kind().input_type(), None);
    }
}
