use crate::models::application::Position;
use crate::models::field::FieldName;

pub type VisibilityRule = fn(Option<Position>) -> bool;

fn always(_: Option<Position>) -> bool {
    true
}

fn needs_relevant_experience(position: Option<Position>) -> bool {
    position.is_some_and(|p| p.requires_relevant_experience())
}

fn needs_portfolio(position: Option<Position>) -> bool {
    position.is_some_and(|p| p.requires_portfolio())
}

fn needs_management_experience(position: Option<Position>) -> bool {
    position.is_some_and(|p| p.requires_management_experience())
}

/// Form fields in display order, each with the rule deciding whether it is shown.
pub const FIELD_VISIBILITY: [(FieldName, VisibilityRule); 9] = [
    (FieldName::FullName, always),
    (FieldName::Email, always),
    (FieldName::PhoneNumber, always),
    (FieldName::Position, always),
    (FieldName::RelevantExperience, needs_relevant_experience),
    (FieldName::PortfolioUrl, needs_portfolio),
    (FieldName::ManagementExperience, needs_management_experience),
    (FieldName::AdditionalSkills, always),
    (FieldName::PreferredInterviewTime, always),
];

pub fn is_visible(field: FieldName, position: Option<Position>) -> bool {
    FIELD_VISIBILITY
        .iter()
        .find(|(name, _)| *name == field)
        .is_some_and(|(_, rule)| rule(position))
}

pub fn visible_fields(position: Option<Position>) -> Vec<FieldName> {
    FIELD_VISIBILITY
        .iter()
        .filter(|(_, rule)| rule(position))
        .map(|(name, _)| *name)
        .collect()
}
