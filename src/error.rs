pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Field {0} cannot be set directly")]
    UnsupportedUpdate(String),

    #[error("Application has already been submitted")]
    AlreadySubmitted,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load template {0}")]
    TemplateLoad(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl Error {
    /// Errors caused by the host sending something the form does not understand,
    /// as opposed to failures inside the component itself.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            Error::UnknownField(_)
                | Error::UnknownSkill(_)
                | Error::InvalidPosition(_)
                | Error::UnsupportedUpdate(_)
                | Error::Validation(_)
                | Error::Json(_)
        )
    }
}
