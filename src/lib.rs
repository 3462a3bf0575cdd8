pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;
pub mod views;

pub use crate::dto::form_dto::{FormEvent, SubmissionSummary};
pub use crate::error::{Error, Result};
pub use crate::models::application::{ApplicationRecord, Position, Skill};
pub use crate::models::field::FieldName;
pub use crate::services::form_service::FormService;
pub use crate::services::validation_service::{validate, ErrorMap};
pub use crate::views::renderer::{FormPhase, View};
