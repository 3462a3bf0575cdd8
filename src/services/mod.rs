pub mod form_service;
pub mod validation_service;
