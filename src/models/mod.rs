pub mod application;
pub mod field;
