use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use strum::{Display, EnumString};

pub const DEFAULT_FORM_TITLE: &str = "Job Application Form";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub form_title: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Default for Config {
    fn default() -> Self {
        Self {
            form_title: DEFAULT_FORM_TITLE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Every key is optional; unset keys keep their defaults.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            form_title: get_env_or("FORM_TITLE", DEFAULT_FORM_TITLE),
            log_level: get_env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: get_env_parse_or("LOG_FORMAT", LogFormat::default())?,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        _ => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

/// The loaded configuration, or the defaults when `init_config` was never called.
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_env_overrides_and_defaults() {
        env::set_var("FORM_TITLE", "Careers at Acme");
        env::set_var("LOG_FORMAT", "json");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.form_title, "Careers at Acme");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        env::set_var("LOG_FORMAT", "yaml");
        assert!(matches!(Config::from_env(), Err(Error::Config(_))));

        env::remove_var("FORM_TITLE");
        env::remove_var("LOG_FORMAT");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.form_title, DEFAULT_FORM_TITLE);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
