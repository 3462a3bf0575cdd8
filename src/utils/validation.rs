use regex::Regex;
use std::sync::LazyLock;
use validator::Validate;

/// Loose `local@domain.tld` shape; no attempt at RFC 5322.
/// - Valid: "a@b.com", "first.last@example.co.uk"
/// - Invalid: "abc", "a@b", "a @b.com"
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// `http://` or `https://` followed by a host-ish first character and no whitespace.
/// - Valid: "http://x.com", "https://dribbble.com/someone"
/// - Invalid: "ftp://x.com", "x.com", "http://.com", "http://x .com"
pub static PORTFOLIO_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s$.?#].[^\s]*$").unwrap());

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// A required text value counts as present as soon as it holds any character,
/// whitespace included.
pub fn is_missing(value: &str) -> bool {
    value.is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

pub fn is_valid_portfolio_url(value: &str) -> bool {
    PORTFOLIO_URL_REGEX.is_match(value)
}
