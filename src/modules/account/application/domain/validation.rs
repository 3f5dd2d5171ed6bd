//! Field rules for a user record.
//!
//! Every validator takes the value and the name of the field it came from
//! and returns a [`FieldError`] naming that field on failure. They are pure,
//! so the service layer and the store adapters share the same rule table.

use email_address::{EmailAddress, Options};
use regex::Regex;
use std::sync::LazyLock;

pub const FULL_NAME_RULE: &str =
    "Full Name must be at least 4 characters and only contain alphabetic characters";
pub const EMAIL_RULE: &str = "Invalid email format";
pub const PASSWORD_RULE: &str =
    "Password must contain both letters and numbers and be at least 8 characters long";
pub const PHONE_NUMBER_RULE: &str = "Phone number must be 11 digits";

pub const PASSWORD_MIN_LENGTH: usize = 8;

static FULL_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{4,}$").expect("valid full name pattern"));

// ASCII digits only: `\d` would also accept other Unicode digits.
static PHONE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{11}$").expect("valid phone number pattern"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub type ValidationResult = Result<(), FieldError>;

/// Absent and empty are the same thing on the wire.
pub fn require_field(value: &str, field: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(FieldError::new(field, &format!("{field} is required")));
    }
    Ok(())
}

pub fn validate_full_name(value: &str, field: &str) -> ValidationResult {
    if FULL_NAME_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::new(field, FULL_NAME_RULE))
    }
}

pub fn validate_email(value: &str, field: &str) -> ValidationResult {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal();
    let valid = EmailAddress::parse_with_options(value, options)
        .map(|address| is_host_domain(address.domain()))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(FieldError::new(field, EMAIL_RULE))
    }
}

pub fn validate_password(value: &str, field: &str) -> ValidationResult {
    let long_enough = value.chars().count() >= PASSWORD_MIN_LENGTH;
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_letter && has_digit {
        Ok(())
    } else {
        Err(FieldError::new(field, PASSWORD_RULE))
    }
}

pub fn validate_phone_number(value: &str, field: &str) -> ValidationResult {
    if PHONE_NUMBER_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::new(field, PHONE_NUMBER_RULE))
    }
}

/// A dotted host name ending in an alphabetic or punycode top-level domain.
/// `user@localhost` parses as an address but is not accepted for accounts.
fn is_host_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty() || l.contains('_')) {
        return false;
    }

    let tld = labels[labels.len() - 1];
    let alphabetic = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    let punycode = tld.len() > 4
        && tld.get(..4).is_some_and(|prefix| prefix.eq_ignore_ascii_case("xn--"))
        && tld.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    alphabetic || punycode
}
