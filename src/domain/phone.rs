//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Candidate shape: optional `+`, a digit, at least 8 digits/separators, a digit.
pub const PHONE_CANDIDATE_PATTERN: &str = r"\+?\d[\d\s\-\(\)]{8,}\d";

/// Accepted length of a candidate once separators are stripped.
pub const MIN_PHONE_LEN: usize = 9;
pub const MAX_PHONE_LEN: usize = 15;

pub static PHONE_CANDIDATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PHONE_CANDIDATE_PATTERN).expect("Failed to compile phone candidate regex")
});

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-' || c == '(' || c == ')'
}

/// Remove whitespace, hyphens and parentheses. A leading `+` is kept.
pub fn strip_separators(candidate: &str) -> String {
    candidate.chars().filter(|&c| !is_separator(c)).collect()
}

/// Length filter applied to every phone candidate.
///
/// The stripped form must be between [`MIN_PHONE_LEN`] and [`MAX_PHONE_LEN`]
/// characters inclusive. The `+` prefix counts toward the length.
pub fn is_plausible_phone(candidate: &str) -> bool {
    let len = strip_separators(candidate).chars().count();
    (MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&len)
}

/// A type-safe wrapper for phone numbers found on a page.
///
/// The number keeps its original formatting (spaces, hyphens, parentheses);
/// only surrounding whitespace is trimmed.
///
/// # Example
///
/// ```
/// use dispatch::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.tel_uri(), "tel:+15551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Only digits, whitespace, hyphens, parentheses and a leading `+`
    /// - Between 9 and 15 characters once separators are stripped
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn is_valid(phone: &str) -> bool {
        let body = phone.strip_prefix('+').unwrap_or(phone);

        if !body.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        body.chars().all(|c| c.is_ascii_digit() || is_separator(c)) && is_plausible_phone(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// `tel:` target for the dialer, keeping an international `+` prefix.
    pub fn tel_uri(&self) -> String {
        let prefix = if self.0.starts_with('+') { "+" } else { "" };
        format!("tel:{}{}", prefix, self.digits_only())
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
