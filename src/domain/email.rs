//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Pattern for `local-part@domain.tld` shapes found in free text.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}";

/// Unanchored matcher used to scan page text.
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex"));

static EMAIL_EXACT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}$", EMAIL_PATTERN)).expect("Failed to compile anchored email regex")
});

/// A type-safe wrapper for email addresses.
///
/// Construction succeeds only when the whole string matches the same pattern
/// the extractor scans with, so every extracted email converts cleanly.
///
/// # Example
///
/// ```
/// use dispatch::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        EMAIL_EXACT_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("user@").is_err());
        assert!(EmailAddress::new("user@domain").is_err());
        assert!(EmailAddress::new("user@@example.com").is_err());
        assert!(EmailAddress::new("user@example.c").is_err());
        assert!(EmailAddress::new("user@example.c0m").is_err());
        assert!(EmailAddress::new(" user@example.com").is_err());
        assert!(EmailAddress::new("valid@example.com").is_ok());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
        assert!(EmailAddress::new("Info@Example.COM").is_ok());
    }

    #[test]
    fn test_email_regex_finds_embedded_addresses() {
        let found: Vec<&str> = EMAIL_REGEX
            .find_iter("write to <sales@acme.io>, or support@acme.io.")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["sales@acme.io", "support@acme.io"]);
    }

    #[test]
    fn test_email_display_is_verbatim() {
        let email = EmailAddress::new("Info@Example.com").unwrap();
        assert_eq!(format!("{}", email), "Info@Example.com");
    }
}
