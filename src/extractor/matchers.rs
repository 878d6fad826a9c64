//! Pattern matchers for emails, phone numbers and social/messaging links.
//!
//! Every matcher is a pure function over strings: empty or malformed input
//! simply yields an empty set.

use crate::domain::email::EMAIL_REGEX;
use crate::domain::phone::{is_plausible_phone, PHONE_CANDIDATE_REGEX};
use crate::domain::ContactKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::Range;

/// Domains that mark an outbound link as a social or messaging contact.
pub const SOCIAL_DOMAINS: [&str; 7] = [
    "instagram.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "linkedin.com",
    "wa.me",
    "whatsapp.com",
];

/// Messaging domains; these win over the generic social classification.
pub const WHATSAPP_DOMAINS: [&str; 2] = ["wa.me", "whatsapp.com"];

static URL_TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://\S+").expect("Failed to compile URL token regex"));

/// Collect every email-shaped substring of `text`, exactly as written.
pub fn find_emails(text: &str) -> BTreeSet<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Collect phone-number candidates that pass the length filter.
///
/// Accepted candidates keep their separators and are trimmed of surrounding
/// whitespace. Candidates starting inside a URL token of the text are
/// skipped: digits in a link path belong to the link, not to a phone.
pub fn find_phones(text: &str) -> BTreeSet<String> {
    let url_spans: Vec<Range<usize>> = URL_TOKEN_REGEX
        .find_iter(text)
        .map(|m| m.range())
        .collect();

    PHONE_CANDIDATE_REGEX
        .find_iter(text)
        .filter(|m| !url_spans.iter().any(|span| span.contains(&m.start())))
        .map(|m| m.as_str())
        .filter(|candidate| is_plausible_phone(candidate))
        .map(|candidate| candidate.trim().to_string())
        .collect()
}

/// Classify an outbound link as WhatsApp, Social, or neither.
///
/// Matching is a case-insensitive substring test against [`SOCIAL_DOMAINS`].
pub fn classify_link(link: &str) -> Option<ContactKind> {
    let lowered = link.to_lowercase();

    if !SOCIAL_DOMAINS.iter().any(|domain| lowered.contains(domain)) {
        return None;
    }

    if WHATSAPP_DOMAINS.iter().any(|domain| lowered.contains(domain)) {
        Some(ContactKind::WhatsApp)
    } else {
        Some(ContactKind::Social)
    }
}
