//! Contact kinds and the enabled-kinds set.

use super::errors::ValidationError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Classification of a contact identifier.
///
/// Variant order is the display order: the derived `Ord` sorts
/// Email, WhatsApp, Phone, Social.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactKind {
    Email,
    WhatsApp,
    Phone,
    Social,
}

impl ContactKind {
    /// Fixed order in which kinds are listed to the operator.
    pub const DISPLAY_ORDER: [ContactKind; 4] = [
        ContactKind::Email,
        ContactKind::WhatsApp,
        ContactKind::Phone,
        ContactKind::Social,
    ];

    /// Human-readable label used in the contact table.
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Email => "Email",
            ContactKind::WhatsApp => "WhatsApp",
            ContactKind::Phone => "Phone",
            ContactKind::Social => "Social",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "emails" => Ok(ContactKind::Email),
            "whatsapp" => Ok(ContactKind::WhatsApp),
            "phone" | "phones" => Ok(ContactKind::Phone),
            "social" | "socials" => Ok(ContactKind::Social),
            _ => Err(ValidationError::UnknownKind(s.trim().to_string())),
        }
    }
}

/// The set of kinds an extractor is allowed to produce.
///
/// The broad harvester enables every kind; the email-only harvester is the
/// same extractor configured with `KindSet::only([ContactKind::Email])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSet(BTreeSet<ContactKind>);

impl KindSet {
    /// Every kind enabled.
    pub fn all() -> Self {
        Self(ContactKind::DISPLAY_ORDER.into_iter().collect())
    }

    /// Only the given kinds enabled.
    pub fn only(kinds: impl IntoIterator<Item = ContactKind>) -> Self {
        Self(kinds.into_iter().collect())
    }

    pub fn contains(&self, kind: ContactKind) -> bool {
        self.0.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ContactKind> + '_ {
        self.0.iter().copied()
    }
}

impl Default for KindSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for KindSet {
    type Err = ValidationError;

    /// Parse a comma-separated list such as `"email, phone"`. `"all"` enables everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }

        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(ContactKind::from_str)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }
}
