//! Harvested contacts and the per-run result set.

use super::kind::ContactKind;
use std::collections::BTreeSet;

/// A single contact identifier found on the page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Contact {
    pub kind: ContactKind,
    pub value: String,
}

impl Contact {
    pub fn new(kind: ContactKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Contacts found in one harvesting pass, partitioned by kind.
///
/// Each partition is a set, so a value appears at most once per kind. The
/// sets are ordered, which gives the lexicographic listing order directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestResult {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
    pub socials: BTreeSet<String>,
    pub whatsapp: BTreeSet<String>,
}

impl HarvestResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// The partition holding contacts of `kind`.
    pub fn values(&self, kind: ContactKind) -> &BTreeSet<String> {
        match kind {
            ContactKind::Email => &self.emails,
            ContactKind::WhatsApp => &self.whatsapp,
            ContactKind::Phone => &self.phones,
            ContactKind::Social => &self.socials,
        }
    }

    fn values_mut(&mut self, kind: ContactKind) -> &mut BTreeSet<String> {
        match kind {
            ContactKind::Email => &mut self.emails,
            ContactKind::WhatsApp => &mut self.whatsapp,
            ContactKind::Phone => &mut self.phones,
            ContactKind::Social => &mut self.socials,
        }
    }

    /// Add a value under `kind`. Returns `false` if it was already present.
    pub fn insert(&mut self, kind: ContactKind, value: impl Into<String>) -> bool {
        self.values_mut(kind).insert(value.into())
    }

    pub fn len(&self) -> usize {
        self.emails.len() + self.phones.len() + self.socials.len() + self.whatsapp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the display list: grouped in `ContactKind::DISPLAY_ORDER`,
    /// each group sorted by value. Position `i` in the list is display ID `i + 1`.
    pub fn contacts(&self) -> Vec<Contact> {
        ContactKind::DISPLAY_ORDER
            .iter()
            .flat_map(|&kind| {
                self.values(kind)
                    .iter()
                    .map(move |value| Contact::new(kind, value.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_per_kind() {
        let mut result = HarvestResult::new();
        assert!(result.insert(ContactKind::Email, "info@example.com"));
        assert!(!result.insert(ContactKind::Email, "info@example.com"));
        assert_eq!(result.emails.len(), 1);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_contacts_follow_display_order() {
        let mut result = HarvestResult::new();
        result.insert(ContactKind::Social, "https://x.com/acme");
        result.insert(ContactKind::Phone, "555 123 4567 89");
        result.insert(ContactKind::Email, "zed@example.com");
        result.insert(ContactKind::Email, "amy@example.com");
        result.insert(ContactKind::WhatsApp, "https://wa.me/123456789");

        let contacts = result.contacts();
        let listed: Vec<(ContactKind, &str)> = contacts
            .iter()
            .map(|c| (c.kind, c.value.as_str()))
            .collect();

        assert_eq!(
            listed,
            vec![
                (ContactKind::Email, "amy@example.com"),
                (ContactKind::Email, "zed@example.com"),
                (ContactKind::WhatsApp, "https://wa.me/123456789"),
                (ContactKind::Phone, "555 123 4567 89"),
                (ContactKind::Social, "https://x.com/acme"),
            ]
        );
    }

    #[test]
    fn test_empty_result() {
        let result = HarvestResult::default();
        assert!(result.is_empty());
        assert!(result.contacts().is_empty());
    }
}
