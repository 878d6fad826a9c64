//! Contact extraction over a rendered page.
//!
//! The extractor runs independent matchers over the page text and outbound
//! links and folds the matches into a [`HarvestResult`]. It is configured
//! with a [`KindSet`]: a disabled kind's matcher is never run, which is how
//! the email-only harvester and the multi-channel harvester share one code path.

pub mod matchers;

pub use matchers::{classify_link, find_emails, find_phones, SOCIAL_DOMAINS, WHATSAPP_DOMAINS};

use crate::domain::{ContactKind, HarvestResult, KindSet};
use crate::fetcher::RenderedPage;
use tracing::{debug, info};

/// Extracts typed contacts from rendered text and links.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    kinds: KindSet,
}

impl Extractor {
    /// Create an extractor producing only the given kinds.
    pub fn new(kinds: KindSet) -> Self {
        Self { kinds }
    }

    /// Extractor with every kind enabled.
    pub fn all_kinds() -> Self {
        Self::new(KindSet::all())
    }

    /// Extract contacts from a rendered page.
    pub fn extract_page(&self, page: &RenderedPage) -> HarvestResult {
        self.extract(&page.text, &page.links)
    }

    /// Extract contacts from page text and its outbound links.
    pub fn extract<I, S>(&self, text: &str, links: I) -> HarvestResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = HarvestResult::new();

        if self.kinds.contains(ContactKind::Email) {
            result.emails = find_emails(text);
        }

        if self.kinds.contains(ContactKind::Phone) {
            result.phones = find_phones(text);
        }

        let wants_links =
            self.kinds.contains(ContactKind::Social) || self.kinds.contains(ContactKind::WhatsApp);
        if wants_links {
            for link in links {
                let link = link.as_ref();
                if let Some(kind) = classify_link(link) {
                    if self.kinds.contains(kind) {
                        debug!(%kind, link, "Classified outbound link");
                        result.insert(kind, link);
                    }
                }
            }
        }

        info!(
            emails = result.emails.len(),
            phones = result.phones.len(),
            socials = result.socials.len(),
            whatsapp = result.whatsapp.len(),
            "Extraction complete"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_kinds() {
        let extractor = Extractor::all_kinds();
        let result = extractor.extract(
            "Reach sales@acme.io or 020 7946 0958",
            ["https://facebook.com/acme", "https://wa.me/442079460958", "/about"],
        );

        assert!(result.emails.contains("sales@acme.io"));
        assert!(result.phones.contains("020 7946 0958"));
        assert!(result.socials.contains("https://facebook.com/acme"));
        assert!(result.whatsapp.contains("https://wa.me/442079460958"));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn test_email_only_configuration() {
        let extractor = Extractor::new(KindSet::only([ContactKind::Email]));
        let result = extractor.extract(
            "Reach sales@acme.io or 020 7946 0958",
            ["https://facebook.com/acme", "https://wa.me/442079460958"],
        );

        assert_eq!(result.emails.len(), 1);
        assert!(result.phones.is_empty());
        assert!(result.socials.is_empty());
        assert!(result.whatsapp.is_empty());
    }

    #[test]
    fn test_whatsapp_disabled_does_not_fall_back_to_social() {
        let extractor = Extractor::new(KindSet::only([ContactKind::Social]));
        let result = extractor.extract("", ["https://wa.me/123", "https://x.com/acme"]);

        assert!(result.whatsapp.is_empty());
        assert_eq!(
            result.socials.iter().collect::<Vec<_>>(),
            vec!["https://x.com/acme"]
        );
    }

    #[test]
    fn test_empty_input() {
        let result = Extractor::all_kinds().extract("", Vec::<String>::new());
        assert!(result.is_empty());
    }
}
