//! Email draft generation from an operator-supplied intent.

use crate::domain::EmailAddress;
use std::fmt;

/// Intent used when the operator accepts the prompt default.
pub const DEFAULT_INTENT: &str = "Business Inquiry";

/// A generated email subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub subject: String,
    pub body: String,
}

impl Draft {
    /// Fill the fixed inquiry template with `intent`, verbatim.
    pub fn from_intent(intent: &str) -> Self {
        let subject = format!("Inquiry: {}", intent);
        let body = format!(
            "Dear Sir/Madam,\n\n\
             I am writing to you regarding the following: {}.\n\n\
             I found your contact information listed on your website and wanted to reach out directly.\n\n\
             Any information or guidance you could provide would be greatly appreciated.\n\n\
             Thank you for your time.\n\n\
             Sincerely,\n\n\
             [Your Name]",
            intent
        );

        Self { subject, body }
    }

    /// `mailto:` target with the subject and body percent-encoded.
    ///
    /// Spaces become `%20` and newlines `%0A`, which every mail client decodes.
    pub fn mailto(&self, to: &EmailAddress) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject: {}\n\n{}", self.subject, self.body)
    }
}
