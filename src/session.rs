//! Interactive selection and dispatch over a harvest result.
//!
//! A [`Session`] lists the harvested contacts, takes the operator's choice and
//! opens the matching channel. It owns no I/O of its own: the console and the
//! launcher are injected, which keeps every path testable with doubles.

use crate::console::{Console, Tone};
use crate::domain::{Contact, ContactKind, EmailAddress, HarvestResult, PhoneNumber};
use crate::draft::{Draft, DEFAULT_INTENT};
use crate::error::{ConsoleError, ConsoleResult};
use crate::launcher::Launcher;
use tracing::{info, warn};

/// Terminal state reached by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was harvested
    NoContacts,

    /// Operator chose 0, pressed Ctrl-C, or closed input
    Aborted,

    /// Target handed to the default handler
    Launched { uri: String },

    /// Launcher failed; the raw target was printed instead
    LaunchFailed { uri: String },

    /// Email draft shown but the mail client was declined
    DraftDiscarded,

    /// Phone shown but dialing was declined
    PhoneSkipped,
}

pub struct Session<'a> {
    console: &'a mut dyn Console,
    launcher: &'a dyn Launcher,
}

impl<'a> Session<'a> {
    pub fn new(console: &'a mut dyn Console, launcher: &'a dyn Launcher) -> Self {
        Self { console, launcher }
    }

    /// Run the listing → selection → dispatch flow for one harvest.
    ///
    /// Interrupts and end-of-input at any prompt end the session as
    /// [`Outcome::Aborted`]. Only console I/O faults are returned as errors.
    pub fn run(&mut self, url: &str, result: &HarvestResult) -> ConsoleResult<Outcome> {
        match self.drive(url, result) {
            Err(e) if e.is_abort() => {
                if matches!(e, ConsoleError::Interrupted) {
                    self.console.say(Tone::Error, "\nSession terminated.");
                }
                Ok(Outcome::Aborted)
            }
            other => other,
        }
    }

    fn drive(&mut self, url: &str, result: &HarvestResult) -> ConsoleResult<Outcome> {
        let contacts = result.contacts();
        if contacts.is_empty() {
            self.console.say(
                Tone::Warning,
                "No contact information discovered on this page.",
            );
            return Ok(Outcome::NoContacts);
        }

        self.console.show_contacts(
            &format!("Discovered Connection Points: {}", url),
            &contacts,
        );

        let choice = self.console.prompt_index(
            "\nSelect a contact ID to connect (or 0 to exit)",
            contacts.len(),
        )?;
        if choice == 0 {
            self.console.say(Tone::Dim, "Exiting...");
            return Ok(Outcome::Aborted);
        }

        let selected = &contacts[choice - 1];
        info!(kind = %selected.kind, "Contact selected");
        self.console.say(
            Tone::Success,
            &format!("\nConnecting via {}...", selected.kind),
        );

        match selected.kind {
            ContactKind::Email => self.dispatch_email(selected),
            ContactKind::WhatsApp | ContactKind::Social => {
                self.console
                    .say(Tone::Info, &format!("Opening link: {}", selected.value));
                Ok(self.launch(&selected.value))
            }
            ContactKind::Phone => self.dispatch_phone(selected),
        }
    }

    fn dispatch_email(&mut self, contact: &Contact) -> ConsoleResult<Outcome> {
        let intent = self
            .console
            .prompt_text("\nWhat is the purpose of this email?", Some(DEFAULT_INTENT))?;
        let draft = Draft::from_intent(&intent);

        self.console.show_panel(
            "Draft Inquiry",
            &format!("Subject: {}\n---\n{}", draft.subject, draft.body),
        );

        if !self.console.confirm("Launch mail client?", true)? {
            return Ok(Outcome::DraftDiscarded);
        }

        let uri = match EmailAddress::new(contact.value.as_str()) {
            Ok(to) => draft.mailto(&to),
            Err(e) => {
                warn!(error = %e, "Harvested email failed validation; using raw value");
                format!(
                    "mailto:{}?subject={}&body={}",
                    contact.value,
                    urlencoding::encode(&draft.subject),
                    urlencoding::encode(&draft.body)
                )
            }
        };

        Ok(self.launch(&uri))
    }

    fn dispatch_phone(&mut self, contact: &Contact) -> ConsoleResult<Outcome> {
        self.console.say(
            Tone::Warning,
            &format!("Phone number detected: {}", contact.value),
        );
        self.console.say(
            Tone::Dim,
            "Tip: You can dial this number directly on your mobile device.",
        );

        if !self
            .console
            .confirm("Try to open dialer? (Desktop supported)", false)?
        {
            return Ok(Outcome::PhoneSkipped);
        }

        let uri = PhoneNumber::new(contact.value.as_str())
            .map(|phone| phone.tel_uri())
            .unwrap_or_else(|_| format!("tel:{}", contact.value));

        Ok(self.launch(&uri))
    }

    fn launch(&mut self, uri: &str) -> Outcome {
        match self.launcher.launch(uri) {
            Ok(()) => Outcome::Launched {
                uri: uri.to_string(),
            },
            Err(e) => {
                warn!(error = %e, "Launch failed");
                self.console
                    .say(Tone::Error, &format!("Could not open a handler: {}", e));
                self.console
                    .say(Tone::Plain, &format!("Open it manually: {}", uri));
                Outcome::LaunchFailed {
                    uri: uri.to_string(),
                }
            }
        }
    }
}
