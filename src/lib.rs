//! Dispatch - find a page's points of contact and open a channel to one.
//!
//! A run fetches one web page, renders its scripts, extracts emails, phone
//! numbers and social/messaging links, lists them, and opens the mail client,
//! browser or dialer for the contact the operator picks.
//!
//! # Architecture
//!
//! - **domain**: Contact kinds, contacts, harvest results and value objects
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: Blocking HTTP client and its async wrapper
//! - **fetcher**: Download + headless render with static fallback
//! - **extractor**: Pattern matchers producing a `HarvestResult`
//! - **draft**: Email draft template and mailto construction
//! - **console**: Interactive I/O trait, terminal implementation, table rendering
//! - **launcher**: OS default-handler hand-off
//! - **session**: Selection and dispatch state machine
//! - **runtime**: Process runtime and operator-interrupt handling

pub mod client;
pub mod config;
pub mod console;
pub mod domain;
pub mod draft;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod launcher;
pub mod runtime;
pub mod session;

pub use client::PageClient;
pub use config::Config;
pub use console::{Console, TerminalConsole, Tone};
pub use domain::{Contact, ContactKind, HarvestResult, KindSet};
pub use draft::Draft;
pub use error::{ConfigError, ConsoleError, FetchError, LaunchError};
pub use extractor::Extractor;
pub use fetcher::{Fetcher, RenderedPage};
pub use launcher::{Launcher, SystemLauncher};
pub use session::{Outcome, Session};
