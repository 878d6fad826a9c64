//! Domain value objects and types.
//!
//! This module contains the contact model produced by a harvesting pass
//! (kinds, contacts, the per-run result set) and type-safe wrappers for
//! email addresses and phone numbers. The email and phone wrappers share
//! their patterns with the extractor, so anything the extractor finds
//! converts into a value object without surprises.

pub mod contact;
pub mod email;
pub mod errors;
pub mod kind;
pub mod phone;

pub use contact::{Contact, HarvestResult};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use kind::{ContactKind, KindSet};
pub use phone::PhoneNumber;
