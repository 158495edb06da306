//! # mailhatch-core
//!
//! Core account types for the `MailHatch` onboarding wizard.
//!
//! This crate provides:
//! - The onboarding account record (`AccountInfo`) with an enumerated field
//!   schema per mail protocol
//! - Settings-form validation (`validate`)
//! - Secure password storage via the system keyring

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod account;

pub use account::credentials;
pub use account::{
    AccountInfo, CredentialError, CredentialResult, FieldName, MailProtocol, ServerSettings,
    ValidationError, ValidationReport, WebmailRedirect, validate,
};
