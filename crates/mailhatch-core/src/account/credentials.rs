//! Secure credential storage using the system keyring.
//!
//! Onboarding never writes passwords to disk. Once the settings form is
//! submitted they go to the platform's native credential store:
//! - Linux: Secret Service (GNOME Keyring, `KWallet`)
//! - macOS: Keychain
//! - Windows: Credential Manager

use keyring::Entry;
use tracing::debug;

use super::model::MailProtocol;

/// Service name used for keyring entries.
const SERVICE_NAME: &str = "mailhatch";

/// Error type for credential operations.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Failed to access keyring.
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// An account email is required to key the entry.
    #[error("Account email is required for credential storage")]
    MissingEmail,
}

/// Result type for credential operations.
pub type CredentialResult<T> = std::result::Result<T, CredentialError>;

/// Generates the keyring entry key for one protocol's password.
fn credential_key(email: &str, protocol: MailProtocol) -> String {
    format!("{SERVICE_NAME}_{}_{email}", protocol.id())
}

/// Stores a server password securely in the system keyring.
///
/// # Errors
///
/// Returns an error if the email is empty or the keyring operation fails.
pub fn store_password(
    email: &str,
    protocol: MailProtocol,
    password: &str,
) -> CredentialResult<()> {
    if email.trim().is_empty() {
        return Err(CredentialError::MissingEmail);
    }
    let key = credential_key(email, protocol);
    let entry = Entry::new(SERVICE_NAME, &key)?;
    entry.set_password(password)?;
    debug!("Stored {} password for {email}", protocol.id());
    Ok(())
}

/// Retrieves a server password from the system keyring.
///
/// # Errors
///
/// Returns an error if the keyring operation fails.
pub fn get_password(email: &str, protocol: MailProtocol) -> CredentialResult<Option<String>> {
    let key = credential_key(email, protocol);
    let entry = Entry::new(SERVICE_NAME, &key)?;
    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => {
            debug!("No {} password found for {email}", protocol.id());
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Stores both the IMAP and SMTP passwords for an account.
///
/// # Errors
///
/// Returns an error if the email is empty or a keyring operation fails.
pub fn store_account_passwords(
    email: &str,
    imap_password: &str,
    smtp_password: &str,
) -> CredentialResult<()> {
    store_password(email, MailProtocol::Imap, imap_password)?;
    store_password(email, MailProtocol::Smtp, smtp_password)?;
    Ok(())
}

/// Deletes both passwords for an account from the keyring.
///
/// Missing entries are not an error.
///
/// # Errors
///
/// Returns an error if a keyring operation fails.
pub fn delete_account_passwords(email: &str) -> CredentialResult<()> {
    for protocol in MailProtocol::ALL {
        let key = credential_key(email, protocol);
        let entry = Entry::new(SERVICE_NAME, &key)?;
        match entry.delete_credential() {
            Ok(()) => debug!("Deleted {} password for {email}", protocol.id()),
            Err(keyring::Error::NoEntry) => {
                debug!("No {} password to delete for {email}", protocol.id());
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    // Note: These tests interact with the actual system keyring.
    // They are marked as ignored by default to avoid polluting the keyring
    // during automated testing. Run manually with `cargo test -- --ignored`

    use super::*;

    #[test]
    fn empty_email_is_rejected() {
        let result = store_password("", MailProtocol::Imap, "secret");
        assert!(matches!(result, Err(CredentialError::MissingEmail)));
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn store_and_retrieve_password() {
        let email = "keyring-test@example.com";
        store_password(email, MailProtocol::Imap, "imap_pass").unwrap();

        let retrieved = get_password(email, MailProtocol::Imap).unwrap();
        assert_eq!(retrieved, Some("imap_pass".to_string()));

        delete_account_passwords(email).unwrap();
    }

    #[test]
    #[ignore = "Interacts with system keyring"]
    fn delete_clears_both_protocols() {
        let email = "keyring-test-2@example.com";
        store_account_passwords(email, "imap_pass", "smtp_pass").unwrap();

        delete_account_passwords(email).unwrap();

        assert_eq!(get_password(email, MailProtocol::Imap).unwrap(), None);
        assert_eq!(get_password(email, MailProtocol::Smtp).unwrap(), None);
    }
}
