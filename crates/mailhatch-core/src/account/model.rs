//! Account model types for the onboarding flow.

use serde::{Deserialize, Serialize};

/// Mail protocol a server block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MailProtocol {
    /// Incoming mail (IMAP).
    Imap,
    /// Outgoing mail (SMTP).
    Smtp,
}

impl MailProtocol {
    /// Both protocols, in the order the settings form validates them.
    pub const ALL: [Self; 2] = [Self::Imap, Self::Smtp];

    /// Short lowercase identifier (`imap` / `smtp`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Imap => "imap",
            Self::Smtp => "smtp",
        }
    }
}

/// A single form field of the account record.
///
/// Error reporting is keyed by this enum, so flagged fields can only ever be
/// drawn from the fixed field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// IMAP server hostname.
    ImapHost,
    /// IMAP server port.
    ImapPort,
    /// IMAP username.
    ImapUsername,
    /// IMAP password.
    ImapPassword,
    /// SMTP server hostname.
    SmtpHost,
    /// SMTP server port.
    SmtpPort,
    /// SMTP username.
    SmtpUsername,
    /// SMTP password.
    SmtpPassword,
    /// Shared "require SSL" flag.
    SslRequired,
}

impl FieldName {
    /// Host field for a protocol.
    #[must_use]
    pub const fn host(protocol: MailProtocol) -> Self {
        match protocol {
            MailProtocol::Imap => Self::ImapHost,
            MailProtocol::Smtp => Self::SmtpHost,
        }
    }

    /// Port field for a protocol.
    #[must_use]
    pub const fn port(protocol: MailProtocol) -> Self {
        match protocol {
            MailProtocol::Imap => Self::ImapPort,
            MailProtocol::Smtp => Self::SmtpPort,
        }
    }

    /// Username field for a protocol.
    #[must_use]
    pub const fn username(protocol: MailProtocol) -> Self {
        match protocol {
            MailProtocol::Imap => Self::ImapUsername,
            MailProtocol::Smtp => Self::SmtpUsername,
        }
    }

    /// Password field for a protocol.
    #[must_use]
    pub const fn password(protocol: MailProtocol) -> Self {
        match protocol {
            MailProtocol::Imap => Self::ImapPassword,
            MailProtocol::Smtp => Self::SmtpPassword,
        }
    }

    /// Stable field identifier (`imap_host`, `smtp_port`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ImapHost => "imap_host",
            Self::ImapPort => "imap_port",
            Self::ImapUsername => "imap_username",
            Self::ImapPassword => "imap_password",
            Self::SmtpHost => "smtp_host",
            Self::SmtpPort => "smtp_port",
            Self::SmtpUsername => "smtp_username",
            Self::SmtpPassword => "smtp_password",
            Self::SslRequired => "ssl_required",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server connection fields for one protocol, as entered in the form.
///
/// Port is kept as typed text so validation can report non-numeric input
/// instead of silently coercing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Server hostname or IP address.
    pub host: String,
    /// Server port, as entered.
    pub port: String,
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl ServerSettings {
    /// True when host, username, and password are all filled in.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.host.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.password.is_empty()
    }
}

/// The onboarding account record shared across wizard steps.
///
/// `email` and `name` stay empty until the authenticate step fills them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Incoming mail server settings.
    pub imap: ServerSettings,
    /// Outgoing mail server settings.
    pub smtp: ServerSettings,
    /// Whether SSL is required for both connections.
    pub ssl_required: bool,
    /// Email address from the authentication flow.
    pub email: String,
    /// Display name from the authentication flow.
    pub name: String,
}

impl AccountInfo {
    /// Create a record with the usual SSL defaults prefilled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            imap: ServerSettings {
                port: "993".to_string(),
                ..Default::default()
            },
            smtp: ServerSettings {
                port: "465".to_string(),
                ..Default::default()
            },
            ssl_required: true,
            ..Default::default()
        }
    }

    /// Server settings for a protocol.
    #[must_use]
    pub const fn server(&self, protocol: MailProtocol) -> &ServerSettings {
        match protocol {
            MailProtocol::Imap => &self.imap,
            MailProtocol::Smtp => &self.smtp,
        }
    }

    /// Mutable server settings for a protocol.
    pub const fn server_mut(&mut self, protocol: MailProtocol) -> &mut ServerSettings {
        match protocol {
            MailProtocol::Imap => &mut self.imap,
            MailProtocol::Smtp => &mut self.smtp,
        }
    }

    /// Merge the identity fields produced by the authentication flow.
    ///
    /// `name` is the pre-joined display name ("First Last"); server fields
    /// are left untouched.
    pub fn merge_identity(&mut self, email: &str, name: &str) {
        self.email = email.to_string();
        self.name = name.to_string();
    }
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
    use super::*;

    #[test]
    fn new_prefills_ssl_ports() {
        let info = AccountInfo::new();
        assert_eq!(info.imap.port, "993");
        assert_eq!(info.smtp.port, "465");
        assert!(info.ssl_required);
        assert!(info.email.is_empty());
    }

    #[test]
    fn server_accessors_match_protocol() {
        let mut info = AccountInfo::new();
        info.server_mut(MailProtocol::Imap).host = "mail.example.com".to_string();
        info.server_mut(MailProtocol::Smtp).host = "smtp.example.com".to_string();
        assert_eq!(info.server(MailProtocol::Imap).host, "mail.example.com");
        assert_eq!(info.server(MailProtocol::Smtp).host, "smtp.example.com");
    }

    #[test]
    fn is_populated_requires_host_username_password() {
        let mut server = ServerSettings {
            host: "mail.example.com".to_string(),
            port: "993".to_string(),
            username: "user".to_string(),
            password: "secret".to_string(),
        };
        assert!(server.is_populated());

        server.password.clear();
        assert!(!server.is_populated());

        server.password = "secret".to_string();
        server.host = "   ".to_string();
        assert!(!server.is_populated());
    }

    #[test]
    fn merge_identity_leaves_servers_alone() {
        let mut info = AccountInfo::new();
        info.imap.host = "mail.example.com".to_string();
        info.merge_identity("a@b.com", "A B");
        assert_eq!(info.email, "a@b.com");
        assert_eq!(info.name, "A B");
        assert_eq!(info.imap.host, "mail.example.com");
    }

    #[test]
    fn field_name_identifiers() {
        assert_eq!(FieldName::host(MailProtocol::Imap).as_str(), "imap_host");
        assert_eq!(FieldName::port(MailProtocol::Smtp).as_str(), "smtp_port");
        assert_eq!(
            FieldName::username(MailProtocol::Smtp).to_string(),
            "smtp_username"
        );
        assert_eq!(
            FieldName::password(MailProtocol::Imap).as_str(),
            "imap_password"
        );
    }
}
