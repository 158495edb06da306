//! Settings-form validation.
//!
//! `validate` is a pure function of the account record: it never mutates the
//! form and is recomputed from scratch on every call.

use std::sync::LazyLock;

use regex::Regex;

use super::model::{AccountInfo, FieldName, MailProtocol};

/// Domain-name pattern: one or more dotted labels ending in an alphabetic TLD.
#[allow(clippy::unwrap_used)]
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$").unwrap()
});

/// IPv4 dotted-quad pattern.
#[allow(clippy::unwrap_used)]
static IP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(?:\.\d{1,3}){3}$").unwrap());

/// A hosted-webmail endpoint that must be linked through its provider's own
/// sign-in flow instead of manual IMAP/SMTP settings.
#[derive(Debug, PartialEq, Eq)]
pub struct WebmailRedirect {
    /// The provider's well-known IMAP endpoint.
    pub host: &'static str,
    /// Instruction shown instead of accepting the host.
    pub message: &'static str,
}

/// Hosts that get redirected to a dedicated provider flow.
const WEBMAIL_REDIRECTS: &[WebmailRedirect] = &[WebmailRedirect {
    host: "imap.gmail.com",
    message: "Please link Gmail accounts by choosing Google on the provider screen.",
}];

/// A single validation failure, tied to the field it flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Host is neither a domain name nor an IP address.
    InvalidHost(MailProtocol),
    /// Host is a webmail endpoint with a dedicated sign-in flow.
    WebmailHost(MailProtocol, &'static WebmailRedirect),
    /// Port is not a valid port number.
    InvalidPort(MailProtocol),
}

impl ValidationError {
    /// Human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidHost(_) => "Please provide a valid hostname or IP address.",
            Self::WebmailHost(_, redirect) => redirect.message,
            Self::InvalidPort(_) => "Please provide a valid port number.",
        }
    }

    /// The form field this error flags.
    #[must_use]
    pub const fn field(&self) -> FieldName {
        match self {
            Self::InvalidHost(protocol) | Self::WebmailHost(protocol, _) => {
                FieldName::host(*protocol)
            }
            Self::InvalidPort(protocol) => FieldName::port(*protocol),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating the settings form.
///
/// `error` keeps the most recent failure (later checks overwrite the
/// message); `error_fields` accumulates every flagged field in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Most recent validation failure, if any.
    pub error: Option<ValidationError>,
    /// Every field flagged so far, in check order.
    pub error_fields: Vec<FieldName>,
    /// True once both protocols passed the required-field presence check.
    pub populated: bool,
}

impl ValidationReport {
    /// Message of the most recent failure.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.error.as_ref().map(ValidationError::message)
    }

    /// True when no field has been flagged.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.error_fields.is_empty()
    }

    /// Whether a given field is flagged.
    #[must_use]
    pub fn is_flagged(&self, field: FieldName) -> bool {
        self.error_fields.contains(&field)
    }

    fn record(&mut self, error: ValidationError) {
        self.error_fields.push(error.field());
        self.error = Some(error);
    }
}

/// Validate the settings form.
///
/// Checks IMAP first, then SMTP. An incomplete protocol (empty host,
/// username, or password) stops validation immediately: the form is not
/// considered submittable yet, and whatever was flagged up to that point is
/// returned unchanged.
#[must_use]
pub fn validate(info: &AccountInfo) -> ValidationReport {
    let mut report = ValidationReport::default();

    for protocol in MailProtocol::ALL {
        let server = info.server(protocol);

        if !server.is_populated() {
            return report;
        }

        if !is_valid_server(&server.host) {
            report.record(ValidationError::InvalidHost(protocol));
        }
        if let Some(redirect) = webmail_redirect(&server.host) {
            report.record(ValidationError::WebmailHost(protocol, redirect));
        }
        if server.port.trim().parse::<u16>().is_err() {
            report.record(ValidationError::InvalidPort(protocol));
        }
    }

    report.populated = true;
    report
}

/// True when the value looks like a server address (domain name or IPv4).
#[must_use]
pub fn is_valid_server(value: &str) -> bool {
    DOMAIN_PATTERN.is_match(value) || IP_PATTERN.is_match(value)
}

/// Look up the redirect policy for a host, if one applies.
#[must_use]
pub fn webmail_redirect(host: &str) -> Option<&'static WebmailRedirect> {
    WEBMAIL_REDIRECTS.iter().find(|r| r.host == host)
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
    use crate::account::ServerSettings;
    use proptest::prelude::*;

    fn complete_info() -> AccountInfo {
        AccountInfo {
            imap: ServerSettings {
                host: "mail.example.com".to_string(),
                port: "993".to_string(),
                username: "user@example.com".to_string(),
                password: "secret".to_string(),
            },
            smtp: ServerSettings {
                host: "smtp.example.com".to_string(),
                port: "465".to_string(),
                username: "user@example.com".to_string(),
                password: "secret".to_string(),
            },
            ssl_required: true,
            email: String::new(),
            name: String::new(),
        }
    }

    #[test]
    fn complete_and_valid_is_populated_and_clean() {
        let report = validate(&complete_info());
        assert!(report.populated);
        assert!(report.is_clean());
        assert!(report.message().is_none());
    }

    #[test]
    fn empty_form_is_not_populated() {
        let report = validate(&AccountInfo::new());
        assert!(!report.populated);
        assert!(report.is_clean());
    }

    #[test]
    fn missing_smtp_password_short_circuits_but_keeps_imap_errors() {
        let mut info = complete_info();
        info.imap.host = "not a host!".to_string();
        info.smtp.password.clear();

        let report = validate(&info);
        assert!(!report.populated);
        assert!(report.is_flagged(FieldName::ImapHost));
        assert!(!report.is_flagged(FieldName::SmtpHost));
    }

    #[test]
    fn invalid_hostname_flags_host_field() {
        let mut info = complete_info();
        info.imap.host = "not a host!".to_string();

        let report = validate(&info);
        assert!(report.populated);
        assert!(report.is_flagged(FieldName::ImapHost));
        assert_eq!(
            report.message(),
            Some("Please provide a valid hostname or IP address.")
        );
    }

    #[test]
    fn ip_address_host_is_accepted() {
        let mut info = complete_info();
        info.imap.host = "192.168.1.10".to_string();
        let report = validate(&info);
        assert!(report.is_clean());
    }

    #[test]
    fn single_label_host_is_rejected() {
        // Bare hostnames without a dot are not accepted; use an IP instead.
        let mut info = complete_info();
        info.imap.host = "localhost".to_string();
        assert!(validate(&info).is_flagged(FieldName::ImapHost));
    }

    #[test]
    fn gmail_imap_host_gets_redirect_message_despite_being_syntactically_valid() {
        let mut info = complete_info();
        info.imap.host = "imap.gmail.com".to_string();

        let report = validate(&info);
        assert!(report.populated);
        assert!(report.is_flagged(FieldName::ImapHost));
        assert_eq!(
            report.message(),
            Some("Please link Gmail accounts by choosing Google on the provider screen.")
        );
    }

    #[test]
    fn gmail_literal_in_smtp_host_is_also_redirected() {
        let mut info = complete_info();
        info.smtp.host = "imap.gmail.com".to_string();
        assert!(validate(&info).is_flagged(FieldName::SmtpHost));
    }

    #[test]
    fn non_integer_port_flags_port_field() {
        let mut info = complete_info();
        info.smtp.port = "four-sixty-five".to_string();

        let report = validate(&info);
        assert!(report.populated);
        assert!(report.is_flagged(FieldName::SmtpPort));
        assert_eq!(report.message(), Some("Please provide a valid port number."));
    }

    #[test]
    fn empty_port_flags_port_field() {
        let mut info = complete_info();
        info.imap.port.clear();
        assert!(validate(&info).is_flagged(FieldName::ImapPort));
    }

    #[test]
    fn later_errors_overwrite_message_but_fields_accumulate() {
        let mut info = complete_info();
        info.imap.host = "not a host!".to_string();
        info.imap.port = "nope".to_string();

        let report = validate(&info);
        assert!(report.is_flagged(FieldName::ImapHost));
        assert!(report.is_flagged(FieldName::ImapPort));
        assert_eq!(report.message(), Some("Please provide a valid port number."));
    }

    proptest! {
        #[test]
        fn any_missing_required_field_is_never_populated(blank in 0usize..6) {
            let mut info = complete_info();
            match blank {
                0 => info.imap.host.clear(),
                1 => info.imap.username.clear(),
                2 => info.imap.password.clear(),
                3 => info.smtp.host.clear(),
                4 => info.smtp.username.clear(),
                _ => info.smtp.password.clear(),
            }
            prop_assert!(!validate(&info).populated);
        }

        #[test]
        fn valid_hosts_never_flag_host_fields(
            label in "[a-z][a-z0-9]{0,10}",
            tld in "(com|net|org|io)",
        ) {
            let mut info = complete_info();
            info.imap.host = format!("{label}.{tld}");
            let report = validate(&info);
            prop_assert!(!report.is_flagged(FieldName::ImapHost));
        }
    }
}
