//! Settings-form screen state.
//!
//! The account record itself lives on the wizard; this is only what the form
//! screen needs on top of it: the latest validation outcome and the
//! submission flag.

use mailhatch_core::{FieldName, ValidationError, ValidationReport};

/// State for the IMAP/SMTP settings form screen.
#[derive(Debug, Default)]
pub struct SettingsFormState {
    /// Most recent validation failure, if any.
    pub error: Option<ValidationError>,
    /// Fields flagged by the last submit attempt.
    pub error_fields: Vec<FieldName>,
    /// Whether the account handoff is in flight.
    pub submitting: bool,
    /// Error from the handoff itself, shown above the submit button.
    pub submit_error: Option<String>,
}

impl SettingsFormState {
    /// Create a pristine form state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recorded validation state with a fresh report.
    pub fn apply_report(&mut self, report: ValidationReport) {
        self.error = report.error;
        self.error_fields = report.error_fields;
    }

    /// Whether a field was flagged by the last submit attempt.
    #[must_use]
    pub fn is_flagged(&self, field: FieldName) -> bool {
        self.error_fields.contains(&field)
    }

    /// Message to show above the submit button, handoff errors first.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.submit_error
            .as_deref()
            .or_else(|| self.error.as_ref().map(ValidationError::message))
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
    use mailhatch_core::{AccountInfo, validate};

    #[test]
    fn apply_report_replaces_previous_errors() {
        let mut form = SettingsFormState::new();
        form.error_fields = vec![FieldName::SmtpPort];

        // A fresh report from an empty form carries no flags.
        form.apply_report(validate(&AccountInfo::new()));
        assert!(form.error_fields.is_empty());
        assert!(form.error_message().is_none());
    }

    #[test]
    fn handoff_errors_take_precedence() {
        let mut form = SettingsFormState::new();
        form.submit_error = Some("Keyring unavailable".to_string());
        assert_eq!(form.error_message(), Some("Keyring unavailable"));
    }

    #[test]
    fn is_flagged_matches_recorded_fields() {
        let mut form = SettingsFormState::new();
        form.error_fields = vec![FieldName::ImapHost, FieldName::ImapPort];
        assert!(form.is_flagged(FieldName::ImapHost));
        assert!(!form.is_flagged(FieldName::SmtpHost));
    }
}
