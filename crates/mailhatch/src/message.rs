//! Message types for application events.
//!
//! In the Elm architecture, Messages are events that trigger state changes.

use mailhatch_auth::AuthenticatedUser;

use crate::model::AppSettings;
use crate::webview;

/// Application messages (events).
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    /// Navigate to a different onboarding step.
    NavigateTo(View),

    // Screens
    /// Settings form messages.
    Form(FormMessage),
    /// Authenticate page messages.
    Auth(AuthMessage),
    /// Embedded browser view lifecycle events.
    Webview(webview::Event),

    // Async results
    /// Account handoff completed.
    AccountSubmitted(Result<(), String>),
    /// Sign-in session persisted.
    SessionSaved(Result<(), String>),
    /// App settings loaded from disk.
    SettingsLoaded(Result<AppSettings, String>),
    /// App settings saved to disk.
    SettingsSaved(Result<(), String>),

    // Appearance
    /// Toggle between light and dark theme.
    ToggleTheme,
}

/// Messages for the IMAP/SMTP settings form.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// IMAP host changed.
    ImapHostChanged(String),
    /// IMAP port changed.
    ImapPortChanged(String),
    /// IMAP username changed.
    ImapUsernameChanged(String),
    /// IMAP password changed.
    ImapPasswordChanged(String),
    /// SMTP host changed.
    SmtpHostChanged(String),
    /// SMTP port changed.
    SmtpPortChanged(String),
    /// SMTP username changed.
    SmtpUsernameChanged(String),
    /// SMTP password changed.
    SmtpPasswordChanged(String),
    /// "Require SSL" toggled.
    SslRequiredToggled(bool),
    /// Validate and hand the account off.
    Connect,
}

/// Messages for the authenticate page.
#[derive(Debug, Clone)]
pub enum AuthMessage {
    /// The slow-load warning timer fired.
    SlowElapsed,
    /// The post-success delay elapsed; merge the profile and move on.
    Advance(AuthenticatedUser),
    /// User asked to reload the sign-in page.
    TryAgain,
}

/// Onboarding steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Hosted sign-in flow in the embedded browser view.
    #[default]
    Authenticate,
    /// IMAP/SMTP settings form.
    AccountSettings,
    /// Summary once the account is connected.
    Complete,
}
