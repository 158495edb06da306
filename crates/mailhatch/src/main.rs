//! `MailHatch` - desktop email-client onboarding wizard
//!
//! Built with Rust and the iced GUI framework. Walks a new user through the
//! hosted sign-in flow and the IMAP/SMTP settings form, then hands the
//! finished account off to the mail client proper.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod model;
mod style;
mod view;
mod webview;

use std::path::PathBuf;

use iced::{Element, Subscription, Task};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mailhatch_auth::{AuthenticatedUser, SessionStore, UserSession, hosted};
use mailhatch_core::{AccountInfo, credentials, validate};

use message::{AuthMessage, FormMessage, Message, View};
use model::{ADVANCE_AFTER, AppSettings, AuthPageState, SLOW_LOAD_AFTER, SettingsFormState};
use style::widgets::palette::ThemeMode;
use webview::WebviewHandle;

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailhatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailHatch");

    iced::application(MailHatch::new, MailHatch::update, MailHatch::view)
        .title("MailHatch")
        .subscription(MailHatch::subscription)
        .run()
}

/// Main application state.
struct MailHatch {
    /// Current onboarding step.
    current_view: View,
    /// Shared onboarding account record.
    account_info: AccountInfo,
    /// Settings form screen state.
    form: SettingsFormState,
    /// Authenticate page state.
    authenticate: AuthPageState,
    /// Handle to the embedded browser view, once it connects.
    webview: Option<WebviewHandle>,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl Default for MailHatch {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            account_info: AccountInfo::new(),
            form: SettingsFormState::new(),
            authenticate: AuthPageState::new(),
            webview: None,
            theme_mode: ThemeMode::Light,
        }
    }
}

impl MailHatch {
    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        style::widgets::palette::set_theme(self.theme_mode);
    }

    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();
        app.apply_theme();
        let settings_task = Task::perform(load_settings(), Message::SettingsLoaded);
        let auth_task = app.enter_authenticate();
        (app, Task::batch([settings_task, auth_task]))
    }

    /// Reset the authenticate page, point the browser view at the hosted
    /// flow, and arm the slow-load warning.
    fn enter_authenticate(&mut self) -> Task<Message> {
        self.authenticate.dismiss();
        self.authenticate = AuthPageState::new();
        if let Some(webview) = &self.webview {
            webview.navigate(hosted::AUTH_PAGE_URL);
        }

        let (task, handle) = Task::perform(tokio::time::sleep(SLOW_LOAD_AFTER), |()| {
            Message::Auth(AuthMessage::SlowElapsed)
        })
        .abortable();
        self.authenticate.set_slow_timer(handle);
        task
    }

    /// Update state based on message.
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(step) => {
                if self.current_view == View::Authenticate && step != View::Authenticate {
                    self.authenticate.dismiss();
                }
                self.current_view = step;
                if step == View::Authenticate {
                    return self.enter_authenticate();
                }
            }
            Message::Form(msg) => return self.handle_form(msg),
            Message::Auth(msg) => return self.handle_auth(msg),
            Message::Webview(event) => return self.handle_webview(event),
            Message::AccountSubmitted(result) => {
                self.form.submitting = false;
                match result {
                    Ok(()) => {
                        info!("Account connected for {}", self.account_info.email);
                        return Task::done(Message::NavigateTo(View::Complete));
                    }
                    Err(e) => self.form.submit_error = Some(e),
                }
            }
            Message::SessionSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to persist session: {e}");
                }
            }
            Message::SettingsLoaded(result) => match result {
                Ok(settings) => {
                    self.theme_mode = settings.theme_mode;
                    self.apply_theme();
                }
                Err(e) => {
                    info!("Failed to load settings, using defaults: {e}");
                }
            },
            Message::SettingsSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to save settings: {e}");
                }
            }
            Message::ToggleTheme => {
                self.theme_mode = match self.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::Light,
                };
                self.apply_theme();
                let settings = AppSettings {
                    theme_mode: self.theme_mode,
                };
                return Task::perform(save_settings(settings), Message::SettingsSaved);
            }
        }
        Task::none()
    }

    /// Handle settings form messages.
    fn handle_form(&mut self, message: FormMessage) -> Task<Message> {
        match message {
            FormMessage::ImapHostChanged(host) => self.account_info.imap.host = host,
            FormMessage::ImapPortChanged(port) => self.account_info.imap.port = port,
            FormMessage::ImapUsernameChanged(username) => {
                self.account_info.imap.username = username;
            }
            FormMessage::ImapPasswordChanged(password) => {
                self.account_info.imap.password = password;
            }
            FormMessage::SmtpHostChanged(host) => self.account_info.smtp.host = host,
            FormMessage::SmtpPortChanged(port) => self.account_info.smtp.port = port,
            FormMessage::SmtpUsernameChanged(username) => {
                self.account_info.smtp.username = username;
            }
            FormMessage::SmtpPasswordChanged(password) => {
                self.account_info.smtp.password = password;
            }
            FormMessage::SslRequiredToggled(required) => {
                self.account_info.ssl_required = required;
            }
            FormMessage::Connect => {
                let report = validate(&self.account_info);
                let ready = report.populated && report.is_clean();
                self.form.apply_report(report);
                self.form.submit_error = None;
                if ready {
                    self.form.submitting = true;
                    return Task::perform(
                        submit_account(self.account_info.clone()),
                        Message::AccountSubmitted,
                    );
                }
            }
        }
        Task::none()
    }

    /// Handle authenticate page messages.
    fn handle_auth(&mut self, message: AuthMessage) -> Task<Message> {
        match message {
            AuthMessage::SlowElapsed => self.authenticate.slow_elapsed(),
            AuthMessage::TryAgain => {
                if let Some(webview) = &self.webview {
                    webview.reload();
                }
            }
            AuthMessage::Advance(user) => {
                self.account_info
                    .merge_identity(&user.email, &user.display_name());
                info!("Signed in as {}", user.email);
                return Task::done(Message::NavigateTo(View::AccountSettings));
            }
        }
        Task::none()
    }

    /// Handle embedded browser view events.
    fn handle_webview(&mut self, event: webview::Event) -> Task<Message> {
        match event {
            webview::Event::Connected(handle) => {
                self.webview = Some(handle);
                if self.current_view == View::Authenticate
                    && let Some(webview) = &self.webview
                {
                    webview.navigate(hosted::AUTH_PAGE_URL);
                }
            }
            webview::Event::StartLoading => self.authenticate.start_loading(),
            webview::Event::FailLoad {
                error_code,
                error_description,
                validated_url,
            } => {
                self.authenticate
                    .fail_load(error_code, error_description.as_deref(), &validated_url);
            }
            webview::Event::FinishLoad => {
                if self.authenticate.finish_load()
                    && let Some(webview) = &self.webview
                {
                    webview.run_script(hosted::RESULT_EXTRACTION_SCRIPT);
                }
            }
            webview::Event::ScriptResult(text) => {
                if let Some(user) = self.authenticate.script_result(text.as_deref()) {
                    return self.finish_authentication(user);
                }
            }
            webview::Event::ConsoleMessage(message) => {
                debug!("Guest page logged a message: {message}");
            }
        }
        Task::none()
    }

    /// Persist the session and schedule the move to the next step, leaving
    /// the hosted page's success state on screen for a moment.
    fn finish_authentication(&mut self, user: AuthenticatedUser) -> Task<Message> {
        let session_task = Task::perform(save_session(user.clone()), Message::SessionSaved);

        let (advance_task, handle) = Task::perform(
            async move {
                tokio::time::sleep(ADVANCE_AFTER).await;
                user
            },
            |user| Message::Auth(AuthMessage::Advance(user)),
        )
        .abortable();
        self.authenticate.set_advance_timer(handle);

        Task::batch([session_task, advance_task])
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        match self.current_view {
            View::Authenticate => view::view_authenticate(&self.authenticate),
            View::AccountSettings => view::view_settings_form(&self.account_info, &self.form),
            View::Complete => view::view_complete(&self.account_info),
        }
    }

    /// Subscribe to the embedded browser view's lifecycle events.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(webview::connect).map(Message::Webview)
    }
}

/// The app's config directory.
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mailhatch")
}

/// Load application settings from file.
async fn load_settings() -> Result<AppSettings, String> {
    let settings_path = config_dir().join("settings.json");

    if !settings_path.exists() {
        return Ok(AppSettings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .map_err(|e| e.to_string())?;

    serde_json::from_str(&contents).map_err(|e| e.to_string())
}

/// Save application settings to file.
async fn save_settings(settings: AppSettings) -> Result<(), String> {
    let dir = config_dir();
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let contents = serde_json::to_string_pretty(&settings).map_err(|e| e.to_string())?;
    tokio::fs::write(dir.join("settings.json"), contents)
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

/// Record the signed-in user for later launches.
async fn save_session(user: AuthenticatedUser) -> Result<(), String> {
    let store = SessionStore::new(config_dir());
    store
        .save(&UserSession::from_user(&user))
        .await
        .map_err(|e| e.to_string())
}

/// Hand the completed account off: passwords go to the system keyring, the
/// rest of the profile to the account file the mail client reads.
async fn submit_account(account: AccountInfo) -> Result<(), String> {
    credentials::store_account_passwords(
        &account.email,
        &account.imap.password,
        &account.smtp.password,
    )
    .map_err(|e| e.to_string())?;

    let mut profile = account;
    profile.imap.password.clear();
    profile.smtp.password.clear();

    let dir = config_dir();
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let contents = serde_json::to_string_pretty(&profile).map_err(|e| e.to_string())?;
    tokio::fs::write(dir.join("account.json"), contents)
        .await
        .map_err(|e| e.to_string())?;

    info!("Account profile written for {}", profile.email);
    Ok(())
}
