//! Data models for the onboarding wizard.

mod authenticate;
mod settings;
mod settings_form;

pub use authenticate::{ADVANCE_AFTER, AuthPageState, SLOW_LOAD_AFTER};
pub use settings::AppSettings;
pub use settings_form::SettingsFormState;
