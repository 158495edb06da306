//! Authenticate page state.
//!
//! The page drives the embedded browser view through the hosted sign-in
//! flow. Its state machine reacts to the view's load lifecycle: a failed
//! load surfaces an error with a retry affordance, a finished load triggers
//! result extraction, and an extracted profile starts the success path.

use std::time::Duration;

use iced::task;
use tracing::warn;

use mailhatch_auth::{AuthenticatedUser, net_errors};

/// How long a load may take before the cover admits it is slow.
pub const SLOW_LOAD_AFTER: Duration = Duration::from_millis(2500);

/// Pause between a successful sign-in and moving to the next step, so the
/// hosted page's success state has a moment on screen.
pub const ADVANCE_AFTER: Duration = Duration::from_secs(1);

/// State owned by the authenticate page.
///
/// Mutated only by the page's own event handlers; recreated on every visit
/// and torn down on leave.
#[derive(Debug, Default)]
pub struct AuthPageState {
    /// The sign-in page finished loading.
    pub ready: bool,
    /// Message shown on the cover when a load failed.
    pub error: Option<String>,
    /// The slow-load warning fired while still waiting.
    pub slow: bool,
    dismissed: bool,
    slow_timer: Option<task::Handle>,
    advance_timer: Option<task::Handle>,
}

impl AuthPageState {
    /// Fresh state for a newly mounted page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A load began: clear any stale error.
    pub fn start_loading(&mut self) {
        self.error = None;
    }

    /// A load failed.
    ///
    /// User-initiated aborts (navigation moved on) are ignored entirely.
    /// Otherwise the view's own description wins; without one, a message is
    /// synthesized from the failed URL and the error code.
    pub fn fail_load(&mut self, error_code: i32, error_description: Option<&str>, url: &str) {
        if net_errors::is_user_abort(error_code) {
            return;
        }

        let error = error_description
            .filter(|description| !description.is_empty())
            .map_or_else(
                || net_errors::load_failure_message(url, error_code),
                ToString::to_string,
            );
        self.ready = false;
        self.error = Some(error);
    }

    /// A load finished. Returns whether the result extraction script should
    /// run; a finish event racing behind a fail event is ignored.
    #[must_use]
    pub const fn finish_load(&self) -> bool {
        self.error.is_none()
    }

    /// The extraction script came back. Marks the page ready and, when the
    /// result element had text, parses it into the signed-in profile.
    pub fn script_result(&mut self, text: Option<&str>) -> Option<AuthenticatedUser> {
        self.ready = true;
        let text = text?;
        match AuthenticatedUser::parse(text) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring unparseable sign-in result: {e}");
                None
            }
        }
    }

    /// The slow-load warning timer fired. A no-op once the page was left.
    pub const fn slow_elapsed(&mut self) {
        if !self.dismissed {
            self.slow = true;
        }
    }

    /// Keep the slow-warning timer handle so teardown can abort it.
    pub fn set_slow_timer(&mut self, handle: task::Handle) {
        self.slow_timer = Some(handle);
    }

    /// Keep the success-delay timer handle so teardown can abort it.
    pub fn set_advance_timer(&mut self, handle: task::Handle) {
        self.advance_timer = Some(handle);
    }

    /// Tear the page down: cancel both timers and drop late firings.
    pub fn dismiss(&mut self) {
        self.dismissed = true;
        if let Some(handle) = self.slow_timer.take() {
            handle.abort();
        }
        if let Some(handle) = self.advance_timer.take() {
            handle.abort();
        }
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

    const PAGE_URL: &str = "https://id.mailhatch.app/onboarding";

    #[test]
    fn start_loading_clears_error() {
        let mut state = AuthPageState::new();
        state.fail_load(-102, None, PAGE_URL);
        assert!(state.error.is_some());

        state.start_loading();
        assert!(state.error.is_none());
    }

    #[test]
    fn user_abort_leaves_state_untouched() {
        let mut state = AuthPageState::new();
        state.fail_load(-102, Some("The connection was refused"), PAGE_URL);
        let before = state.error.clone();

        state.fail_load(net_errors::ERR_ABORTED, Some("Aborted"), PAGE_URL);
        assert_eq!(state.error, before);
    }

    #[test]
    fn fail_load_prefers_view_description() {
        let mut state = AuthPageState::new();
        state.fail_load(-106, Some("It broke"), PAGE_URL);
        assert_eq!(state.error.as_deref(), Some("It broke"));
    }

    #[test]
    fn fail_load_synthesizes_message_without_description() {
        let mut state = AuthPageState::new();
        state.fail_load(-106, None, PAGE_URL);
        assert_eq!(
            state.error.as_deref(),
            Some("Could not reach https://id.mailhatch.app/onboarding. The internet connection is offline.")
        );
    }

    #[test]
    fn fail_load_treats_empty_description_as_missing() {
        let mut state = AuthPageState::new();
        state.fail_load(-999, Some(""), PAGE_URL);
        assert_eq!(
            state.error.as_deref(),
            Some("Could not reach https://id.mailhatch.app/onboarding. Error -999.")
        );
    }

    #[test]
    fn fail_load_clears_ready() {
        let mut state = AuthPageState::new();
        state.ready = true;
        state.fail_load(-101, None, PAGE_URL);
        assert!(!state.ready);
    }

    #[test]
    fn finish_after_failure_is_ignored_and_ready_stays_false() {
        let mut state = AuthPageState::new();
        state.fail_load(-102, None, PAGE_URL);

        // Extraction is suppressed, so ready never flips.
        assert!(!state.finish_load());
        assert!(!state.ready);
    }

    #[test]
    fn finish_without_error_runs_extraction() {
        let state = AuthPageState::new();
        assert!(state.finish_load());
    }

    #[test]
    fn script_result_with_profile_starts_success_path() {
        let mut state = AuthPageState::new();
        let user = state
            .script_result(Some(r#"{"email":"a@b.com","firstname":"A","lastname":"B"}"#))
            .unwrap();
        assert!(state.ready);
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.display_name(), "A B");
    }

    #[test]
    fn script_result_without_text_only_marks_ready() {
        let mut state = AuthPageState::new();
        assert!(state.script_result(None).is_none());
        assert!(state.ready);
    }

    #[test]
    fn script_result_with_garbage_is_dropped() {
        let mut state = AuthPageState::new();
        assert!(state.script_result(Some("<html>")).is_none());
        assert!(state.ready);
    }

    #[test]
    fn slow_elapsed_sets_flag_while_mounted() {
        let mut state = AuthPageState::new();
        state.slow_elapsed();
        assert!(state.slow);
    }

    #[test]
    fn dismiss_prevents_late_slow_warning() {
        let mut state = AuthPageState::new();
        state.dismiss();
        state.slow_elapsed();
        assert!(!state.slow);
    }
}
