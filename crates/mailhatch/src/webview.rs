//! Channel seam for the embedded browser view hosting the sign-in flow.
//!
//! The wizard never talks to a renderer directly. It sends [`Command`]s
//! through a [`WebviewHandle`] and receives [`Event`]s over an iced
//! subscription, so the platform shell can plug in whatever web view the
//! target OS provides behind the same protocol.
//!
//! The worker in this build has no renderer attached: navigations are
//! reported back as failed loads, which routes the authenticate page onto
//! its error cover and retry affordance.

use iced::futures::{SinkExt, Stream};
use tokio::sync::mpsc;

use mailhatch_auth::net_errors;

/// Commands the wizard sends to the browser view.
#[derive(Debug, Clone)]
pub enum Command {
    /// Load a URL.
    Navigate(String),
    /// Reload the current page.
    Reload,
    /// Evaluate a script inside the loaded page.
    RunScript(String),
}

/// Lifecycle events the browser view reports back.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Some events are only emitted by platform renderers
pub enum Event {
    /// The view is up; commands can now be sent through the handle.
    Connected(WebviewHandle),
    /// A load began.
    StartLoading,
    /// A load failed.
    FailLoad {
        /// Networking-stack error code (see [`mailhatch_auth::net_errors`]).
        error_code: i32,
        /// Description from the view, when it provides one.
        error_description: Option<String>,
        /// The URL that failed to load.
        validated_url: String,
    },
    /// A load finished.
    FinishLoad,
    /// Result of a [`Command::RunScript`] evaluation.
    ScriptResult(Option<String>),
    /// `console.log` output from the guest page.
    ConsoleMessage(String),
}

/// Command sender for the browser view.
#[derive(Debug, Clone)]
pub struct WebviewHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl WebviewHandle {
    /// Point the view at a URL.
    pub fn navigate(&self, url: impl Into<String>) {
        let _ = self.commands.send(Command::Navigate(url.into()));
    }

    /// Reload the current page.
    pub fn reload(&self) {
        let _ = self.commands.send(Command::Reload);
    }

    /// Evaluate a script inside the loaded page. The result arrives as
    /// [`Event::ScriptResult`].
    pub fn run_script(&self, script: impl Into<String>) {
        let _ = self.commands.send(Command::RunScript(script.into()));
    }
}

/// Subscription worker bridging the browser view into the message loop.
///
/// Emits [`Event::Connected`] first, then forwards view events until the
/// application drops the subscription.
pub fn connect() -> impl Stream<Item = Event> {
    iced::stream::channel(64, |mut output: iced::futures::channel::mpsc::Sender<Event>| async move {
        let (sender, mut commands) = mpsc::unbounded_channel();
        let _ = output
            .send(Event::Connected(WebviewHandle { commands: sender }))
            .await;

        // No platform renderer in this build: report every navigation as a
        // failed load so the page surfaces its retry cover.
        let mut current_url = String::new();
        while let Some(command) = commands.recv().await {
            match command {
                Command::Navigate(url) => {
                    current_url = url;
                    let _ = output.send(Event::StartLoading).await;
                    let _ = output
                        .send(Event::FailLoad {
                            error_code: net_errors::ERR_FAILED,
                            error_description: None,
                            validated_url: current_url.clone(),
                        })
                        .await;
                }
                Command::Reload => {
                    let _ = output.send(Event::StartLoading).await;
                    let _ = output
                        .send(Event::FailLoad {
                            error_code: net_errors::ERR_FAILED,
                            error_description: None,
                            validated_url: current_url.clone(),
                        })
                        .await;
                }
                Command::RunScript(_) => {
                    let _ = output.send(Event::ScriptResult(None)).await;
                }
            }
        }
    })
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

    #[tokio::test]
    async fn handle_forwards_commands_in_order() {
        let (sender, mut commands) = mpsc::unbounded_channel();
        let handle = WebviewHandle { commands: sender };

        handle.navigate("https://id.mailhatch.app/onboarding");
        handle.reload();
        handle.run_script("1 + 1;");

        assert!(matches!(
            commands.recv().await,
            Some(Command::Navigate(url)) if url == "https://id.mailhatch.app/onboarding"
        ));
        assert!(matches!(commands.recv().await, Some(Command::Reload)));
        assert!(matches!(
            commands.recv().await,
            Some(Command::RunScript(script)) if script == "1 + 1;"
        ));
    }

    #[test]
    fn handle_survives_a_closed_receiver() {
        let (sender, commands) = mpsc::unbounded_channel();
        let handle = WebviewHandle { commands: sender };
        drop(commands);

        // Sends to a torn-down view are dropped, not panicked on.
        handle.reload();
    }
}
