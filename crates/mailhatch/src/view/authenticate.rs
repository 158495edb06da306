//! Authenticate page view.
//!
//! The embedded browser view paints the hosted sign-in flow into the page
//! surface; this renders the cover shown while it loads or after a failure.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::{AuthMessage, Message};
use crate::model::AuthPageState;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Shown once a load takes noticeably long.
const SLOW_MESSAGE: &str = "Still trying to reach id.mailhatch.app...";

/// Render the authenticate page.
pub fn view_authenticate(state: &AuthPageState) -> Element<'_, Message> {
    if state.ready && state.error.is_none() {
        // The platform web view renders the hosted flow into this surface.
        return container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(widgets::webview_surface_style)
            .into();
    }

    let p = palette::current();
    let message = state
        .error
        .as_deref()
        .unwrap_or(if state.slow { SLOW_MESSAGE } else { "" });
    let message_color = if state.error.is_some() {
        p.accent_red
    } else {
        p.text_secondary
    };

    let cover = column![
        Space::new().height(Length::Fill),
        text("Signing in to MailHatch").size(20).color(p.text_primary),
        Space::new().height(8),
        text(message).size(14).color(message_color),
        Space::new().height(16),
        button(text("Try Again").size(14))
            .on_press(Message::Auth(AuthMessage::TryAgain))
            .padding([10, 24])
            .style(widgets::secondary_button_style),
        Space::new().height(Length::Fill),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(cover)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(widgets::webview_cover_style)
        .into()
}
