//! Final onboarding step: the account is connected.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Length};

use mailhatch_core::AccountInfo;

use crate::message::Message;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Render the completion summary.
pub fn view_complete(info: &AccountInfo) -> Element<'_, Message> {
    let p = palette::current();

    let card = container(
        column![
            text("Account connected").size(24).color(p.accent_green),
            Space::new().height(8),
            text(&info.name).size(16).color(p.text_primary),
            text(&info.email).size(14).color(p.text_secondary),
            Space::new().height(16),
            text("Your mail servers are configured and your passwords are stored in the system keyring.")
                .size(14)
                .color(p.text_secondary),
        ]
        .align_x(Alignment::Center)
        .spacing(4)
        .max_width(480),
    )
    .padding(32)
    .style(widgets::card_style);

    container(card)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(widgets::page_style)
        .into()
}
