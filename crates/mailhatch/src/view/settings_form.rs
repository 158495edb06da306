//! IMAP/SMTP settings form view.
//!
//! Two columns, one per protocol, bound to the shared account record.

use iced::widget::{Space, button, checkbox, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use mailhatch_core::{AccountInfo, FieldName, MailProtocol, validate};

use crate::message::{FormMessage, Message};
use crate::model::SettingsFormState;
use crate::style::widgets;
use crate::style::widgets::palette;

/// Form title.
const TITLE: &str = "Setup your account";

/// Form subtitle.
const SUBTITLE: &str = "Complete the IMAP and SMTP settings below to connect your account.";

/// Render the settings form view.
pub fn view_settings_form<'a>(
    info: &'a AccountInfo,
    form: &'a SettingsFormState,
) -> Element<'a, Message> {
    let p = palette::current();

    let header = row![
        Space::new().width(Length::Fill),
        button(text("Toggle theme").size(12))
            .on_press(Message::ToggleTheme)
            .padding([6, 12])
            .style(widgets::ghost_button_style),
    ]
    .padding(12);

    let title = text(TITLE).size(28).color(p.text_primary);
    let subtitle = text(SUBTITLE).size(14).color(p.text_secondary);

    let columns = row![
        server_column(info, form, MailProtocol::Imap),
        server_column(info, form, MailProtocol::Smtp),
    ]
    .spacing(20);

    let mut content = column![title, subtitle, Space::new().height(12), columns].spacing(12);

    if let Some(message) = form.error_message() {
        content = content.push(text(message).size(14).color(p.accent_red));
    }
    content = content.push(Space::new().height(8));
    content = content.push(action_row(info, form));

    let content = content.padding(32).max_width(820);

    container(column![
        header,
        scrollable(container(content).center_x(Length::Fill)).height(Length::Fill),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .style(widgets::page_style)
    .into()
}

/// One protocol's column: server, port + SSL, username, password.
fn server_column<'a>(
    info: &'a AccountInfo,
    form: &'a SettingsFormState,
    protocol: MailProtocol,
) -> Element<'a, Message> {
    let server = info.server(protocol);
    let heading = match protocol {
        MailProtocol::Imap => "Incoming Mail (IMAP)",
        MailProtocol::Smtp => "Outgoing Mail (SMTP)",
    };
    let p = palette::current();

    let mut ssl = checkbox(info.ssl_required)
        .label("Require SSL")
        .size(16)
        .spacing(8);
    if !form.submitting {
        ssl = ssl.on_toggle(|checked| Message::Form(FormMessage::SslRequiredToggled(checked)));
    }

    let port_placeholder = match protocol {
        MailProtocol::Imap => "993",
        MailProtocol::Smtp => "465",
    };

    let port_row = row![
        column![labeled_input(
            "Port",
            port_placeholder,
            &server.port,
            form.is_flagged(FieldName::port(protocol)),
            form.submitting,
            false,
            port_message(protocol),
        )]
        .width(Length::FillPortion(1)),
        container(ssl).width(Length::FillPortion(2)),
    ]
    .spacing(16)
    .align_y(Alignment::End);

    container(
        column![
            text(heading).size(16).color(p.text_primary),
            Space::new().height(8),
            labeled_input(
                "Server",
                "mail.example.com",
                &server.host,
                form.is_flagged(FieldName::host(protocol)),
                form.submitting,
                false,
                host_message(protocol),
            ),
            port_row,
            labeled_input(
                "Username",
                "user@example.com",
                &server.username,
                form.is_flagged(FieldName::username(protocol)),
                form.submitting,
                false,
                username_message(protocol),
            ),
            labeled_input(
                "Password",
                "",
                &server.password,
                form.is_flagged(FieldName::password(protocol)),
                form.submitting,
                true,
                password_message(protocol),
            ),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(widgets::card_style)
    .into()
}

/// A labeled text input wired to the shared account record.
fn labeled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    flagged: bool,
    submitting: bool,
    secure: bool,
    to_message: fn(String) -> FormMessage,
) -> Element<'a, Message> {
    let p = palette::current();

    let mut input = text_input(placeholder, value).padding(10).secure(secure);
    if !submitting {
        input = input
            .on_input(move |value| Message::Form(to_message(value)))
            .on_submit(Message::Form(FormMessage::Connect));
    }
    // Only highlight fields the user actually filled in.
    let input = if flagged && !value.is_empty() {
        input.style(widgets::form_input_error_style)
    } else {
        input.style(widgets::form_input_style)
    };

    column![text(label).size(12).color(p.text_secondary), input]
        .spacing(4)
        .into()
}

/// The Connect button, enabled once every required field is filled in.
fn action_row<'a>(info: &AccountInfo, form: &SettingsFormState) -> Element<'a, Message> {
    let populated = validate(info).populated;
    let label = if form.submitting {
        "Connecting..."
    } else {
        "Connect Account"
    };

    row![
        Space::new().width(Length::Fill),
        button(text(label).size(14))
            .on_press_maybe(
                (populated && !form.submitting).then(|| Message::Form(FormMessage::Connect))
            )
            .padding([10, 24])
            .style(widgets::primary_button_style),
    ]
    .into()
}

fn host_message(protocol: MailProtocol) -> fn(String) -> FormMessage {
    match protocol {
        MailProtocol::Imap => FormMessage::ImapHostChanged,
        MailProtocol::Smtp => FormMessage::SmtpHostChanged,
    }
}

fn port_message(protocol: MailProtocol) -> fn(String) -> FormMessage {
    match protocol {
        MailProtocol::Imap => FormMessage::ImapPortChanged,
        MailProtocol::Smtp => FormMessage::SmtpPortChanged,
    }
}

fn username_message(protocol: MailProtocol) -> fn(String) -> FormMessage {
    match protocol {
        MailProtocol::Imap => FormMessage::ImapUsernameChanged,
        MailProtocol::Smtp => FormMessage::SmtpUsernameChanged,
    }
}

fn password_message(protocol: MailProtocol) -> fn(String) -> FormMessage {
    match protocol {
        MailProtocol::Imap => FormMessage::ImapPasswordChanged,
        MailProtocol::Smtp => FormMessage::SmtpPasswordChanged,
    }
}
