//! Container style functions with theme support.

use iced::widget::container;
use iced::{Background, Border};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Full-window page background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        ..Default::default()
    }
}

/// Card style - elevated surface holding a form section.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::small(),
        ..Default::default()
    }
}

/// Surface the embedded browser view paints into.
pub fn webview_surface_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_sunken)),
        ..Default::default()
    }
}

/// Cover drawn over the browser view while it loads or after a failure.
pub fn webview_cover_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background_secondary)),
        ..Default::default()
    }
}
