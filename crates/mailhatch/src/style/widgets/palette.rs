//! Color palette with light and dark theme support.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub surface_sunken: Color,
    pub background: Color,
    pub background_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_green: Color,
    pub accent_red: Color,

    // State colors
    pub selected: Color,
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    ///
    /// Warm whites with an indigo primary; tuned for a first-run screen that
    /// should feel calm rather than dense.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.33, 0.30, 0.85),
            primary_light: Color::from_rgb(0.48, 0.45, 0.95),
            primary_dark: Color::from_rgb(0.24, 0.21, 0.68),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(1.0, 1.0, 1.0),
            surface_sunken: Color::from_rgb(0.955, 0.955, 0.975),
            background: Color::from_rgb(0.975, 0.972, 0.985),
            background_secondary: Color::from_rgb(0.95, 0.948, 0.968),

            text_primary: Color::from_rgb(0.10, 0.10, 0.16),
            text_secondary: Color::from_rgb(0.40, 0.41, 0.50),
            text_muted: Color::from_rgb(0.58, 0.59, 0.66),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.13, 0.62, 0.36),
            accent_red: Color::from_rgb(0.84, 0.22, 0.27),

            selected: Color::from_rgb(0.93, 0.93, 0.99),
            hover: Color::from_rgb(0.965, 0.965, 0.98),

            border_subtle: Color::from_rgb(0.91, 0.91, 0.94),
            border_medium: Color::from_rgb(0.83, 0.83, 0.88),
        }
    }

    /// Creates the dark theme palette.
    ///
    /// Deep slate surfaces with the indigo shifted brighter for contrast.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.55, 0.52, 1.0),
            primary_light: Color::from_rgb(0.66, 0.64, 1.0),
            primary_dark: Color::from_rgb(0.42, 0.39, 0.88),

            surface: Color::from_rgb(0.125, 0.13, 0.16),
            surface_elevated: Color::from_rgb(0.155, 0.16, 0.195),
            surface_sunken: Color::from_rgb(0.095, 0.10, 0.125),
            background: Color::from_rgb(0.075, 0.08, 0.10),
            background_secondary: Color::from_rgb(0.10, 0.105, 0.13),

            text_primary: Color::from_rgb(0.92, 0.92, 0.95),
            text_secondary: Color::from_rgb(0.63, 0.64, 0.71),
            text_muted: Color::from_rgb(0.47, 0.48, 0.55),
            text_on_primary: Color::from_rgb(0.07, 0.07, 0.11),

            accent_green: Color::from_rgb(0.28, 0.82, 0.50),
            accent_red: Color::from_rgb(1.0, 0.38, 0.42),

            selected: Color::from_rgb(0.16, 0.16, 0.24),
            hover: Color::from_rgb(0.15, 0.155, 0.19),

            border_subtle: Color::from_rgb(0.20, 0.205, 0.25),
            border_medium: Color::from_rgb(0.28, 0.285, 0.34),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}
