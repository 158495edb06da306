//! Widget styles shared by the onboarding screens.

#![allow(dead_code)] // Utility functions for themeable components
#![allow(unused_imports)] // Re-exports for external theming use

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export palette for external access
pub use palette::*;

// Re-export radius constants
pub use shadows::radius;

// Re-export container styles
pub use containers::{card_style, page_style, webview_cover_style, webview_surface_style};

// Re-export button styles
pub use buttons::{ghost_button_style, primary_button_style, secondary_button_style};

// Re-export input styles
pub use inputs::{form_input_error_style, form_input_style};
