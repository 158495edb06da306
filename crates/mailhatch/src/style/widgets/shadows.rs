//! Shadow presets and rounded corner radii.

use iced::{Color, Shadow, Vector};

/// Soft shadow tint used by the neutral presets.
const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.05);

/// Rounded corner radii.
pub mod radius {
    pub const SMALL: f32 = 4.0;
    pub const MEDIUM: f32 = 6.0;
    pub const LARGE: f32 = 8.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

pub const fn subtle() -> Shadow {
    Shadow {
        color: SHADOW,
        offset: Vector::new(0.0, 1.0),
        blur_radius: 3.0,
    }
}

pub const fn small() -> Shadow {
    Shadow {
        color: SHADOW,
        offset: Vector::new(0.0, 2.0),
        blur_radius: 6.0,
    }
}

/// Colored aura used on the primary button.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 12.0,
    }
}

/// Stronger aura for hover states.
pub const fn glow_strong(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.5),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 20.0,
    }
}
