//! App settings model.

use crate::style::widgets::palette::ThemeMode;

/// Application settings that persist across sessions.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "dark" => Ok(ThemeMode::Dark),
            _ => Ok(ThemeMode::Light),
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

    #[test]
    fn theme_mode_round_trips() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"dark\""));

        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_falls_back_to_light() {
        let back: AppSettings = serde_json::from_str(r#"{"theme_mode":"sepia"}"#).unwrap();
        assert_eq!(back.theme_mode, ThemeMode::Light);
    }
}
