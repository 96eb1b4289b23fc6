//! Configuration types

use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Esc on the main screen quits (q and Ctrl+C always do)
    #[serde(default = "default_true")]
    pub quit_on_esc: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { quit_on_esc: true }
    }
}

/// Glyph set used for the rating indicator and favorite marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Stars and hearts (★ ♥)
    #[default]
    Unicode,
    /// Plain ASCII for terminals without those glyphs
    Ascii,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::Ascii => write!(f, "ascii"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub icons: IconMode,

    /// chrono format string for comment dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Show a placeholder line when a campsite has no comments
    #[serde(default = "default_true")]
    pub show_empty_state: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            icons: IconMode::default(),
            date_format: default_date_format(),
            show_empty_state: true,
        }
    }
}

fn default_date_format() -> String {
    "%b %d, %Y".to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.behavior.quit_on_esc);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert_eq!(settings.ui.date_format, "%b %d, %Y");
        assert!(settings.ui.show_empty_state);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [ui]
            icons = "ascii"
            "#,
        )
        .unwrap();

        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert_eq!(settings.ui.date_format, "%b %d, %Y");
        assert!(settings.behavior.quit_on_esc);
    }

    #[test]
    fn test_icon_mode_display() {
        assert_eq!(IconMode::Unicode.to_string(), "unicode");
        assert_eq!(IconMode::Ascii.to_string(), "ascii");
    }
}
