//! Settings loader for config.toml

use super::types::Settings;
use nucamp_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG: &str = r#"# nucamp configuration

[behavior]
# Esc on the campsite screen quits (q and Ctrl+C always quit)
quit_on_esc = true

[ui]
# "unicode" (stars and hearts) or "ascii"
icons = "unicode"
# chrono format string used for comment dates
date_format = "%b %d, %Y"
# Show "No comments yet" for campsites without comments
show_empty_state = true
"#;

/// Default config directory: `<platform config dir>/nucamp`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nucamp")
}

/// Load settings from `config_dir/config.toml`.
///
/// A missing or unreadable file yields the defaults; the problem is logged
/// rather than surfaced.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create the config directory with a commented default config.toml.
///
/// An existing config file is left untouched. Returns the config file path.
pub fn init_config_dir(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", config_dir, e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)?;
        info!("Wrote default config to {:?}", config_path);
    }

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert!(settings.behavior.quit_on_esc);
    }

    #[test]
    fn test_loads_values_from_file() {
        let temp = tempdir().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILENAME),
            "[behavior]\nquit_on_esc = false\n[ui]\ndate_format = \"%Y-%m-%d\"\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());

        assert!(!settings.behavior.quit_on_esc);
        assert_eq!(settings.ui.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(CONFIG_FILENAME), "[ui\nicons = ").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_init_writes_parseable_default() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join("nucamp");

        let path = init_config_dir(&dir).unwrap();

        assert!(path.exists());
        let settings = load_settings(&dir);
        assert!(settings.ui.show_empty_state);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nicons = \"ascii\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).ui.icons, IconMode::Ascii);
    }
}
