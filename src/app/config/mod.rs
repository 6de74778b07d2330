// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[export]` - Raster size and label color for PNG export and copy
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path, or pass a
//!    directory to `load_with_override()`
//! 2. Set `ICON_FORGE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use icon_forge::config::{self, Config};
//!
//! let (config, _warning) = config::load();
//! println!("PNG exports are {}px", config.export.raster_size());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::design::HexColor;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning shown when the settings file exists but cannot be used.
pub const LOAD_WARNING: &str = "Settings could not be read, defaults are in use.";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportConfig {
    /// Side length of exported PNGs in pixels.
    #[serde(
        default = "default_raster_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub raster_size: Option<u32>,

    /// Label color as `#rrggbb`.
    #[serde(
        default = "default_label_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub label_color: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            raster_size: default_raster_size(),
            label_color: default_label_color(),
        }
    }
}

impl ExportConfig {
    /// Raster size clamped to the supported range.
    #[must_use]
    pub fn raster_size(&self) -> u32 {
        self.raster_size
            .unwrap_or(DEFAULT_RASTER_SIZE)
            .clamp(MIN_RASTER_SIZE, MAX_RASTER_SIZE)
    }

    /// Parsed label color, or the default when unset or malformed.
    #[must_use]
    pub fn label_color(&self) -> HexColor {
        match self.label_color.as_deref() {
            None => DEFAULT_LABEL_COLOR,
            Some(raw) => HexColor::parse(raw).unwrap_or_else(|| {
                tracing::warn!(value = raw, "invalid label_color in settings, using default");
                DEFAULT_LABEL_COLOR
            }),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

#[allow(clippy::unnecessary_wraps)]
fn default_raster_size() -> Option<u32> {
    Some(DEFAULT_RASTER_SIZE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_label_color() -> Option<String> {
    Some(DEFAULT_LABEL_COLOR.to_string())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning the caller can show to the user.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.export.raster_size(), DEFAULT_RASTER_SIZE);
        assert_eq!(config.export.label_color(), DEFAULT_LABEL_COLOR);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            export: ExportConfig {
                raster_size: Some(512),
                label_color: Some("#112233".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.export.label_color(), HexColor::from_rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn raster_size_is_clamped() {
        let mut export = ExportConfig {
            raster_size: Some(4),
            label_color: None,
        };
        assert_eq!(export.raster_size(), MIN_RASTER_SIZE);
        export.raster_size = Some(100_000);
        assert_eq!(export.raster_size(), MAX_RASTER_SIZE);
        export.raster_size = None;
        assert_eq!(export.raster_size(), DEFAULT_RASTER_SIZE);
    }

    #[test]
    fn malformed_label_color_falls_back() {
        let export = ExportConfig {
            raster_size: None,
            label_color: Some("white".to_string()),
        };
        assert_eq!(export.label_color(), DEFAULT_LABEL_COLOR);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Light\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[export]\nraster_size = \"big\"\n")
            .expect("failed to write file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_file_is_sectioned_and_found_by_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("config");
        let mut config = Config::default();
        config.export.raster_size = Some(300);
        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("save succeeds");

        let content = fs::read_to_string(base_dir.join(CONFIG_FILE)).unwrap();
        assert!(content.contains("[general]"));
        assert!(content.contains("[export]"));
        assert!(content.contains("raster_size = 300"));

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.export.raster_size(), 300);
    }
}
