// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Where artists and artworks come from (static table or content API)
//! - `[viewer]` - Viewer presentation, breakpoint and asset root
//! - `[contact]` - Fallback contact number and currency symbol
//! - `[payment]` - Payment details listed in the payment panel
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NINART_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use ninart::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("ka".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Which catalog provider feeds the app.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogSourceKind {
    /// Records from a TOML table (embedded or user-supplied).
    #[default]
    Static,
    /// Records queried from the content API.
    Remote,
}

/// Forces a viewer presentation instead of choosing it from the window width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationOverride {
    #[default]
    Auto,
    Desktop,
    Mobile,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ka").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

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
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// Static table or content API.
    #[serde(default)]
    pub source: CatalogSourceKind,

    /// TOML table replacing the embedded catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_path: Option<PathBuf>,

    /// Content API project identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Content API dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    /// Content API version (e.g., "2025-02-05").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl CatalogConfig {
    #[must_use]
    pub fn project_id(&self) -> &str {
        self.project_id
            .as_deref()
            .unwrap_or(DEFAULT_REMOTE_PROJECT_ID)
    }

    #[must_use]
    pub fn dataset(&self) -> &str {
        self.dataset.as_deref().unwrap_or(DEFAULT_REMOTE_DATASET)
    }

    #[must_use]
    pub fn api_version(&self) -> &str {
        self.api_version
            .as_deref()
            .unwrap_or(DEFAULT_REMOTE_API_VERSION)
    }
}

/// Product viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Forced presentation, or `auto` to decide from the window width.
    #[serde(default)]
    pub presentation: PresentationOverride,

    /// Window widths at or below this value use the mobile viewer.
    #[serde(
        default = "default_mobile_breakpoint",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_breakpoint: Option<f32>,

    /// Directory that relative photo references are resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_root: Option<PathBuf>,

    /// Number of downloaded photos kept in memory.
    #[serde(
        default = "default_photo_cache_entries",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo_cache_entries: Option<usize>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            presentation: PresentationOverride::Auto,
            mobile_breakpoint: default_mobile_breakpoint(),
            asset_root: None,
            photo_cache_entries: default_photo_cache_entries(),
        }
    }
}

/// Contact hand-off settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    /// Number used when an artwork carries no seller contact.
    #[serde(
        default = "default_contact_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_number: Option<String>,

    /// Currency symbol placed before prices.
    #[serde(default = "default_currency", skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            default_number: default_contact_number(),
            currency: default_currency(),
        }
    }
}

/// One labelled value of the payment panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentField {
    pub label: String,
    pub value: String,
}

/// Payment panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PaymentConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<PaymentField>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Catalog source settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Product viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Contact hand-off settings.
    #[serde(default)]
    pub contact: ContactConfig,

    /// Payment panel settings.
    #[serde(default)]
    pub payment: PaymentConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_mobile_breakpoint() -> Option<f32> {
    Some(MOBILE_BREAKPOINT_PX)
}

fn default_photo_cache_entries() -> Option<usize> {
    Some(DEFAULT_PHOTO_CACHE_ENTRIES)
}

fn default_contact_number() -> Option<String> {
    Some(DEFAULT_CONTACT_NUMBER.to_string())
}

fn default_currency() -> Option<String> {
    Some(DEFAULT_CURRENCY.to_string())
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
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
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
    use crate::error::Error;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("ka".to_string()),
                theme_mode: ThemeMode::Light,
            },
            catalog: CatalogConfig {
                source: CatalogSourceKind::Remote,
                static_path: None,
                project_id: Some("abc123".to_string()),
                dataset: None,
                api_version: None,
            },
            viewer: ViewerConfig {
                presentation: PresentationOverride::Mobile,
                mobile_breakpoint: Some(600.0),
                asset_root: Some(PathBuf::from("/srv/ninart")),
                photo_cache_entries: Some(16),
            },
            contact: ContactConfig {
                default_number: Some("995500000000".to_string()),
                currency: Some("GEL ".to_string()),
            },
            payment: PaymentConfig {
                fields: vec![PaymentField {
                    label: "IBAN".to_string(),
                    value: "GE00TB0000000000000000".to_string(),
                }],
            },
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = sample_config();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.catalog.source, CatalogSourceKind::Static);
        assert_eq!(config.viewer.presentation, PresentationOverride::Auto);
        assert_eq!(config.viewer.mobile_breakpoint, Some(MOBILE_BREAKPOINT_PX));
        assert_eq!(
            config.contact.default_number.as_deref(),
            Some(DEFAULT_CONTACT_NUMBER)
        );
        assert_eq!(config.contact.currency.as_deref(), Some(DEFAULT_CURRENCY));
        assert!(config.payment.fields.is_empty());
    }

    #[test]
    fn catalog_accessors_fall_back_to_defaults() {
        let catalog = CatalogConfig::default();
        assert_eq!(catalog.project_id(), DEFAULT_REMOTE_PROJECT_ID);
        assert_eq!(catalog.dataset(), DEFAULT_REMOTE_DATASET);
        assert_eq!(catalog.api_version(), DEFAULT_REMOTE_API_VERSION);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"ka\"\n\n[[payment.fields]]\nlabel = \"Recipient\"\nvalue = \"Ninart\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("ka"));
        assert_eq!(loaded.viewer, ViewerConfig::default());
        assert_eq!(loaded.contact, ContactConfig::default());
        assert_eq!(loaded.payment.fields.len(), 1);
        assert_eq!(loaded.payment.fields[0].label, "Recipient");
    }

    #[test]
    fn kebab_case_enums_parse() {
        let config: Config =
            toml::from_str("[catalog]\nsource = \"remote\"\n\n[viewer]\npresentation = \"desktop\"\n")
                .expect("valid config");
        assert_eq!(config.catalog.source, CatalogSourceKind::Remote);
        assert_eq!(config.viewer.presentation, PresentationOverride::Desktop);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = sample_config();

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save config");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
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
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nlanguage=")
            .expect("failed to write corrupted file");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
