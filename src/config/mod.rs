// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[api]` - Cat API endpoints, credential and page size
//! - `[browser]` - Initial breed, selectable breeds and grid layout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `CAT_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! The API key can additionally be provided through `CAT_LENS_API_KEY`,
//! which wins over the file so credentials need not be written to disk.
//!
//! # Examples
//!
//! ```no_run
//! use cat_lens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("{} breeds configured", config.browser.breed_options().len());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::catalog::{BreedId, BreedOption};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Cat API access settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Image search endpoint (without query string).
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Base endpoint for single-image lookups.
    #[serde(default = "default_image_endpoint")]
    pub image_endpoint: String,

    /// API key appended to search requests.
    #[serde(default)]
    pub api_key: String,

    /// Number of images per search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<u32>,

    /// Per-request timeout. Requests never time out when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            search_endpoint: default_search_endpoint(),
            image_endpoint: default_image_endpoint(),
            api_key: String::new(),
            page_limit: Some(DEFAULT_PAGE_LIMIT),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Page size clamped to what the API accepts.
    #[must_use]
    pub fn page_limit(&self) -> u32 {
        self.page_limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .clamp(MIN_PAGE_LIMIT, MAX_PAGE_LIMIT)
    }

    /// Request timeout, if one was configured. Zero means "no timeout".
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Replaces the API key with `key` unless it is absent or blank.
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = key;
        }
    }
}

/// One selectable breed in the `[browser]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreedEntry {
    /// Identifier sent as `breed_ids`.
    pub id: String,
    /// Human-readable label shown in the selector.
    pub label: String,
}

/// Browser screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserConfig {
    /// Breed fetched at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_breed: Option<String>,

    /// Cards per grid row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u16>,

    /// Breeds offered by the selector, in display order.
    #[serde(default = "default_breeds")]
    pub breeds: Vec<BreedEntry>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_breed: Some(DEFAULT_BREED.to_string()),
            columns: Some(DEFAULT_GRID_COLUMNS),
            breeds: default_breeds(),
        }
    }
}

impl BrowserConfig {
    /// Selector options. An empty list falls back to the built-in breeds.
    #[must_use]
    pub fn breed_options(&self) -> Vec<BreedOption> {
        let entries = if self.breeds.is_empty() {
            default_breeds()
        } else {
            self.breeds.clone()
        };

        entries
            .into_iter()
            .filter(|entry| !entry.id.trim().is_empty())
            .map(|entry| BreedOption::new(entry.id, entry.label))
            .collect()
    }

    /// Breed fetched at startup.
    #[must_use]
    pub fn initial_breed(&self) -> BreedId {
        self.default_breed
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map_or_else(|| BreedId::new(DEFAULT_BREED), BreedId::new)
    }

    /// Cards per grid row, clamped to the supported range.
    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
            .unwrap_or(DEFAULT_GRID_COLUMNS)
            .clamp(MIN_GRID_COLUMNS, MAX_GRID_COLUMNS)
    }
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

    /// Cat API access settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Browser screen settings.
    #[serde(default)]
    pub browser: BrowserConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_image_endpoint() -> String {
    DEFAULT_IMAGE_ENDPOINT.to_string()
}

fn default_breeds() -> Vec<BreedEntry> {
    DEFAULT_BREEDS
        .iter()
        .map(|(id, label)| BreedEntry {
            id: (*id).to_string(),
            label: (*label).to_string(),
        })
        .collect()
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
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let (mut config, warning) = match get_config_path_with_override(base_dir) {
        Some(path) if path.exists() => match load_from_path(&path) {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                (
                    Config::default(),
                    Some("notification-config-load-error".to_string()),
                )
            }
        },
        _ => (Config::default(), None),
    };

    config
        .api
        .override_api_key(std::env::var(ENV_API_KEY).ok());

    (config, warning)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
