//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    APP_DATA_DIR, CONFIG_DIR_ENV, CONFIG_FILE_NAME, DEFAULT_EXPORT_FILE, DEFAULT_SHARE_BASE_URL,
    MAX_PALETTE_SIZE, SAVED_PALETTES_FILE,
};
use crate::export::StyleFormat;
use crate::models::HarmonyMode;
use crate::services::codec;
use crate::services::harmony::DEFAULT_PALETTE_SIZE;

/// Palette generation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Harmony used when none is given on the command line
    pub default_mode: HarmonyMode,
    /// Number of colors in a fresh palette (1..=20)
    pub palette_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_mode: HarmonyMode::default(),
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

/// Share-link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Page URL the `p` parameter is appended to
    pub base_url: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name used when no output path is given
    pub file_name: String,
    /// Style-sheet flavour used when none is given
    pub stylesheet_format: StyleFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE.to_string(),
            stylesheet_format: StyleFormat::default(),
        }
    }
}

/// Storage locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Saved-palettes file (defaults to `saved_palettes.json` in the config directory)
    pub saved_palettes: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Generation defaults
    pub generator: GeneratorConfig,
    /// Share links
    pub share: ShareConfig,
    /// Export defaults
    pub export: ExportConfig,
    /// Storage locations
    pub storage: StorageConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `PALETA_CONFIG_DIR` wins when set. Otherwise:
    /// - Linux: `~/.config/Paleta/`
    /// - macOS: `~/Library/Application Support/Paleta/`
    /// - Windows: `%APPDATA%\Paleta\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path of the saved-palettes file, honouring the `[storage]` override.
    pub fn saved_palettes_path(&self) -> Result<PathBuf> {
        match &self.storage.saved_palettes {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join(SAVED_PALETTES_FILE)),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        tracing::info!(path = %config_path.display(), "Saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `palette_size` is between 1 and 20
    /// - `base_url` is an http(s) URL
    /// - `file_name` is not empty
    pub fn validate(&self) -> Result<()> {
        let size = self.generator.palette_size;
        if !(1..=MAX_PALETTE_SIZE).contains(&size) {
            anyhow::bail!("palette_size must be between 1 and {MAX_PALETTE_SIZE}, got {size}");
        }

        codec::parse_link(&self.share.base_url)
            .context("share base_url must be an http(s) URL")?;

        if self.export.file_name.trim().is_empty() {
            anyhow::bail!("export file_name must not be empty");
        }

        Ok(())
    }

    /// Sets a value by its dotted key (`generator.palette_size`, `share.base_url`, ...).
    ///
    /// The change is validated but not saved.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "generator.default_mode" => {
                self.generator.default_mode = value.parse().map_err(anyhow::Error::msg)?;
            }
            "generator.palette_size" => {
                self.generator.palette_size = value
                    .trim()
                    .parse()
                    .with_context(|| format!("palette_size must be a number, got '{value}'"))?;
            }
            "share.base_url" => value.trim().clone_into(&mut self.share.base_url),
            "export.file_name" => value.trim().clone_into(&mut self.export.file_name),
            "export.stylesheet_format" => {
                self.export.stylesheet_format = value.parse().map_err(anyhow::Error::msg)?;
            }
            "storage.saved_palettes" => {
                let value = value.trim();
                self.storage.saved_palettes = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            other => anyhow::bail!(
                "Unknown config key '{other}'. Known keys: {}",
                Self::KEYS.join(", ")
            ),
        }
        self.validate()
    }

    /// Keys accepted by [`Config::set_value`].
    pub const KEYS: [&'static str; 6] = [
        "generator.default_mode",
        "generator.palette_size",
        "share.base_url",
        "export.file_name",
        "export.stylesheet_format",
        "storage.saved_palettes",
    ];
}
