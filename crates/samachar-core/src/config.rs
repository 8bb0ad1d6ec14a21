// Rust guideline compliant 2026-10-14

//! Configuration management for Samachar.

use crate::category::Category;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "samachar.toml";

/// Largest page size the remote API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
    /// Plain text format.
    Plain,
}

/// Configuration for list views and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Items requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Distance in pixels below the viewport at which the scroll
    /// sentinel fires.
    #[serde(default = "default_trigger_margin")]
    pub trigger_margin_px: f64,

    /// Category shown when none is selected.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Default page size, matching the news feed.
fn default_page_size() -> u32 {
    10
}

/// Default sentinel margin in pixels.
fn default_trigger_margin() -> f64 {
    200.0
}

fn default_category() -> String {
    Category::Home.key().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            trigger_margin_px: default_trigger_margin(),
            default_category: default_category(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<dir>/samachar.toml`
    /// 3. Environment variables with `SAMACHAR_` prefix
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory holding `samachar.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from TOML text without validating it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the text is not valid TOML for `Config`.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))
    }

    /// Applies overrides looked up by variable name.
    ///
    /// Supported variables:
    /// - `SAMACHAR_PAGE_SIZE` - Items per page
    /// - `SAMACHAR_TRIGGER_MARGIN` - Sentinel margin in pixels
    /// - `SAMACHAR_DEFAULT_CATEGORY` - Category key
    /// - `SAMACHAR_OUTPUT_FORMAT` - Output format (json/table/plain)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if a variable cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SAMACHAR_PAGE_SIZE") {
            self.page_size = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("SAMACHAR_PAGE_SIZE must be a positive number".to_string())
            })?;
        }

        if let Some(val) = lookup("SAMACHAR_TRIGGER_MARGIN") {
            self.trigger_margin_px = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("SAMACHAR_TRIGGER_MARGIN must be a number".to_string())
            })?;
        }

        if let Some(val) = lookup("SAMACHAR_DEFAULT_CATEGORY") {
            self.default_category = val.trim().to_lowercase();
        }

        if let Some(val) = lookup("SAMACHAR_OUTPUT_FORMAT") {
            self.output_format = match val.as_str() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                "plain" => OutputFormat::Plain,
                _ => {
                    return Err(Error::InvalidConfig(
                        "SAMACHAR_OUTPUT_FORMAT must be json, table, or plain".to_string(),
                    ))
                }
            };
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - page_size is zero or above the API maximum
    /// - trigger_margin_px is negative or not finite
    /// - default_category is not a known category
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::InvalidConfig(format!(
                "page_size must be 1-{}, got {}",
                MAX_PAGE_SIZE, self.page_size
            )));
        }

        if !self.trigger_margin_px.is_finite() || self.trigger_margin_px < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "trigger_margin_px must be a non-negative number, got {}",
                self.trigger_margin_px
            )));
        }

        self.default_category
            .parse::<Category>()
            .map_err(|_| {
                Error::InvalidConfig(format!(
                    "default_category is not a known category: {}",
                    self.default_category
                ))
            })?;

        Ok(())
    }

    /// Returns the parsed default category.
    #[must_use]
    pub fn category(&self) -> Category {
        self.default_category.parse().unwrap_or_default()
    }

    /// Saves the configuration to `<dir>/samachar.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
