//! Store configuration.
//!
//! Supports TOML config files, environment variable overrides, and defaults.

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::validation::DEFAULT_DATE_FORMAT;

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Quantity below which an item counts as low stock (default: 10)
    pub low_stock_threshold: u32,
    /// Start stores with the demonstration datasets (default: true)
    pub seed_demo_data: bool,
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
    /// `chrono` format for date input (default: "%Y-%m-%d")
    pub date_format: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            seed_demo_data: true,
            log_level: "info".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| StoreError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| StoreError::Config(format!("Invalid TOML: {}", e)))
    }

    /// Saves the configuration to a TOML file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let toml = toml::to_string_pretty(self)
            .map_err(|e| StoreError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), toml)
            .map_err(|e| StoreError::Config(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }

    /// Applies environment variable overrides.
    /// Variables are prefixed with `CLEANING_`.
    /// Example: `CLEANING_LOW_STOCK_THRESHOLD=25` overrides `low_stock_threshold`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|name| env::var(name).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CLEANING_LOW_STOCK_THRESHOLD") {
            self.low_stock_threshold = val.parse().map_err(|_| {
                StoreError::Config(format!("Invalid low_stock_threshold: {}", val))
            })?;
        }
        if let Some(val) = lookup("CLEANING_SEED_DEMO_DATA") {
            self.seed_demo_data = val
                .parse()
                .map_err(|_| StoreError::Config(format!("Invalid seed_demo_data: {}", val)))?;
        }
        if let Some(val) = lookup("CLEANING_LOG_LEVEL") {
            self.log_level = val;
        }
        if let Some(val) = lookup("CLEANING_DATE_FORMAT") {
            self.date_format = val;
        }
        Ok(())
    }

    /// Loads an optional config file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }
}
