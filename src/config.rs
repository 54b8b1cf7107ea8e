//! Configuration management
//!
//! This module handles loading, parsing and validation of the TOML config
//! file. Every section defaults field-by-field, so a partial file (or none at
//! all) always yields a usable configuration.

use anyhow::Result;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::accessibility::Politeness;
use crate::constants::MONTH_TITLE_FORMAT;
use crate::error::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// First day of the week ("sunday", "monday", ...)
    pub week_start: String,
    /// Live-region announcement urgency for month changes
    pub announce: Politeness,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            week_start: "sunday".to_string(),
            announce: Politeness::Polite,
            mouse_enabled: true,
        }
    }
}

impl UiConfig {
    /// Parse the configured week start into a chrono weekday
    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        self.week_start
            .parse()
            .map_err(|_| ConfigError::InvalidWeekStart(self.week_start.clone()))
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Format for the month/year title
    pub month_title_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            month_title_format: MONTH_TITLE_FORMAT.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log file path
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: PathBuf::from("dategrid.log"),
        }
    }
}

impl Config {
    /// Platform config file location (`<config dir>/dategrid/config.toml`)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dategrid").join("config.toml"))
    }

    /// Load the config from the platform location, falling back to defaults
    /// when no file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}
