//! Configuration management for tabrs
//!
//! This module provides configuration with support for:
//! - Environment variables
//! - YAML/TOML configuration files
//! - Configuration validation
//! - A process-wide current configuration read by `Display` impls

use std::path::Path;
use std::sync::RwLock;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};

pub mod loader;
pub mod validation;

/// Main configuration structure for tabrs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabrsConfig {
    /// Rendering of Series and DataFrames
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Display configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows printed before the output is cut off
    pub max_rows: usize,
    /// Digits after the decimal point for floats; `None` prints them in full
    pub float_precision: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (off, trace, debug, info, warn, error)
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_rows: 10,
            float_precision: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Render one cell
    pub fn format_value(&self, value: &Scalar) -> String {
        match (value, self.float_precision) {
            (Scalar::Float(f), Some(precision)) if f.is_finite() => {
                format!("{:.*}", precision, f)
            }
            _ => value.to_string(),
        }
    }
}

impl LoggingConfig {
    /// The configured level as a `log` filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level.parse().map_err(|_| {
            Error::ConfigurationError(format!("Invalid log level '{}'", self.level))
        })
    }
}

impl TabrsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        loader::load_from_env()
    }

    /// Load configuration from a file (YAML or TOML)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_from_file(path.as_ref())
    }

    /// Load configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        loader::load_from_yaml(yaml)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        loader::load_from_toml(toml)
    }

    /// Load configuration with precedence: defaults -> file -> env
    pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self> {
        loader::load_with_precedence(config_file)
    }

    /// Validate configuration and return errors if invalid
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        loader::save_to_file(self, path.as_ref())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to YAML: {}", e))
        })
    }

    /// Convert to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| {
            Error::ConfigurationError(format!("Failed to serialize config to TOML: {}", e))
        })
    }
}

lazy_static! {
    static ref CURRENT_CONFIG: RwLock<TabrsConfig> = RwLock::new(TabrsConfig::default());
}

/// Snapshot of the process-wide configuration
pub fn current() -> TabrsConfig {
    match CURRENT_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the process-wide configuration after validating it
pub fn set_current(config: TabrsConfig) -> Result<()> {
    config.validate()?;
    let mut guard = CURRENT_CONFIG
        .write()
        .map_err(|_| Error::ConfigurationError("configuration lock poisoned".to_string()))?;
    *guard = config;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_precision() {
        let display = DisplayConfig {
            float_precision: Some(2),
            ..Default::default()
        };
        assert_eq!(display.format_value(&Scalar::Float(1.0 / 3.0)), "0.33");
        assert_eq!(display.format_value(&Scalar::Int(7)), "7");
        assert_eq!(display.format_value(&Scalar::Float(f64::NAN)), "NaN");
    }
}
