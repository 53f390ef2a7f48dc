//! Configuration loading utilities
//!
//! This module handles loading configuration from various sources with proper
//! precedence and validation.

use std::env;
use std::fs;
use std::path::Path;

use log::debug;

use super::*;
use crate::core::error::{Error, Result};

/// Load configuration from environment variables
pub fn load_from_env() -> Result<TabrsConfig> {
    let mut config = TabrsConfig::default();
    apply_env(&mut config)?;
    Ok(config)
}

/// Overlay the `TABRS_*` variables onto `config`
fn apply_env(config: &mut TabrsConfig) -> Result<()> {
    if let Ok(max_rows) = env::var("TABRS_DISPLAY_MAX_ROWS") {
        config.display.max_rows = max_rows.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid TABRS_DISPLAY_MAX_ROWS: {}", e))
        })?;
    }

    if let Ok(precision) = env::var("TABRS_DISPLAY_FLOAT_PRECISION") {
        config.display.float_precision = Some(precision.parse().map_err(|e| {
            Error::ConfigurationError(format!("Invalid TABRS_DISPLAY_FLOAT_PRECISION: {}", e))
        })?);
    }

    if let Ok(log_level) = env::var("TABRS_LOG_LEVEL") {
        config.logging.level = log_level;
    } else if let Ok(rust_log) = env::var("RUST_LOG") {
        // Only a bare level; per-module directives are left to the logger
        if rust_log.parse::<log::LevelFilter>().is_ok() {
            config.logging.level = rust_log;
        }
    }

    Ok(())
}

/// Load configuration from a file (YAML or TOML based on extension)
pub fn load_from_file(path: &Path) -> Result<TabrsConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;
    debug!("loading configuration from {}", path.display());

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => load_from_yaml(&contents).or_else(|_| load_from_toml(&contents)),
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<TabrsConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<TabrsConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file -> environment
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<TabrsConfig> {
    let mut config = match config_file {
        Some(file_path) => load_from_file(file_path.as_ref())?,
        None => TabrsConfig::default(),
    };

    // Environment wins over the file
    apply_env(&mut config)?;

    config.validate()?;
    debug!(
        "configuration resolved: max_rows={}, log level {}",
        config.display.max_rows, config.logging.level
    );
    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &TabrsConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        }
        None => config.to_yaml()?,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::ConfigurationError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}
