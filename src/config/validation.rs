//! Configuration validation utilities

use super::*;
use crate::core::error::{Error, Result};

/// Validate the entire configuration
pub fn validate_config(config: &TabrsConfig) -> Result<()> {
    validate_display_config(&config.display)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate display configuration
pub fn validate_display_config(config: &DisplayConfig) -> Result<()> {
    if config.max_rows == 0 {
        return Err(Error::ConfigurationError(
            "max_rows must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
pub fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_levels = ["off", "trace", "debug", "info", "warn", "error"];

    if !valid_levels.contains(&config.level.to_lowercase().as_str()) {
        return Err(Error::ConfigurationError(format!(
            "Invalid log level '{}'. Valid levels: {}",
            config.level,
            valid_levels.join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(validate_config(&TabrsConfig::default()).is_ok());

        let mut config = TabrsConfig::default();
        config.display.max_rows = 0;
        assert!(validate_config(&config).is_err());

        let mut config = TabrsConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigurationError(_))
        ));
    }
}
