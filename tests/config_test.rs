//! Configuration system tests
//!
//! These change the process-wide configuration, so they live in their own
//! test binary.

use std::sync::Mutex;

use tabrs::config::validation::*;
use tabrs::config::{self, DisplayConfig, LoggingConfig};
use tabrs::{Series, TabrsConfig};
use tempfile::tempdir;

lazy_static::lazy_static! {
    static ref CURRENT_LOCK: Mutex<()> = Mutex::new(());
}

#[test]
fn test_default_config() {
    let config = TabrsConfig::default();

    assert_eq!(config.display.max_rows, 10);
    assert_eq!(config.display.float_precision, None);
    assert_eq!(config.logging.level, "info");
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_config_serialization() {
    let config = TabrsConfig::default();

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("display:"));
    assert!(yaml.contains("max_rows: 10"));

    let toml = config.to_toml().unwrap();
    assert!(toml.contains("[display]"));
    assert!(toml.contains("[logging]"));
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = TabrsConfig::from_yaml("display:\n  float_precision: 2\n").unwrap();
    assert_eq!(config.display.max_rows, 10);
    assert_eq!(config.display.float_precision, Some(2));

    let config = TabrsConfig::from_toml("[logging]\nlevel = \"debug\"\n").unwrap();
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_config_validation() {
    let mut config = TabrsConfig::default();
    assert!(config.validate().is_ok());

    config.display.max_rows = 0;
    assert!(validate_config(&config).is_err());

    config.display.max_rows = 5;
    config.logging.level = "loud".to_string();
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_level_filter() {
    let logging = LoggingConfig {
        level: "warn".to_string(),
    };
    assert_eq!(logging.level_filter().unwrap(), log::LevelFilter::Warn);

    let logging = LoggingConfig {
        level: "chatty".to_string(),
    };
    assert!(logging.level_filter().is_err());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempdir().unwrap();
    let mut config = TabrsConfig::default();
    config.display.float_precision = Some(3);

    for name in ["saved.yaml", "saved.toml"] {
        let path = dir.path().join("nested").join(name);
        config.save_to_file(&path).unwrap();
        assert_eq!(TabrsConfig::from_file(&path).unwrap(), config);
    }
}

#[test]
fn test_format_value() {
    let display = DisplayConfig {
        max_rows: 10,
        float_precision: Some(2),
    };
    assert_eq!(display.format_value(&tabrs::Scalar::Float(1.0 / 3.0)), "0.33");
    assert_eq!(display.format_value(&tabrs::Scalar::Float(f64::NAN)), "NaN");
    assert_eq!(display.format_value(&tabrs::Scalar::Int(7)), "7");
}

#[test]
fn test_current_config_drives_display() {
    let _guard = CURRENT_LOCK.lock().unwrap();
    let original = config::current();

    let mut limited = original.clone();
    limited.display.max_rows = 2;
    limited.display.float_precision = Some(1);
    config::set_current(limited.clone()).unwrap();
    assert_eq!(config::current(), limited);

    let series = Series::new(vec![1.24, 2.0, 3.0], Some("s".to_string())).unwrap();
    let text = series.to_string();
    assert_eq!(text, "0\t1.2\n1\t2.0\nName: s, dtype: float");

    config::set_current(original.clone()).unwrap();
    assert_eq!(config::current(), original);
}

#[test]
fn test_set_current_rejects_invalid() {
    let _guard = CURRENT_LOCK.lock().unwrap();
    let before = config::current();

    let mut invalid = TabrsConfig::default();
    invalid.display.max_rows = 0;
    assert!(config::set_current(invalid).is_err());
    assert_eq!(config::current(), before);
}
