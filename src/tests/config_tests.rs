//! Tests for configuration loading

use std::io::Write;

use log::LevelFilter;

use crate::config::{Config, OutputFormat};
use crate::errors::BboxError;

#[test]
fn test_builtin_defaults() {
    let config = Config::default();
    assert_eq!(config.log_file.as_deref(), Some("geobbox.log"));
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.precision, None);
    assert!(!config.strict);
}

#[test]
fn test_partial_override() {
    let config = Config::from_str("[output]\nformat = \"csv\"\nprecision = 6\n").unwrap();
    assert_eq!(config.format, OutputFormat::Csv);
    assert_eq!(config.precision, Some(6));
    // untouched keys keep their defaults
    assert_eq!(config.log_level, LevelFilter::Info);
    assert!(!config.strict);
}

#[test]
fn test_empty_log_file_means_stderr() {
    let config = Config::from_str("[logging]\nfile = \"\"\nlevel = \"debug\"\n").unwrap();
    assert_eq!(config.log_file, None);
    assert_eq!(config.log_level, LevelFilter::Debug);
}

#[test]
fn test_invalid_values() {
    assert!(Config::from_str("[output]\nformat = \"xml\"\n").is_err());
    assert!(Config::from_str("[output]\nprecision = -1\n").is_err());
    assert!(Config::from_str("[validation]\nstrict = \"yes\"\n").is_err());
    assert!(Config::from_str("[logging]\nlevel = \"loud\"\n").is_err());
    assert!(Config::from_str("not toml at all [").is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[validation]\nstrict = true").unwrap();

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert!(config.strict);
}

#[test]
fn test_missing_file() {
    match Config::from_file("/nonexistent/geobbox.toml") {
        Err(BboxError::IoError(_)) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}
