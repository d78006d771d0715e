//! Configuration for the geobbox command line tool
//!
//! Settings come from TOML. The built-in defaults live in `geobbox.toml`,
//! which is embedded at compile time; a user file only needs the keys it
//! wants to change.

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::LevelFilter;

use crate::errors::{BboxError, BboxResult};

const DEFAULT_CONFIG_TOML: &str = include_str!("../geobbox.toml");

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_CONFIG: Config = {
        let mut config = Config::fallback();
        if let Err(e) = config.apply_str(DEFAULT_CONFIG_TOML) {
            eprintln!("Warning: Failed to parse built-in configuration: {}", e);
        }
        config
    };
}

/// How computed boxes are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human readable line per box
    Text,
    /// `min_lat,min_lon,max_lat,max_lon` per line with a header
    Csv,
}

impl FromStr for OutputFormat {
    type Err = BboxError;

    fn from_str(s: &str) -> BboxResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BboxError::ConfigError(format!("Unknown output format: {}", other))),
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log file path; `None` logs to stderr through env_logger
    pub log_file: Option<String>,
    /// Maximum level that is logged
    pub log_level: LevelFilter,
    /// Output format for computed boxes
    pub format: OutputFormat,
    /// Decimal places for printed coordinates, `None` for shortest round-trip
    pub precision: Option<usize>,
    /// Validate inputs before computing
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl Config {
    // Used only if the embedded file fails to parse
    fn fallback() -> Self {
        Config {
            log_file: Some("geobbox.log".to_string()),
            log_level: LevelFilter::Info,
            format: OutputFormat::Text,
            precision: None,
            strict: false,
        }
    }

    /// Parse a configuration from a TOML string, on top of the defaults
    pub fn from_str(content: &str) -> BboxResult<Self> {
        let mut config = Config::default();
        config.apply_str(content)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file, on top of the defaults
    pub fn from_file(path: &str) -> BboxResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Override the settings present in a TOML string
    pub fn apply_str(&mut self, content: &str) -> BboxResult<()> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| BboxError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(logging) = toml_value.get("logging") {
            if let Some(file) = logging.get("file") {
                let file = expect_str(file, "logging.file")?;
                self.log_file = if file.is_empty() { None } else { Some(file.to_string()) };
            }
            if let Some(level) = logging.get("level") {
                let level = expect_str(level, "logging.level")?;
                self.log_level = LevelFilter::from_str(level)
                    .map_err(|_| BboxError::ConfigError(format!("Unknown log level: {}", level)))?;
            }
        }

        if let Some(output) = toml_value.get("output") {
            if let Some(format) = output.get("format") {
                self.format = expect_str(format, "output.format")?.parse()?;
            }
            if let Some(precision) = output.get("precision") {
                let precision = precision.as_integer()
                    .filter(|p| (0..=17).contains(p))
                    .ok_or_else(|| BboxError::ConfigError(
                        "output.precision must be an integer between 0 and 17".to_string()))?;
                self.precision = Some(precision as usize);
            }
        }

        if let Some(strict) = toml_value.get("validation").and_then(|v| v.get("strict")) {
            self.strict = strict.as_bool()
                .ok_or_else(|| BboxError::ConfigError("validation.strict must be a boolean".to_string()))?;
        }

        Ok(())
    }
}

fn expect_str<'a>(value: &'a toml::Value, key: &str) -> BboxResult<&'a str> {
    value.as_str()
        .ok_or_else(|| BboxError::ConfigError(format!("{} must be a string", key)))
}
