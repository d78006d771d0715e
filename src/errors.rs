//! Error types for bounding box computation and the CLI around it

use std::fmt;
use std::io;

/// Errors raised by validated computation, parsing and configuration
#[derive(Debug)]
pub enum BboxError {
    /// I/O error
    IoError(io::Error),
    /// Coordinate string could not be parsed
    InvalidCoordinate(String),
    /// Radius is negative, non-finite or larger than half the Earth's circumference
    InvalidRadius(f64),
    /// A latitude or longitude lies outside its valid range
    OutOfRange {
        /// Name of the offending axis ("latitude" or "longitude")
        axis: &'static str,
        /// Value supplied by the caller
        value: f64,
        /// Smallest accepted value
        min: f64,
        /// Largest accepted value
        max: f64,
    },
    /// Configuration file could not be parsed or holds an invalid value
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for BboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BboxError::IoError(e) => write!(f, "I/O error: {}", e),
            BboxError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
            BboxError::InvalidRadius(r) => write!(f, "Invalid radius: {} km", r),
            BboxError::OutOfRange { axis, value, min, max } => {
                write!(f, "{} {} is outside [{}, {}]", axis, value, min, max)
            },
            BboxError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            BboxError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BboxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BboxError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for BboxError {
    fn from(error: io::Error) -> Self {
        BboxError::IoError(error)
    }
}

impl From<String> for BboxError {
    fn from(msg: String) -> Self {
        BboxError::GenericError(msg)
    }
}

/// Result type for geobbox operations
pub type BboxResult<T> = Result<T, BboxError>;
