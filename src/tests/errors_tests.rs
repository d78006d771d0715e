//! Tests for the error types

use std::io;

use crate::errors::BboxError;

#[test]
fn test_out_of_range_message() {
    let err = BboxError::OutOfRange { axis: "latitude", value: 91.0, min: -90.0, max: 90.0 };
    assert_eq!(err.to_string(), "latitude 91 is outside [-90, 90]");
}

#[test]
fn test_io_error_has_source() {
    let err: BboxError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("I/O error"));
}
