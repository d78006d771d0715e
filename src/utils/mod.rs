//! Utility modules for common functionality
//!
//! This module provides logging and the parsing and formatting helpers used by the CLI.

pub mod logger;
pub mod coordinate_utils;

#[cfg(test)]
mod tests;
