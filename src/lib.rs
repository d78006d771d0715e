//! Latitude/longitude bounding boxes enclosing a circle on a spherical Earth
//!
//! ```
//! use geobbox::Point;
//!
//! let boxes = geobbox::compute(322.14, Point::new(51.5073482, -0.1452675));
//! assert_eq!(boxes.len(), 1);
//! assert!(boxes[0].min.latitude < 51.5073482);
//! ```

pub mod errors;
pub mod config;
pub mod utils;
pub mod coordinate;
pub mod commands;

pub use errors::{BboxError, BboxResult};
pub use config::{Config, OutputFormat};
pub use coordinate::{compute, compute_checked, BoundingBox, BoundingBoxes, Point};

#[cfg(test)]
mod tests;
