//! Coordinate handling for circle bounding boxes
//!
//! This module provides the point and box types and the calculator that
//! derives latitude/longitude boxes from a center and radius.

mod bbox;
mod point;
pub mod calculator;
pub mod trig;

// Re-export key types
pub use self::bbox::{BoundingBox, BoundingBoxes};
pub use self::point::{normalize_meridian, Point, LATITUDE_RANGE, LONGITUDE_RANGE};
pub use self::calculator::{compute, compute_checked, pole_coverage, PoleCoverage, EQUATORIAL_RADIUS_METERS, MAX_RADIUS_KM};

#[cfg(test)]
mod tests;
