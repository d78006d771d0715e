//! Point structure for representing geographic coordinates

use std::f64::consts::PI;
use std::fmt;

use super::trig;
use crate::errors::{BboxError, BboxResult};

/// Valid latitude range in degrees
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
/// Valid longitude range in degrees
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A point on the Earth's surface
///
/// Public APIs take and return points in degrees. The calculator converts to
/// radians internally with [`Point::to_radians`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Latitude, positive north of the equator
    pub latitude: f64,
    /// Longitude, positive east of Greenwich
    pub longitude: f64,
}

impl Point {
    /// Create a new point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Point { latitude, longitude }
    }

    /// Parse a point from a string (format: "lat,lon")
    pub fn from_string(point_str: &str) -> BboxResult<Self> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(BboxError::InvalidCoordinate(format!(
                "'{}' must be in format 'lat,lon'", point_str
            )));
        }

        let latitude = parts[0].trim().parse::<f64>()
            .map_err(|_| BboxError::InvalidCoordinate(format!("invalid latitude '{}'", parts[0].trim())))?;
        let longitude = parts[1].trim().parse::<f64>()
            .map_err(|_| BboxError::InvalidCoordinate(format!("invalid longitude '{}'", parts[1].trim())))?;

        Ok(Point::new(latitude, longitude))
    }

    /// Convert both coordinates from degrees to radians
    pub fn to_radians(self) -> Self {
        Point::new(trig::to_radians(self.latitude), trig::to_radians(self.longitude))
    }

    /// Convert both coordinates from radians to degrees
    pub fn to_degrees(self) -> Self {
        Point::new(trig::to_degrees(self.latitude), trig::to_degrees(self.longitude))
    }

    /// Bring a longitude in radians back onto [-Pi, Pi]
    ///
    /// Longitudes already inside the range, including both edges, are left
    /// untouched, so normalizing twice gives the same result as once.
    pub fn normalized(self) -> Self {
        Point::new(self.latitude, normalize_meridian(self.longitude))
    }

    /// Check that a point in degrees lies inside the valid latitude and longitude ranges
    pub fn validate(&self) -> BboxResult<()> {
        check_range("latitude", self.latitude, LATITUDE_RANGE)?;
        check_range("longitude", self.longitude, LONGITUDE_RANGE)
    }

    /// Whether a point in degrees lies inside the valid ranges
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.latitude, p, self.longitude),
            None => write!(f, "{},{}", self.latitude, self.longitude),
        }
    }
}

fn check_range(axis: &'static str, value: f64, (min, max): (f64, f64)) -> BboxResult<()> {
    // NaN fails both comparisons
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(BboxError::OutOfRange { axis, value, min, max })
    }
}

/// Reduce a longitude in radians to [-Pi, Pi)
///
/// Values already within [-Pi, Pi] are returned unchanged.
pub fn normalize_meridian(lon: f64) -> f64 {
    if (-PI..=PI).contains(&lon) {
        return lon;
    }
    (lon + 3.0 * PI).rem_euclid(2.0 * PI) - PI
}
