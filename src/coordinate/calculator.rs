//! Bounding boxes enclosing a circle on a spherical Earth
//!
//! Given a center point and a radius, computes the latitude/longitude
//! rectangle(s) that fully contain every point within that great-circle
//! distance. Intended as a coarse pre-filter ahead of an exact distance check.
//!
//! The computation follows J. P. Matuschek, "Finding Points Within a Distance
//! of a Latitude/Longitude Using Bounding Coordinates", using the tangent
//! latitude form for the longitude half-span. The Earth is a sphere with the
//! WGS 84 equatorial radius, which is what common web-mapping platforms use.
//!
//! All intermediate steps work in radians on plain values; each step returns
//! a new box.

use std::f64::consts::{FRAC_PI_2, PI};

use log::debug;

use super::bbox::{BoundingBox, BoundingBoxes};
use super::point::Point;
use super::trig;
use crate::errors::{BboxError, BboxResult};

/// Equatorial radius of the Earth in meters
pub const EQUATORIAL_RADIUS_METERS: f64 = 6_378_137.0;

/// Half the equatorial circumference in kilometers. Radii at or above this
/// cover the whole sphere and have no meaningful bounding box.
pub const MAX_RADIUS_KM: f64 = PI * EQUATORIAL_RADIUS_METERS / 1000.0;

/// Angle subtended at the Earth's center by `radius_km` along the surface
pub fn angular_radius(radius_km: f64) -> f64 {
    1000.0 * radius_km / EQUATORIAL_RADIUS_METERS
}

/// Sine of the tangent latitude; at or beyond +/-1 the circle reaches a pole
fn tangent_ratio(center: Point, angular_radius: f64) -> f64 {
    trig::sin(center.latitude) / trig::cos(angular_radius)
}

/// Latitude at which the bounding meridians touch the circle
///
/// `center` is in radians. NaN when the circle covers a pole.
pub fn tangent_latitude(center: Point, angular_radius: f64) -> f64 {
    trig::asin(tangent_ratio(center, angular_radius))
}

/// Poles reached by a circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoleCoverage {
    /// The circle reaches the North Pole
    pub north: bool,
    /// The circle reaches the South Pole
    pub south: bool,
}

impl PoleCoverage {
    /// Whether either pole is reached
    pub fn any(&self) -> bool {
        self.north || self.south
    }
}

/// Decide which poles a circle reaches
///
/// A circle whose edge only touches a pole after rounding can keep its
/// latitude band inside +/-Pi/2 while the tangent ratio already lands on or
/// past +/-1, leaving no tangent latitude. Either condition counts as
/// coverage. `center` is in radians.
pub fn pole_coverage(center: Point, angular_radius: f64) -> PoleCoverage {
    let ratio = tangent_ratio(center, angular_radius);
    PoleCoverage {
        north: center.latitude + angular_radius > FRAC_PI_2 || ratio >= 1.0,
        south: center.latitude - angular_radius < -FRAC_PI_2 || ratio <= -1.0,
    }
}

/// Half of the longitude span of the circle, in radians
///
/// For tiny radii rounding can push the cosine a hair above 1; it is capped
/// there so the span collapses to 0 instead of NaN. NaN arguments pass through.
pub fn delta_longitude(center: Point, angular_radius: f64, lat_t: f64) -> f64 {
    let numerator = trig::cos(angular_radius) - trig::sin(lat_t) * trig::sin(center.latitude);
    let cos_delta = numerator / (trig::cos(lat_t) * trig::cos(center.latitude));
    trig::acos(if cos_delta > 1.0 { 1.0 } else { cos_delta })
}

/// Latitude band of the circle, leaving longitudes untouched
fn with_angular_radius(bbox: BoundingBox, angular_radius: f64, center: Point) -> BoundingBox {
    BoundingBox::from_edges(
        center.latitude - angular_radius,
        bbox.min.longitude,
        center.latitude + angular_radius,
        bbox.max.longitude,
    )
}

/// Longitude band of the circle, leaving latitudes untouched
fn with_delta_lon(bbox: BoundingBox, delta_lon: f64, center: Point) -> BoundingBox {
    BoundingBox::from_edges(
        bbox.min.latitude,
        center.longitude - delta_lon,
        bbox.max.latitude,
        center.longitude + delta_lon,
    )
}

/// Widen a box that reaches a pole to the full longitude range
///
/// That side's latitude is clamped to the pole itself.
pub(crate) fn with_pole_clamp(bbox: BoundingBox, poles: PoleCoverage) -> BoundingBox {
    let mut clamped = bbox;

    if poles.north {
        debug!("Circle covers the North Pole, using full longitude range");
        clamped.min.longitude = -PI;
        clamped.max.latitude = FRAC_PI_2;
        clamped.max.longitude = PI;
    }

    if poles.south {
        debug!("Circle covers the South Pole, using full longitude range");
        clamped.min.latitude = -FRAC_PI_2;
        clamped.min.longitude = -PI;
        clamped.max.longitude = PI;
    }

    clamped
}

/// Split a box whose longitudes run past +/-Pi into one box per side
///
/// Must run before normalization, which would hide the overshoot.
pub(crate) fn split_at_antimeridian(bbox: BoundingBox) -> BoundingBoxes {
    let BoundingBox { min, max } = bbox;

    if min.longitude < -PI {
        debug!("Box wraps the antimeridian on the west side, splitting");
        return BoundingBoxes::Split([
            BoundingBox::from_edges(min.latitude, min.longitude + 2.0 * PI, max.latitude, PI),
            BoundingBox::from_edges(min.latitude, -PI, max.latitude, max.longitude),
        ]);
    }

    if max.longitude > PI {
        debug!("Box wraps the antimeridian on the east side, splitting");
        return BoundingBoxes::Split([
            BoundingBox::from_edges(min.latitude, min.longitude, max.latitude, PI),
            BoundingBox::from_edges(min.latitude, -PI, max.latitude, max.longitude - 2.0 * PI),
        ]);
    }

    BoundingBoxes::Single(bbox)
}

/// Compute the bounding box(es) of a circle
///
/// # Arguments
/// * `radius_km` - Circle radius in kilometers, 0 gives a point-sized box
/// * `center` - Circle center in degrees, latitude in [-90, 90] and longitude in [-180, 180]
///
/// # Returns
/// One box, or two when the circle straddles the antimeridian. Every box is
/// in degrees with `min <= max` on both axes.
///
/// Inputs are not validated. Radii approaching half the Earth's
/// circumference, or coordinates outside the documented ranges, may yield NaN
/// corners; use [`compute_checked`] to reject them instead.
pub fn compute(radius_km: f64, center: Point) -> BoundingBoxes {
    let center = center.to_radians();
    let angular_radius = angular_radius(radius_km);

    let lat_t = tangent_latitude(center, angular_radius);
    let delta_lon = delta_longitude(center, angular_radius, lat_t);
    debug!("angular radius {} rad, tangent latitude {} rad, delta lon {} rad",
           angular_radius, lat_t, delta_lon);

    let bbox = with_angular_radius(BoundingBox::default(), angular_radius, center);
    let bbox = with_delta_lon(bbox, delta_lon, center);
    let bbox = with_pole_clamp(bbox, pole_coverage(center, angular_radius));

    split_at_antimeridian(bbox).map(|b| b.normalized().to_degrees())
}

/// Validate the inputs, then [`compute`] the bounding box(es)
///
/// Rejects a negative or non-finite radius, a radius of half the equatorial
/// circumference or more, and a center outside the valid coordinate ranges.
pub fn compute_checked(radius_km: f64, center: Point) -> BboxResult<BoundingBoxes> {
    if !radius_km.is_finite() || radius_km < 0.0 || radius_km >= MAX_RADIUS_KM {
        return Err(BboxError::InvalidRadius(radius_km));
    }
    center.validate()?;

    Ok(compute(radius_km, center))
}
