//! Bounding box structures for the result of a circle computation

use std::fmt;
use std::slice;

use super::point::Point;

/// An axis-aligned latitude/longitude rectangle
///
/// `min` is the south-west corner and `max` the north-east corner. Boxes
/// returned by the calculator are in degrees and never cross the
/// antimeridian, so `min.longitude <= max.longitude` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    /// South-west corner
    pub min: Point,
    /// North-east corner
    pub max: Point,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min: Point, max: Point) -> Self {
        BoundingBox { min, max }
    }

    /// Create a bounding box from its four edges
    pub fn from_edges(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        BoundingBox::new(Point::new(min_lat, min_lon), Point::new(max_lat, max_lon))
    }

    /// Latitude extent of the box
    pub fn lat_span(&self) -> f64 {
        self.max.latitude - self.min.latitude
    }

    /// Longitude extent of the box
    pub fn lon_span(&self) -> f64 {
        self.max.longitude - self.min.longitude
    }

    /// Whether both corners are ordered south-west to north-east
    pub fn is_ordered(&self) -> bool {
        self.min.latitude <= self.max.latitude && self.min.longitude <= self.max.longitude
    }

    /// Normalize the longitude of both corners
    pub fn normalized(self) -> Self {
        BoundingBox::new(self.min.normalized(), self.max.normalized())
    }

    /// Convert both corners from radians to degrees
    pub fn to_degrees(self) -> Self {
        BoundingBox::new(self.min.to_degrees(), self.max.to_degrees())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*},{:.*}", p, self.min, p, self.max),
            None => write!(f, "{},{}", self.min, self.max),
        }
    }
}

/// One or two bounding boxes covering a circle
///
/// A circle that straddles the antimeridian is covered by two boxes, one on
/// each side of the +/-180 degree line. Held inline, no allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundingBoxes {
    /// The circle fits in a single box
    Single(BoundingBox),
    /// The circle wraps the antimeridian: western piece first, eastern piece second
    Split([BoundingBox; 2]),
}

impl BoundingBoxes {
    /// Number of boxes, 1 or 2
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Always false, there is at least one box
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the result was split at the antimeridian
    pub fn is_split(&self) -> bool {
        matches!(self, BoundingBoxes::Split(_))
    }

    /// The boxes as a slice
    pub fn as_slice(&self) -> &[BoundingBox] {
        match self {
            BoundingBoxes::Single(bbox) => slice::from_ref(bbox),
            BoundingBoxes::Split(boxes) => boxes,
        }
    }

    /// Iterate over the boxes in order
    pub fn iter(&self) -> slice::Iter<'_, BoundingBox> {
        self.as_slice().iter()
    }

    /// The first box
    pub fn first(&self) -> &BoundingBox {
        &self.as_slice()[0]
    }

    /// Apply a transformation to every box, keeping the shape of the result
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(BoundingBox) -> BoundingBox,
    {
        match self {
            BoundingBoxes::Single(bbox) => BoundingBoxes::Single(f(bbox)),
            BoundingBoxes::Split([west, east]) => BoundingBoxes::Split([f(west), f(east)]),
        }
    }

    /// Copy the boxes into a vector
    pub fn to_vec(&self) -> Vec<BoundingBox> {
        self.as_slice().to_vec()
    }
}

impl<'a> IntoIterator for &'a BoundingBoxes {
    type Item = &'a BoundingBox;
    type IntoIter = slice::Iter<'a, BoundingBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::Index<usize> for BoundingBoxes {
    type Output = BoundingBox;

    fn index(&self, index: usize) -> &BoundingBox {
        &self.as_slice()[index]
    }
}
