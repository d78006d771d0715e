//! Coordinate utility functions
//!
//! Parsing of command line values and rendering of computed boxes.

use crate::config::OutputFormat;
use crate::coordinate::{BoundingBox, BoundingBoxes, Point};
use crate::errors::{BboxError, BboxResult};

/// Header line for CSV output
pub const CSV_HEADER: &str = "min_lat,min_lon,max_lat,max_lon";

/// Parse a radius in kilometers
pub fn parse_radius(radius_str: &str) -> BboxResult<f64> {
    radius_str.trim().parse::<f64>()
        .map_err(|_| BboxError::GenericError(format!("Invalid radius '{}'", radius_str.trim())))
}

fn format_point(point: &Point, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("({:.*}, {:.*})", p, point.latitude, p, point.longitude),
        None => format!("({}, {})", point.latitude, point.longitude),
    }
}

fn format_csv_row(bbox: &BoundingBox, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, bbox),
        None => bbox.to_string(),
    }
}

/// Render computed boxes for display
///
/// # Arguments
/// * `boxes` - Result of a bounding box computation
/// * `format` - Text or CSV
/// * `precision` - Decimal places, or `None` for the shortest round-trip form
pub fn format_boxes(boxes: &BoundingBoxes, format: OutputFormat, precision: Option<usize>) -> String {
    let mut out = String::new();

    match format {
        OutputFormat::Text => {
            for (i, bbox) in boxes.iter().enumerate() {
                out.push_str(&format!("Box {}: min={} max={}\n",
                                      i + 1,
                                      format_point(&bbox.min, precision),
                                      format_point(&bbox.max, precision)));
            }
        },
        OutputFormat::Csv => {
            out.push_str(CSV_HEADER);
            out.push('\n');
            for bbox in boxes {
                out.push_str(&format_csv_row(bbox, precision));
                out.push('\n');
            }
        },
    }

    out
}
