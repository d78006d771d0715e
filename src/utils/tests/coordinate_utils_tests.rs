//! Tests for coordinate parsing and formatting

use crate::config::OutputFormat;
use crate::coordinate::{BoundingBox, BoundingBoxes};
use crate::utils::coordinate_utils::*;

fn split_boxes() -> BoundingBoxes {
    BoundingBoxes::Split([
        BoundingBox::from_edges(-1.5, 179.25, 1.5, 180.0),
        BoundingBox::from_edges(-1.5, -180.0, 1.5, -179.75),
    ])
}

#[test]
fn test_parse_radius() {
    assert_eq!(parse_radius(" 322.14 ").unwrap(), 322.14);
    assert!(parse_radius("ten").is_err());
}

#[test]
fn test_format_text() {
    let text = format_boxes(&split_boxes(), OutputFormat::Text, None);
    assert_eq!(text, "Box 1: min=(-1.5, 179.25) max=(1.5, 180)\n\
                      Box 2: min=(-1.5, -180) max=(1.5, -179.75)\n");
}

#[test]
fn test_format_csv_with_precision() {
    let csv = format_boxes(&split_boxes(), OutputFormat::Csv, Some(2));
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines, vec![
        CSV_HEADER,
        "-1.50,179.25,1.50,180.00",
        "-1.50,-180.00,1.50,-179.75",
    ]);
}
