//! Tests for the point module

use std::f64::consts::PI;

use crate::coordinate::{normalize_meridian, Point};
use crate::errors::BboxError;

#[test]
fn test_parse_point() {
    let point = Point::from_string(" 40.7491902, -74.0057076 ").unwrap();
    assert_eq!(point, Point::new(40.7491902, -74.0057076));
}

#[test]
fn test_parse_point_rejects_bad_input() {
    assert!(Point::from_string("40.7").is_err());
    assert!(Point::from_string("40.7,-74,3").is_err());
    assert!(Point::from_string("north,-74").is_err());
    assert!(Point::from_string("40.7,west").is_err());
}

#[test]
fn test_radian_round_trip_of_exact_angles() {
    let point = Point::new(90.0, -180.0).to_radians();
    assert_eq!(point.latitude, std::f64::consts::FRAC_PI_2);
    assert_eq!(point.longitude, -PI);
    assert_eq!(point.to_degrees(), Point::new(90.0, -180.0));
}

#[test]
fn test_normalize_keeps_in_range_values() {
    for &lon in &[-PI, -1.0, 0.0, 2.5, PI] {
        assert_eq!(normalize_meridian(lon), lon);
    }
}

#[test]
fn test_normalize_wraps_out_of_range_values() {
    let wrapped = normalize_meridian(PI + 0.5);
    assert!((wrapped - (-PI + 0.5)).abs() < 1e-12);

    let wrapped = normalize_meridian(-PI - 0.25);
    assert!((wrapped - (PI - 0.25)).abs() < 1e-12);

    let wrapped = normalize_meridian(7.0 * PI);
    assert!((wrapped.abs() - PI).abs() < 1e-12);
}

#[test]
fn test_normalize_is_idempotent() {
    for &lon in &[-10.0, -4.0, 3.5, 6.0, 12.0] {
        let once = normalize_meridian(lon);
        assert_eq!(normalize_meridian(once), once);
    }
}

#[test]
fn test_validate() {
    assert!(Point::new(90.0, 180.0).is_valid());
    assert!(Point::new(-90.0, -180.0).is_valid());
    assert!(!Point::new(90.5, 0.0).is_valid());
    assert!(!Point::new(0.0, -180.1).is_valid());
    assert!(!Point::new(f64::NAN, 0.0).is_valid());

    match Point::new(0.0, 200.0).validate() {
        Err(BboxError::OutOfRange { axis, .. }) => assert_eq!(axis, "longitude"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_display() {
    let point = Point::new(1.5, -2.25);
    assert_eq!(point.to_string(), "1.5,-2.25");
    assert_eq!(format!("{:.3}", point), "1.500,-2.250");
}
