//! Tests for command line parsing and the commands

use crate::commands::{build_cli, CommandFactory, GeoBboxCommandFactory};
use crate::config::Config;
use crate::errors::BboxResult;

fn run(argv: &[&str], config: &Config) -> BboxResult<String> {
    let matches = build_cli().try_get_matches_from(argv.iter().copied()).unwrap();
    let factory = GeoBboxCommandFactory::new();
    factory.create_command(&matches, config)?.render()
}

#[test]
fn test_compute_text_output() {
    let config = Config::default();
    let out = run(&["geobbox", "--radius", "322.14", "51.5073482,-0.1452675"], &config).unwrap();
    assert_eq!(out, "Box 1: min=(48.613515343737376, -4.797770051087011) \
                     max=(54.40118105626262, 4.507235051087011)\n");
}

#[test]
fn test_negative_center_and_csv() {
    let config = Config::default();
    let out = run(&["geobbox", "-r", "276.494742", "-14.2436432,-178.1795257", "--format", "csv"], &config).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "-16.727437727172838,179.2578499517392,-11.759848672827163,180");
    assert_eq!(lines[2], "-16.727437727172838,-180,-11.759848672827163,-175.61690135173924");
}

#[test]
fn test_config_supplies_defaults() {
    let config = Config::from_str("[output]\nformat = \"csv\"\nprecision = 2\n").unwrap();
    let out = run(&["geobbox", "-r", "0", "0,0"], &config).unwrap();
    assert_eq!(out, "min_lat,min_lon,max_lat,max_lon\n0.00,0.00,0.00,0.00\n");
}

#[test]
fn test_flag_overrides_config() {
    let config = Config::from_str("[output]\nformat = \"csv\"\n").unwrap();
    let out = run(&["geobbox", "-r", "0", "0,0", "-f", "text", "-p", "1"], &config).unwrap();
    assert_eq!(out, "Box 1: min=(0.0, 0.0) max=(0.0, 0.0)\n");
}

#[test]
fn test_strict_rejects_out_of_range() {
    let config = Config::default();
    assert!(run(&["geobbox", "-r", "10", "95,0", "--strict"], &config).is_err());
    assert!(run(&["geobbox", "-r", "-5", "10,0", "--strict"], &config).is_err());
    // without validation the same input still computes
    assert!(run(&["geobbox", "-r", "10", "95,0"], &config).is_ok());
}

#[test]
fn test_bad_arguments() {
    let config = Config::default();
    assert!(run(&["geobbox", "-r", "ten", "0,0"], &config).is_err());
    assert!(run(&["geobbox", "-r", "10", "0;0"], &config).is_err());
    assert!(run(&["geobbox", "-r", "10", "0,0", "-f", "yaml"], &config).is_err());
    assert!(build_cli().try_get_matches_from(["geobbox", "0,0"]).is_err());
}

#[test]
fn test_explain_pole() {
    let config = Config::default();
    let out = run(&["geobbox", "-x", "-r", "85.245", "89.6349537,51.3556355"], &config).unwrap();
    assert!(out.contains("Covers the North Pole"));
    assert!(out.contains("Does not cross the antimeridian"));
    assert!(out.contains("Box 1: lat [88.86918483605231, 90], lon [-180, 180]"));
}

#[test]
fn test_explain_circle_touching_pole() {
    let config = Config::default();
    let out = run(&["geobbox", "-x", "-r", "1113.0056647983872", "80.0017,10"], &config).unwrap();
    assert!(out.contains("Covers the North Pole"));
    assert!(!out.contains("NaN"));

    let out = run(&["geobbox", "-x", "-r", "613.7210506669355", "-84.48685,10"], &config).unwrap();
    assert!(out.contains("Covers the South Pole"));
    assert!(!out.contains("NaN"));
}

#[test]
fn test_explain_split() {
    let config = Config::default();
    let out = run(&["geobbox", "--explain", "-r", "453.2345", "-18.1236158,178.427969"], &config).unwrap();
    assert!(out.contains("Tangent latitude"));
    assert!(out.contains("split into 2 boxes"));
    assert!(out.contains("Box 2: lat [-22.195090586402696, -14.052141013597307], lon [-180, -177.28762881196675]"));
}
