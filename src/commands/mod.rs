//! CLI command implementations
//!
//! This module contains the argument definitions and the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod compute_command;
pub mod explain_command;

pub use command_traits::{Command, CommandFactory};
pub use compute_command::ComputeCommand;
pub use explain_command::ExplainCommand;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command as ClapCommand};

use crate::config::Config;
use crate::coordinate::Point;
use crate::errors::{BboxError, BboxResult};
use crate::utils::coordinate_utils::parse_radius;

/// Build the command line definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geobbox")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute latitude/longitude bounding boxes enclosing a circle")
        .arg(
            Arg::new("center")
                .help("Circle center as 'lat,lon' in degrees")
                .value_name("LAT,LON")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("radius")
                .short('r')
                .long("radius")
                .help("Circle radius in kilometers")
                .value_name("KM")
                .allow_hyphen_values(true)
                .required(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (text or csv)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("Decimal places for printed coordinates")
                .value_name("DIGITS")
                .value_parser(value_parser!(usize))
                .required(false),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject out-of-range coordinates and radii instead of computing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("explain")
                .short('x')
                .long("explain")
                .help("Show the intermediate steps of the computation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Read the radius argument
pub(crate) fn radius_arg(args: &ArgMatches) -> BboxResult<f64> {
    let radius = args.get_one::<String>("radius")
        .ok_or_else(|| BboxError::GenericError("Missing radius".to_string()))?;
    parse_radius(radius)
}

/// Read the center argument
pub(crate) fn center_arg(args: &ArgMatches) -> BboxResult<Point> {
    let center = args.get_one::<String>("center")
        .ok_or_else(|| BboxError::GenericError("Missing center coordinate".to_string()))?;
    Point::from_string(center)
}

/// Factory for creating command instances based on CLI arguments
pub struct GeoBboxCommandFactory;

impl GeoBboxCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoBboxCommandFactory
    }
}

impl Default for GeoBboxCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeoBboxCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a Config) -> BboxResult<Box<dyn Command + 'a>> {
        if args.get_flag("explain") {
            Ok(Box::new(ExplainCommand::new(args, config)?))
        } else {
            Ok(Box::new(ComputeCommand::new(args, config)?))
        }
    }
}

#[cfg(test)]
mod tests;
