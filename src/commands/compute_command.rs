//! Bounding box computation command
//!
//! Computes the box(es) around a circle and prints them in the
//! configured output format.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{center_arg, radius_arg};
use crate::config::{Config, OutputFormat};
use crate::coordinate::{compute, compute_checked, BoundingBoxes, Point};
use crate::errors::BboxResult;
use crate::utils::coordinate_utils::format_boxes;

/// Command for computing the bounding boxes of a circle
pub struct ComputeCommand {
    /// Circle radius in kilometers
    radius_km: f64,
    /// Circle center in degrees
    center: Point,
    /// Output format
    format: OutputFormat,
    /// Decimal places for printed coordinates
    precision: Option<usize>,
    /// Whether inputs are validated first
    strict: bool,
}

impl ComputeCommand {
    /// Create a new compute command
    ///
    /// Command line flags take precedence over the configuration.
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Effective configuration
    ///
    /// # Returns
    /// A new ComputeCommand instance or an error
    pub fn new(args: &ArgMatches, config: &Config) -> BboxResult<Self> {
        let radius_km = radius_arg(args)?;
        let center = center_arg(args)?;

        let format = match args.get_one::<String>("format") {
            Some(f) => f.parse()?,
            None => config.format,
        };
        let precision = args.get_one::<usize>("precision").copied().or(config.precision);
        let strict = args.get_flag("strict") || config.strict;

        debug!("Compute command: radius={} km, center={}, format={:?}, strict={}",
               radius_km, center, format, strict);

        Ok(ComputeCommand {
            radius_km,
            center,
            format,
            precision,
            strict,
        })
    }

    /// Run the computation, validating first in strict mode
    pub fn boxes(&self) -> BboxResult<BoundingBoxes> {
        if self.strict {
            compute_checked(self.radius_km, self.center)
        } else {
            Ok(compute(self.radius_km, self.center))
        }
    }
}

impl Command for ComputeCommand {
    fn render(&self) -> BboxResult<String> {
        let boxes = self.boxes()?;
        info!("Computed {} bounding box(es) for a {} km circle around {}",
              boxes.len(), self.radius_km, self.center);

        Ok(format_boxes(&boxes, self.format, self.precision))
    }
}
