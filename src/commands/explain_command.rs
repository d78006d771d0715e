//! Step-by-step explanation command
//!
//! Prints the intermediate quantities of a bounding box computation:
//! angular radius, tangent latitude, longitude half-span, pole coverage
//! and antimeridian handling.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{center_arg, radius_arg};
use crate::config::Config;
use crate::coordinate::calculator::{angular_radius, delta_longitude, pole_coverage, tangent_latitude};
use crate::coordinate::trig::to_degrees;
use crate::coordinate::{compute, Point};
use crate::errors::BboxResult;

/// Command for explaining how a circle's boxes are derived
pub struct ExplainCommand<'a> {
    /// Circle radius in kilometers
    radius_km: f64,
    /// Circle center in degrees
    center: Point,
    /// Configuration used for number formatting
    config: &'a Config,
}

impl<'a> ExplainCommand<'a> {
    /// Create a new explain command
    pub fn new(args: &ArgMatches, config: &'a Config) -> BboxResult<Self> {
        Ok(ExplainCommand {
            radius_km: radius_arg(args)?,
            center: center_arg(args)?,
            config,
        })
    }

    fn number(&self, value: f64) -> String {
        match self.config.precision {
            Some(p) => format!("{:.*}", p, value),
            None => value.to_string(),
        }
    }
}

impl<'a> Command for ExplainCommand<'a> {
    fn render(&self) -> BboxResult<String> {
        info!("Explaining bounding box for {} km around {}", self.radius_km, self.center);

        let center = self.center.to_radians();
        let ar = angular_radius(self.radius_km);
        let lat_t = tangent_latitude(center, ar);
        let delta_lon = delta_longitude(center, ar, lat_t);
        let boxes = compute(self.radius_km, self.center);

        let mut out = String::new();
        out.push_str(&format!("Center: ({}, {})\n", self.number(self.center.latitude), self.number(self.center.longitude)));
        out.push_str(&format!("Radius: {} km\n", self.number(self.radius_km)));
        out.push_str(&format!("Angular radius: {} rad ({} deg)\n", self.number(ar), self.number(to_degrees(ar))));

        let poles = pole_coverage(center, ar);
        if poles.any() {
            let pole = if poles.north { "North" } else { "South" };
            out.push_str(&format!("Covers the {} Pole: longitude spans the full [-180, 180] range\n", pole));
        } else {
            out.push_str(&format!("Tangent latitude: {} deg\n", self.number(to_degrees(lat_t))));
            out.push_str(&format!("Longitude half-span: {} deg\n", self.number(to_degrees(delta_lon))));
        }

        if boxes.is_split() {
            out.push_str("Crosses the antimeridian: split into 2 boxes\n");
        } else {
            out.push_str("Does not cross the antimeridian: 1 box\n");
        }

        for (i, bbox) in boxes.iter().enumerate() {
            out.push_str(&format!("Box {}: lat [{}, {}], lon [{}, {}]\n",
                                  i + 1,
                                  self.number(bbox.min.latitude), self.number(bbox.max.latitude),
                                  self.number(bbox.min.longitude), self.number(bbox.max.longitude)));
        }

        Ok(out)
    }
}
