//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::config::Config;
use crate::errors::BboxResult;

/// Represents an executable command in the application
pub trait Command {
    /// Produce the command's output without printing it
    fn render(&self) -> BboxResult<String>;

    /// Execute the command, writing its output to stdout
    fn execute(&self) -> BboxResult<()> {
        print!("{}", self.render()?);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Effective configuration
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, config: &'a Config) -> BboxResult<Box<dyn Command + 'a>>;
}
