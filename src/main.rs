use std::process;
use log::{error, LevelFilter};

use geobbox::commands::{build_cli, CommandFactory, GeoBboxCommandFactory};
use geobbox::config::Config;
use geobbox::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    if matches.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }

    match &config.log_file {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, config.log_level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::init_stderr_logger(config.log_level),
    }

    let factory = GeoBboxCommandFactory::new();

    match factory.create_command(&matches, &config) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
