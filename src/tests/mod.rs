mod errors_tests;
mod config_tests;
