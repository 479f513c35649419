//! Command-line arguments, config file loading and settings resolution

pub mod args;
pub mod config;
pub mod validation;

pub use args::Args;
pub use config::{default_config_path, load_config_file, parse_config, FileConfig, LogSettings, Settings};

#[cfg(test)]
mod tests;
