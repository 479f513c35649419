//! Command-line arguments
//!
//! Every option is optional here; defaults and config-file values are
//! merged in by [`super::config::Settings::resolve`].

use super::validation::{parse_mode, validate_positive_int};
use crate::pipeline::PipelineMode;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scorepipe")]
#[command(about = "Score a batch of items on a worker pool and report the accepted results")]
#[command(version)]
pub struct Args {
    /// JSON file with the items to score
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report file (default: stdout)
    #[arg(short = 'O', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Slots in the bounded buffer
    #[arg(short = 'b', long = "buffer-capacity", value_name = "SLOTS", value_parser = validate_positive_int)]
    pub buffer_capacity: Option<usize>,

    /// Maximum number of reported results
    #[arg(short = 'r', long = "result-capacity", value_name = "COUNT", value_parser = validate_positive_int)]
    pub result_capacity: Option<usize>,

    /// Worker threads
    #[arg(short = 'w', long = "workers", value_name = "COUNT", value_parser = validate_positive_int)]
    pub workers: Option<usize>,

    /// Execution mode
    #[arg(short = 'm', long = "mode", value_name = "MODE", value_parser = parse_mode)]
    pub mode: Option<PipelineMode>,

    /// Append weight and price sums to the report
    #[arg(long = "totals", conflicts_with = "no_totals")]
    pub totals: bool,

    /// Leave the sums out (overrides config file)
    #[arg(long = "no-totals", conflicts_with = "totals")]
    pub no_totals: bool,

    /// Loop bound of the synthetic workload
    #[arg(long = "workload-bound", value_name = "N")]
    pub workload_bound: Option<usize>,

    /// Delay added after scoring each item, in milliseconds
    #[arg(long = "workload-delay-ms", value_name = "MS")]
    pub workload_delay_ms: Option<u64>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,

    /// Force colored log output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,
}

impl Args {
    /// Net `-v`/`-q` count, saturating at the `i8` range
    pub fn verbosity(&self) -> i8 {
        let net = i16::from(self.verbose) - i16::from(self.quiet);
        net.clamp(i16::from(i8::MIN), i16::from(i8::MAX)) as i8
    }

    /// `Some` only when one of `--totals` / `--no-totals` was given
    pub fn totals_override(&self) -> Option<bool> {
        match (self.totals, self.no_totals) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// `Some` only when one of `--color` / `--no-color` was given
    pub fn color_override(&self) -> Option<bool> {
        match (self.color, self.no_color) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
