//! TOML configuration file loading and settings resolution
//!
//! Precedence for every setting: command line, then config file, then the
//! built-in default.

use super::args::Args;
use crate::app::error::{AppError, AppResult};
use crate::core::logging::level_for_verbosity;
use crate::pipeline::{PipelineConfig, PipelineMode};
use crate::report::ReportOptions;
use crate::scoring::{SyntheticWorkload, DEFAULT_WORKLOAD_BOUND, DEFAULT_WORKLOAD_DELAY};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted in the config file; all optional, unknown keys rejected
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub buffer_capacity: Option<usize>,
    pub result_capacity: Option<usize>,
    pub workers: Option<usize>,
    pub mode: Option<PipelineMode>,
    pub totals: Option<bool>,
    pub workload_bound: Option<usize>,
    pub workload_delay_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<String>,
    pub color: Option<bool>,
}

/// `<config_dir>/Scorepipe/scorepipe.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Scorepipe").join("scorepipe.toml"))
}

/// Parse config file text; `path` only labels errors
pub fn parse_config(text: &str, path: &Path) -> AppResult<FileConfig> {
    toml::from_str(text).map_err(|source| AppError::ConfigParse {
        message: format!(
            "Error parsing configuration file {}: {}",
            path.display(),
            source
        ),
        source,
    })
}

/// Load the config file
///
/// A path given on the command line must exist. Without one, the default
/// location is used when present; otherwise every key is unset.
pub async fn load_config_file(explicit: Option<&Path>) -> AppResult<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if tokio::fs::try_exists(&path).await.unwrap_or(false) => path,
            _ => return Ok(FileConfig::default()),
        },
    };

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| AppError::ConfigRead {
            message: format!(
                "Error reading configuration file {}: {}",
                path.display(),
                source
            ),
            source,
        })?;

    parse_config(&text, &path)
}

/// Resolved logging options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub format: String,
    /// `None` logs to stderr
    pub file: Option<String>,
    /// `None` means decide from the terminal
    pub color: Option<bool>,
}

impl LogSettings {
    /// Resolve logging options, with or without a loaded config file
    ///
    /// An explicit `--log-level` wins over `-v`/`-q`, which win over the
    /// config file.
    pub fn resolve(args: &Args, file: Option<&FileConfig>) -> Self {
        let level = args
            .log_level
            .clone()
            .or_else(|| match args.verbosity() {
                0 => None,
                v => Some(level_for_verbosity(v).to_string()),
            })
            .or_else(|| file.and_then(|f| f.log_level.clone()))
            .unwrap_or_else(|| "info".to_string());

        let format = args
            .log_format
            .clone()
            .or_else(|| file.and_then(|f| f.log_format.clone()))
            .unwrap_or_else(|| "text".to_string());

        let file_target = args
            .log_file
            .clone()
            .or_else(|| file.and_then(|f| f.log_file.clone()))
            .filter(|target| !target.eq_ignore_ascii_case("none") && target != "-");

        Self {
            level,
            format,
            file: file_target,
            color: args.color_override().or(file.and_then(|f| f.color)),
        }
    }
}

/// Everything a run needs, after merging all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub pipeline: PipelineConfig,
    pub workload: SyntheticWorkload,
    pub report: ReportOptions,
}

impl Settings {
    pub fn resolve(args: &Args, file: &FileConfig) -> AppResult<Self> {
        let input = args
            .input
            .clone()
            .or_else(|| file.input.clone())
            .ok_or_else(|| AppError::Config {
                message: "No input file given; use --input or set 'input' in the config file"
                    .to_string(),
            })?;

        let defaults = PipelineConfig::default();
        let pipeline = PipelineConfig {
            buffer_capacity: args
                .buffer_capacity
                .or(file.buffer_capacity)
                .unwrap_or(defaults.buffer_capacity),
            result_capacity: args
                .result_capacity
                .or(file.result_capacity)
                .unwrap_or(defaults.result_capacity),
            workers: args.workers.or(file.workers).unwrap_or(defaults.workers),
            mode: args.mode.or(file.mode).unwrap_or(defaults.mode),
        };
        pipeline.validate().map_err(|e| AppError::Config {
            message: e.to_string(),
        })?;

        let workload = SyntheticWorkload::new(
            args.workload_bound
                .or(file.workload_bound)
                .unwrap_or(DEFAULT_WORKLOAD_BOUND),
            args.workload_delay_ms
                .or(file.workload_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_WORKLOAD_DELAY),
        );

        let report = ReportOptions {
            include_totals: args
                .totals_override()
                .or(file.totals)
                .unwrap_or(false),
        };

        Ok(Self {
            input,
            output: args.output.clone().or_else(|| file.output.clone()),
            pipeline,
            workload,
            report,
        })
    }
}
