//! Application startup and the end-to-end run

use super::cli::{load_config_file, Args, FileConfig, LogSettings, Settings};
use super::error::{AppError, AppResult};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{flush_logging, init_logging};
use crate::core::version;
use crate::input::load_items;
use crate::pipeline::run_pipeline;
use crate::report::{render_report, write_report};
use crate::scoring::Transform;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

/// Parse the command line, run once and map the outcome to an exit code
pub async fn startup() -> ExitCode {
    let args = Args::parse();

    // Read before the logger starts so its logging keys take effect
    let file_config = load_config_file(args.config_file.as_deref()).await;

    let log_settings = LogSettings::resolve(&args, file_config.as_ref().ok());
    if let Err(e) = start_logging(&log_settings) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    log::info!("{}", version::banner());

    let outcome = match file_config {
        Ok(file_config) => run(&args, &file_config).await,
        Err(e) => Err(e),
    };

    let code = match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_error_with_context(&e, e.operation());
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn start_logging(settings: &LogSettings) -> AppResult<()> {
    let color = settings
        .color
        .unwrap_or_else(|| std::io::stderr().is_terminal());

    init_logging(
        Some(&settings.level),
        Some(&settings.format),
        settings.file.as_deref(),
        color,
    )
    .map_err(|e| AppError::Logging {
        message: e.to_string(),
    })
}

/// Load, score, report
pub async fn run(args: &Args, file_config: &FileConfig) -> AppResult<()> {
    let settings = Settings::resolve(args, file_config)?;
    log::debug!("Resolved settings: {:?}", settings);

    let items = load_items(&settings.input).await?;

    let config = settings.pipeline.clone();
    let transform: Arc<dyn Transform> = Arc::new(settings.workload);
    // The pipeline blocks on OS threads; keep it off the async workers
    let outcome = tokio::task::spawn_blocking(move || run_pipeline(&config, transform, items))
        .await
        .map_err(|e| AppError::Runtime {
            message: format!("pipeline task failed: {}", e),
        })??;

    let report = render_report(&outcome.results, settings.report);
    write_report(settings.output.as_deref(), &report)
        .await
        .map_err(|source| AppError::Output {
            message: match &settings.output {
                Some(path) => format!("Error writing report to {}: {}", path.display(), source),
                None => format!("Error writing report to stdout: {}", source),
            },
            source,
        })?;

    Ok(())
}
