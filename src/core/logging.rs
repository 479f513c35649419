//! Logging setup on top of `flexi_logger`
//!
//! Formats:
//! - `text`: timestamp, level, message
//! - `ext`: as `text` plus the source location (`pipeline/worker.rs:42`)
//! - `json`: one compact JSON object per line

use flexi_logger::{DeferredNow, FileSpec, Logger, LoggerHandle};
use std::sync::{Mutex, OnceLock};

// Keeps the logger (and its file writer) alive until exit
static LOGGER_HANDLE: OnceLock<Mutex<LoggerHandle>> = OnceLock::new();

/// Map `-v`/`-q` counts to a level spec when no explicit level was given
pub fn level_for_verbosity(verbosity: i8) -> &'static str {
    match verbosity {
        i8::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Start the global logger
///
/// `log_file` set to `None` keeps output on stderr.
pub fn init_logging(
    log_level: Option<&str>,
    log_format: Option<&str>,
    log_file: Option<&str>,
    color_enabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level_str = log_level.unwrap_or("info");
    let format_type = log_format.unwrap_or("text");

    let mut logger = Logger::try_with_str(level_str)?;

    logger = match (format_type, color_enabled) {
        ("json", _) => logger.format(json_format),
        ("ext", true) => logger.format(extended_color_format),
        ("ext", false) => logger.format(extended_format),
        (_, true) => logger.format(simple_color_format),
        (_, false) => logger.format(simple_format),
    };

    if let Some(file_path) = log_file {
        let file_spec = FileSpec::try_from(std::path::Path::new(file_path))?;
        logger = logger.log_to_file(file_spec);
    }

    let handle = logger.start()?;
    let _ = LOGGER_HANDLE.set(Mutex::new(handle));

    Ok(())
}

/// Flush buffered output of the running logger
///
/// Needed before exit when logging to a file; a no-op when the logger was
/// never started.
pub fn flush_logging() {
    if let Some(handle) = LOGGER_HANDLE.get() {
        match handle.lock() {
            Ok(handle) => handle.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }
}

fn level_abbr(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    }
}

fn level_colored(level: log::Level) -> colored::ColoredString {
    use colored::Colorize;

    match level {
        log::Level::Error => "ERR".red().bold(),
        log::Level::Warn => "WRN".yellow(),
        log::Level::Info => "INF".green(),
        log::Level::Debug => "DBG".blue(),
        log::Level::Trace => "TRC".magenta(),
    }
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message"
fn simple_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args()
    )
}

fn simple_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    write!(
        w,
        "{} {} {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args()
    )
}

// Format: "YYYY-MM-DD HH:mm:ss.fff INF message (pipeline/worker.rs:42)"
fn extended_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level_abbr(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line())
    )
}

fn extended_color_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use colored::Colorize;

    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f").to_string().dimmed(),
        level_colored(record.level()),
        record.args(),
        format_target_as_path(record.target(), record.line()).dimmed()
    )
}

fn json_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    use serde_json::{json, to_string};

    let json_obj = json!({
        "timestamp": now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        "level": level_abbr(record.level()),
        "message": record.args().to_string(),
        "target": format_target_as_path(record.target(), record.line()),
        "thread": std::thread::current().name().unwrap_or("unnamed"),
    });

    match to_string(&json_obj) {
        Ok(json_string) => w.write_all(json_string.as_bytes()),
        Err(_) => w.write_all(b"{\"error\":\"Failed to serialize log message\"}"),
    }
}

// scorepipe::pipeline::worker -> pipeline/worker.rs:LINE
fn format_target_as_path(target: &str, line: Option<u32>) -> String {
    let path_like = if let Some(without_prefix) = target.strip_prefix("scorepipe::") {
        without_prefix.replace("::", "/") + ".rs"
    } else {
        target.replace("::", "/")
    };

    if let Some(line_num) = line {
        format!("{}:{}", path_like, line_num)
    } else {
        path_like
    }
}
