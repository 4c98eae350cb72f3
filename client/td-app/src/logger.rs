//! fern logger for the `td` binary.
//!
//! Terminal output goes to stderr so command output on stdout stays clean.

use crate::error::{AppError, Result as AppErrorResult};

use td_config::LogLevel;

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Level, Record, info};

/// Where log lines end up
enum LogTarget {
    File(PathBuf),
    ColoredTerminal(ColoredLevelConfig),
    PlainTerminal,
}

impl LogTarget {
    fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => LogTarget::File(path),
            None if colored => LogTarget::ColoredTerminal(
                ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red),
            ),
            None => LogTarget::PlainTerminal,
        }
    }

    fn describe(&self) -> String {
        match self {
            LogTarget::File(path) => format!("file={}", path.display()),
            LogTarget::ColoredTerminal(_) | LogTarget::PlainTerminal => String::from("stderr"),
        }
    }
}

fn write_line(out: FormatCallback<'_>, level: impl fmt::Display, message: &fmt::Arguments<'_>) {
    out.finish(format_args!(
        "[{date} - {level}] {message}",
        date = humantime::format_rfc3339(SystemTime::now()),
    ))
}

/// File lines also carry the source location
fn write_file_line(out: FormatCallback<'_>, message: &fmt::Arguments<'_>, record: &Record<'_>) {
    out.finish(format_args!(
        "[{date} - {level}] {message} [{file}:{line}]",
        date = humantime::format_rfc3339(SystemTime::now()),
        level = record.level(),
        file = record.file().unwrap_or("unknown"),
        line = record.line().unwrap_or(0),
    ))
}

/// Initialize the global logger
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
#[track_caller]
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = log_level.0;
    let target = LogTarget::select(log_file, colored);
    let description = target.describe();

    let output = match target {
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| AppError::io(path.display().to_string(), e))?;

            Dispatch::new()
                .format(|out, message, record| write_file_line(out, message, record))
                .chain(file)
        }
        LogTarget::ColoredTerminal(colors) => Dispatch::new()
            .format(move |out, message, record| {
                write_line(out, colors.color(record.level()), message)
            })
            .chain(std::io::stderr()),
        LogTarget::PlainTerminal => Dispatch::new()
            .format(|out, message, record| write_line(out, record.level(), message))
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level_filter)
        // reqwest's connection pool is chatty below warn
        .level_for("hyper_util", level_filter.min(Level::Warn.to_level_filter()))
        .chain(output)
        .apply()
        .map_err(|e| AppError::logger(format!("Failed to initialize logger: {e}")))?;

    info!("Logger initialized: level={level_filter:?}, {description}");

    // Bridge tracing events from dependencies into log
    tracing_log::LogTracer::init().ok();

    Ok(())
}
