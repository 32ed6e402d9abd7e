//! Logging infrastructure for the geofence service.
//!
//! Provides structured logging through `tracing`:
//! - Console output on stderr (stdout is reserved for command output)
//! - Optional file output, cleared on session start
//! - Filter from `RUST_LOG`, falling back to the configured directive

use std::env;
use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory or file could not be prepared.
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] io::Error),

    /// The configured filter directive is malformed.
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard flushes and closes the log file writer, if any.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system.
///
/// When `settings.directory` is set, creates the directory if needed, clears
/// the previous log file and writes to it in addition to stderr.
///
/// # Returns
///
/// LoggingGuard that must be kept alive for file logging to work
///
/// # Errors
///
/// Returns an error if the log file cannot be prepared, the filter cannot be
/// parsed, or a subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<LoggingGuard, LoggingError> {
    let env_filter = build_filter(env::var(EnvFilter::DEFAULT_ENV).ok(), &settings.filter)?;

    let (file_layer, file_guard) = match &settings.directory {
        Some(dir) => {
            prepare_log_file(dir, &settings.file)?;

            let file_appender = tracing_appender::rolling::never(dir, &settings.file);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false); // No ANSI colors in file
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Create the log directory and clear the previous session's log file.
fn prepare_log_file(dir: &Path, file: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(file), "")
}

/// Build the filter: a parseable `RUST_LOG` wins, otherwise the configured
/// directive.
fn build_filter(
    env_directive: Option<String>,
    directive: &str,
) -> Result<EnvFilter, LoggingError> {
    if let Some(filter) = env_directive.and_then(|d| EnvFilter::try_new(d).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        filter: directive.to_string(),
        reason: e.to_string(),
    })
}
