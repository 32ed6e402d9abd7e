//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;

use geofence::config::ConfigFileError;
use geofence::coord::CoordError;
use geofence::logging::LoggingError;
use geofence::zone::ZoneError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(LoggingError),
    /// Configuration error
    Config(String),
    /// Failed to load or save the configuration file
    ConfigFile(ConfigFileError),
    /// Configured zones are unusable
    Zones(ZoneError),
    /// Coordinates given on the command line are not usable
    InvalidCoordinate(CoordError),
    /// Failed to read input or write output
    Io { path: String, error: std::io::Error },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::ConfigFile(_) | CliError::Zones(_) => {
                eprintln!();
                eprintln!("Check the configuration file, or regenerate it with:");
                eprintln!("  geofence config init --force");
            }
            CliError::LoggingInit(LoggingError::InvalidFilter { .. }) => {
                eprintln!();
                eprintln!("Use a directive such as 'info' or 'geofence=debug'.");
            }
            _ => {}
        }

        process::exit(1)
    }

    /// Wrap an I/O error with the path (or stream name) involved.
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        CliError::Io {
            path: path.into().display().to_string(),
            error,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Zones(e) => write!(f, "Invalid zone configuration: {}", e),
            CliError::InvalidCoordinate(e) => write!(f, "Invalid coordinate: {}", e),
            CliError::Io { path, error } => write!(f, "I/O error on '{}': {}", path, error),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::ConfigFile(e) => Some(e),
            CliError::Zones(e) => Some(e),
            CliError::InvalidCoordinate(e) => Some(e),
            CliError::Io { error, .. } => Some(error),
            CliError::Config(_) => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::LoggingInit(e)
    }
}

impl From<ZoneError> for CliError {
    fn from(e: ZoneError) -> Self {
        CliError::Zones(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::InvalidCoordinate(e)
    }
}
