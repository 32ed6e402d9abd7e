//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

use crate::tracker::TrackerConfig;
use crate::zone::{default_zones, Zone};

/// Default tracing filter when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default log file name (used only when a log directory is configured).
pub const DEFAULT_LOG_FILE: &str = "geofence.log";

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone)]
pub struct GeofenceConfig {
    /// Logging settings
    pub logging: LoggingSettings,
    /// Tracker settings
    pub tracker: TrackerConfig,
    /// Zones in precedence order (`[zone.<NAME>]` sections, file order)
    pub zones: Vec<Zone>,
}

impl Default for GeofenceConfig {
    fn default() -> Self {
        Self {
            logging: LoggingSettings::default(),
            tracker: TrackerConfig::default(),
            zones: default_zones(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive (e.g. `info`, `geofence=debug`). `RUST_LOG` wins.
    pub filter: String,
    /// Directory for the log file. Console-only logging when `None`.
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`.
    pub file: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            directory: None,
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
