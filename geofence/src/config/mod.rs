//! Configuration for the geofence service.
//!
//! Configuration lives in an INI file (default `~/.geofence/config.ini`):
//!
//! ```ini
//! [logging]
//! filter = info
//! directory = ~/.geofence/logs
//!
//! [tracker]
//! event_channel_capacity = 256
//!
//! [zone.AIRPORT]
//! min_lat = 12.94
//! max_lat = 13.00
//! min_lon = 77.60
//! max_lon = 77.70
//! ```
//!
//! Zone sections are read in file order, which is also their precedence order.
//! A file without zone sections falls back to [`crate::zone::default_zones`].

mod file;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{GeofenceConfig, LoggingSettings, DEFAULT_LOG_FILE, DEFAULT_LOG_FILTER};
