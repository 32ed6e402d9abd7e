//! INI serialization logic for converting `GeofenceConfig` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::fmt::Write;
use std::path::Path;

use super::parser::ZONE_SECTION_PREFIX;
use super::settings::GeofenceConfig;

/// Convert a `GeofenceConfig` to a commented INI string for saving.
pub(super) fn to_config_string(config: &GeofenceConfig) -> String {
    let directory = config
        .logging
        .directory
        .as_deref()
        .map(path_to_string)
        .unwrap_or_default();

    let mut out = format!(
        r#"[logging]
; Tracing filter directive (e.g. info, debug, geofence=trace).
; The RUST_LOG environment variable takes precedence when set.
filter = {}
; Directory for the log file. Leave empty to log to the console only.
directory = {}
; Log file name inside the directory above.
file = {}

[tracker]
; Buffered zone transitions per subscriber before the oldest are dropped.
event_channel_capacity = {}

; Zones, one section per zone: [zone.<NAME>]
; Bounds are inclusive decimal degrees with min <= max.
; When rectangles overlap, the zone listed first wins.
"#,
        config.logging.filter,
        directory,
        config.logging.file,
        config.tracker.event_channel_capacity,
    );

    for zone in &config.zones {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "\n[{}{}]\nmin_lat = {}\nmax_lat = {}\nmin_lon = {}\nmax_lon = {}\n",
            ZONE_SECTION_PREFIX,
            zone.name(),
            zone.min_lat(),
            zone.max_lat(),
            zone.min_lon(),
            zone.max_lon(),
        );
    }

    out
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::Zone;

    #[test]
    fn test_default_config_contains_all_sections() {
        let content = to_config_string(&GeofenceConfig::default());
        assert!(content.contains("[logging]"));
        assert!(content.contains("[tracker]"));
        assert!(content.contains("[zone.AIRPORT]"));
        assert!(content.contains("[zone.DOWNTOWN]"));
        assert!(content.contains("[zone.SUBURB]"));
    }

    #[test]
    fn test_zones_written_in_precedence_order() {
        let config = GeofenceConfig {
            zones: vec![
                Zone::new("B", 0.0, 1.0, 0.0, 1.0).unwrap(),
                Zone::new("A", 0.0, 1.0, 0.0, 1.0).unwrap(),
            ],
            ..GeofenceConfig::default()
        };
        let content = to_config_string(&config);
        let b = content.find("[zone.B]").unwrap();
        let a = content.find("[zone.A]").unwrap();
        assert!(b < a);
    }
}
