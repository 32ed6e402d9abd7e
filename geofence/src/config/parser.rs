//! INI parsing logic for converting `Ini` → `GeofenceConfig`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use std::path::PathBuf;

use ini::{Ini, Properties};

use super::file::ConfigFileError;
use super::settings::GeofenceConfig;
use crate::zone::{Zone, ZoneClassifier};

/// Prefix of zone section names: `[zone.AIRPORT]`.
pub(super) const ZONE_SECTION_PREFIX: &str = "zone.";

/// Parse an `Ini` object into a `GeofenceConfig`.
///
/// Starts from `GeofenceConfig::default()` and overlays any values found in the
/// INI. If at least one zone section is present, the zone list is replaced
/// entirely by the configured zones, in file order.
pub(super) fn parse_ini(ini: &Ini) -> Result<GeofenceConfig, ConfigFileError> {
    let mut config = GeofenceConfig::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("filter") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.filter = v.to_string();
            }
        }
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = Some(expand_tilde(v));
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    // [tracker] section
    if let Some(section) = ini.section(Some("tracker")) {
        if let Some(v) = section.get("event_channel_capacity") {
            let capacity: usize = v
                .trim()
                .parse()
                .ok()
                .filter(|c| *c > 0)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "tracker".to_string(),
                    key: "event_channel_capacity".to_string(),
                    value: v.to_string(),
                    reason: "must be a positive integer".to_string(),
                })?;
            config.tracker.event_channel_capacity = capacity;
        }
    }

    // [zone.<NAME>] sections, in file order
    let mut zones = Vec::new();
    for (name, section) in ini.iter() {
        let Some(section_name) = name else {
            continue;
        };
        if let Some(zone_name) = section_name.strip_prefix(ZONE_SECTION_PREFIX) {
            zones.push(parse_zone(section_name, zone_name, section)?);
        }
    }

    if !zones.is_empty() {
        // Rejects duplicate names the same way the service would
        ZoneClassifier::new(zones.clone())?;
        config.zones = zones;
    }

    Ok(config)
}

/// Parse one `[zone.<NAME>]` section into a validated zone.
fn parse_zone(
    section_name: &str,
    zone_name: &str,
    section: &Properties,
) -> Result<Zone, ConfigFileError> {
    let min_lat = required_f64(section_name, section, "min_lat")?;
    let max_lat = required_f64(section_name, section, "max_lat")?;
    let min_lon = required_f64(section_name, section, "min_lon")?;
    let max_lon = required_f64(section_name, section, "max_lon")?;

    Zone::new(zone_name.trim(), min_lat, max_lat, min_lon, max_lon).map_err(Into::into)
}

fn required_f64(
    section_name: &str,
    section: &Properties,
    key: &str,
) -> Result<f64, ConfigFileError> {
    let invalid = |value: &str, reason: &str| ConfigFileError::InvalidValue {
        section: section_name.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let raw = section
        .get(key)
        .ok_or_else(|| invalid("", "required key is missing"))?;
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid(raw, "must be a decimal number of degrees"))?;
    if !value.is_finite() {
        return Err(invalid(raw, "must be finite"));
    }
    Ok(value)
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
