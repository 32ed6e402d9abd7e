//! Zone inspection commands: `zones` and `classify`.

use geofence::coord::Coordinate;
use geofence::zone::ZoneClassifier;

use crate::error::CliError;

/// List configured zones in precedence order.
pub fn run_list(classifier: &ZoneClassifier) -> Result<(), CliError> {
    if classifier.is_empty() {
        println!("No zones configured.");
        return Ok(());
    }

    println!(
        "{:<4} {:<20} {:>11} {:>11} {:>11} {:>11}",
        "#", "NAME", "MIN_LAT", "MAX_LAT", "MIN_LON", "MAX_LON"
    );
    for (i, zone) in classifier.zones().iter().enumerate() {
        println!(
            "{:<4} {:<20} {:>11.6} {:>11.6} {:>11.6} {:>11.6}",
            i + 1,
            zone.name(),
            zone.min_lat(),
            zone.max_lat(),
            zone.min_lon(),
            zone.max_lon()
        );
    }
    Ok(())
}

/// Print the zone containing a point, or `(none)`.
pub fn run_classify(classifier: &ZoneClassifier, lat: f64, lon: f64) -> Result<(), CliError> {
    println!("{}", classify_label(classifier, lat, lon)?);
    Ok(())
}

fn classify_label(classifier: &ZoneClassifier, lat: f64, lon: f64) -> Result<String, CliError> {
    let coord = Coordinate::new(lat, lon)?;
    Ok(classifier
        .classify_coordinate(coord)
        .map(|zone| zone.name().to_string())
        .unwrap_or_else(|| "(none)".to_string()))
}
