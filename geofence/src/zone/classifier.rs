//! Point-in-zone classification.

use std::collections::HashSet;

use super::model::{Zone, ZoneError};
use crate::coord::Coordinate;

/// Ordered set of zones answering "which zone is this point in?".
///
/// Zones are scanned in configuration order and the first rectangle that
/// contains the point wins. Overlaps therefore resolve to whichever zone was
/// listed first.
///
/// The classifier is immutable after construction and safe to share across
/// threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ZoneClassifier {
    zones: Vec<Zone>,
}

impl ZoneClassifier {
    /// Build a classifier from zones in precedence order.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::DuplicateName`] if two zones share a name.
    pub fn new(zones: Vec<Zone>) -> Result<Self, ZoneError> {
        let mut seen = HashSet::with_capacity(zones.len());
        for zone in &zones {
            if !seen.insert(zone.name()) {
                return Err(ZoneError::DuplicateName(zone.name().to_string()));
            }
        }
        Ok(Self { zones })
    }

    /// Build a classifier over [`default_zones`].
    pub fn with_defaults() -> Self {
        Self {
            zones: default_zones(),
        }
    }

    /// Return the name of the first zone containing the point, if any.
    ///
    /// Never fails. Absence is a normal result, including for non-finite or
    /// out-of-range input.
    #[inline]
    pub fn classify(&self, lat: f64, lon: f64) -> Option<&str> {
        self.zones
            .iter()
            .find(|zone| zone.contains(lat, lon))
            .map(Zone::name)
    }

    /// Return the first zone containing the coordinate, if any.
    #[inline]
    pub fn classify_coordinate(&self, coord: Coordinate) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.contains_coordinate(coord))
    }

    /// All zones in precedence order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Look up a zone by name.
    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.name() == name)
    }

    /// Number of configured zones.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zones are configured (every point classifies as none).
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Reference zones used when no configuration supplies any.
///
/// Three rectangles around Bangalore. AIRPORT and DOWNTOWN overlap, and
/// AIRPORT is listed first so it wins in the overlap.
pub fn default_zones() -> Vec<Zone> {
    [
        ("AIRPORT", 12.94, 13.00, 77.60, 77.70),
        ("DOWNTOWN", 12.95, 13.05, 77.55, 77.65),
        ("SUBURB", 12.85, 12.95, 77.50, 77.60),
    ]
    .into_iter()
    .filter_map(|(name, min_lat, max_lat, min_lon, max_lon)| {
        Zone::new(name, min_lat, max_lat, min_lon, max_lon).ok()
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(name: &str, min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Zone {
        Zone::new(name, min_lat, max_lat, min_lon, max_lon).unwrap()
    }

    #[test]
    fn test_default_zones_are_all_valid() {
        let zones = default_zones();
        let names: Vec<&str> = zones.iter().map(Zone::name).collect();
        assert_eq!(names, vec!["AIRPORT", "DOWNTOWN", "SUBURB"]);
    }

    #[test]
    fn test_classify_inside_single_zone() {
        let classifier = ZoneClassifier::with_defaults();
        assert_eq!(classifier.classify(12.90, 77.55), Some("SUBURB"));
    }

    #[test]
    fn test_classify_outside_all_zones() {
        let classifier = ZoneClassifier::with_defaults();
        assert_eq!(classifier.classify(0.0, 0.0), None);
        assert_eq!(classifier.classify(12.80, 77.45), None);
    }

    #[test]
    fn test_overlap_resolves_to_first_listed() {
        // (12.97, 77.62) is inside both AIRPORT and DOWNTOWN
        let classifier = ZoneClassifier::with_defaults();
        assert!(classifier.zone("DOWNTOWN").unwrap().contains(12.97, 77.62));
        assert_eq!(classifier.classify(12.97, 77.62), Some("AIRPORT"));
    }

    #[test]
    fn test_overlap_order_is_configuration_order() {
        let a = zone("A", 0.0, 10.0, 0.0, 10.0);
        let b = zone("B", 5.0, 15.0, 5.0, 15.0);

        let ab = ZoneClassifier::new(vec![a.clone(), b.clone()]).unwrap();
        let ba = ZoneClassifier::new(vec![b, a]).unwrap();

        assert_eq!(ab.classify(7.0, 7.0), Some("A"));
        assert_eq!(ba.classify(7.0, 7.0), Some("B"));
    }

    #[test]
    fn test_boundary_points_are_inside() {
        let classifier = ZoneClassifier::new(vec![zone("BOX", 1.0, 2.0, 3.0, 4.0)]).unwrap();
        assert_eq!(classifier.classify(1.0, 3.5), Some("BOX"));
        assert_eq!(classifier.classify(2.0, 3.5), Some("BOX"));
        assert_eq!(classifier.classify(1.5, 3.0), Some("BOX"));
        assert_eq!(classifier.classify(1.5, 4.0), Some("BOX"));
    }

    #[test]
    fn test_non_finite_input_matches_nothing() {
        let classifier = ZoneClassifier::with_defaults();
        assert_eq!(classifier.classify(f64::NAN, 77.65), None);
        assert_eq!(classifier.classify(12.96, f64::INFINITY), None);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = ZoneClassifier::new(vec![
            zone("X", 0.0, 1.0, 0.0, 1.0),
            zone("X", 2.0, 3.0, 2.0, 3.0),
        ]);
        assert_eq!(result.unwrap_err(), ZoneError::DuplicateName("X".to_string()));
    }

    #[test]
    fn test_empty_classifier() {
        let classifier = ZoneClassifier::new(Vec::new()).unwrap();
        assert!(classifier.is_empty());
        assert_eq!(classifier.len(), 0);
        assert_eq!(classifier.classify(12.96, 77.65), None);
    }

    #[test]
    fn test_classify_coordinate_returns_zone() {
        let classifier = ZoneClassifier::with_defaults();
        let zone = classifier
            .classify_coordinate(Coordinate::unchecked(12.96, 77.65))
            .unwrap();
        assert_eq!(zone.name(), "AIRPORT");
        assert_eq!(zone.max_lon(), 77.70);
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_point_inside_first_zone_always_classifies_first(
                lat in 0.0..=10.0_f64,
                lon in 0.0..=10.0_f64
            ) {
                // Second zone fully covers the first, first still wins
                let classifier = ZoneClassifier::new(vec![
                    zone("INNER", 0.0, 10.0, 0.0, 10.0),
                    zone("OUTER", -20.0, 20.0, -20.0, 20.0),
                ]).unwrap();
                prop_assert_eq!(classifier.classify(lat, lon), Some("INNER"));
            }

            #[test]
            fn test_classification_is_deterministic(
                lat in -90.0..90.0_f64,
                lon in -180.0..180.0_f64
            ) {
                let classifier = ZoneClassifier::with_defaults();
                let first = classifier.classify(lat, lon);
                let second = classifier.classify(lat, lon);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn test_result_always_contains_point(
                lat in 12.8..13.1_f64,
                lon in 77.4..77.8_f64
            ) {
                let classifier = ZoneClassifier::with_defaults();
                match classifier.classify(lat, lon) {
                    Some(name) => {
                        let zone = classifier.zone(name).unwrap();
                        prop_assert!(zone.contains(lat, lon));
                        // No earlier zone may contain it
                        for earlier in classifier.zones().iter().take_while(|z| z.name() != name) {
                            prop_assert!(!earlier.contains(lat, lon));
                        }
                    }
                    None => {
                        prop_assert!(classifier.zones().iter().all(|z| !z.contains(lat, lon)));
                    }
                }
            }
        }
    }
}
