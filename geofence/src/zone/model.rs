//! Zone data types.
//!
//! A zone is an immutable, named, axis-aligned rectangle in latitude/longitude
//! space. Zones are built once at startup and never mutated.

use std::fmt;

use thiserror::Error;

use crate::coord::Coordinate;

/// Errors raised while building zones or a zone set.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ZoneError {
    /// The zone name was the empty string.
    #[error("Zone name must not be empty")]
    EmptyName,

    /// One of the four bounds was NaN or infinite.
    #[error("Zone '{name}': bound '{bound}' must be finite, got {value}")]
    NonFiniteBound {
        name: String,
        bound: &'static str,
        value: f64,
    },

    /// `min` was greater than `max` on one axis.
    #[error("Zone '{name}': min_{axis} ({min}) is greater than max_{axis} ({max})")]
    InvertedBounds {
        name: String,
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// Two zones in the same set share a name.
    #[error("Duplicate zone name: {0}")]
    DuplicateName(String),
}

/// A named geographic rectangle.
///
/// Containment is inclusive on all four edges: a point sitting exactly on
/// `min_lat`, `max_lat`, `min_lon` or `max_lon` is inside the zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    name: String,
    min_lat: f64,
    max_lat: f64,
    min_lon: f64,
    max_lon: f64,
}

impl Zone {
    /// Create a validated zone.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError`] if the name is empty, a bound is not finite, or
    /// a `min` bound exceeds its `max`.
    pub fn new(
        name: impl Into<String>,
        min_lat: f64,
        max_lat: f64,
        min_lon: f64,
        max_lon: f64,
    ) -> Result<Self, ZoneError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ZoneError::EmptyName);
        }

        for (bound, value) in [
            ("min_lat", min_lat),
            ("max_lat", max_lat),
            ("min_lon", min_lon),
            ("max_lon", max_lon),
        ] {
            if !value.is_finite() {
                return Err(ZoneError::NonFiniteBound { name, bound, value });
            }
        }

        if min_lat > max_lat {
            return Err(ZoneError::InvertedBounds {
                name,
                axis: "lat",
                min: min_lat,
                max: max_lat,
            });
        }
        if min_lon > max_lon {
            return Err(ZoneError::InvertedBounds {
                name,
                axis: "lon",
                min: min_lon,
                max: max_lon,
            });
        }

        Ok(Self {
            name,
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        })
    }

    /// Unique zone identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Southern edge (inclusive).
    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    /// Northern edge (inclusive).
    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Western edge (inclusive).
    pub fn min_lon(&self) -> f64 {
        self.min_lon
    }

    /// Eastern edge (inclusive).
    pub fn max_lon(&self) -> f64 {
        self.max_lon
    }

    /// Check whether a point lies inside the rectangle, edges included.
    ///
    /// NaN components compare false on every bound and therefore never match.
    #[inline]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.min_lat <= lat && lat <= self.max_lat && self.min_lon <= lon && lon <= self.max_lon
    }

    /// [`Zone::contains`] for a [`Coordinate`].
    #[inline]
    pub fn contains_coordinate(&self, coord: Coordinate) -> bool {
        self.contains(coord.lat, coord.lon)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [lat {}..={}, lon {}..={}]",
            self.name, self.min_lat, self.max_lat, self.min_lon, self.max_lon
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airport() -> Zone {
        Zone::new("AIRPORT", 12.94, 13.00, 77.60, 77.70).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn test_new_valid_zone() {
            let zone = airport();
            assert_eq!(zone.name(), "AIRPORT");
            assert_eq!(zone.min_lat(), 12.94);
            assert_eq!(zone.max_lat(), 13.00);
            assert_eq!(zone.min_lon(), 77.60);
            assert_eq!(zone.max_lon(), 77.70);
        }

        #[test]
        fn test_degenerate_point_zone_is_allowed() {
            let zone = Zone::new("PIN", 1.0, 1.0, 2.0, 2.0).unwrap();
            assert!(zone.contains(1.0, 2.0));
        }

        #[test]
        fn test_empty_name_rejected() {
            assert_eq!(Zone::new("", 0.0, 1.0, 0.0, 1.0), Err(ZoneError::EmptyName));
        }

        #[test]
        fn test_whitespace_name_is_not_empty() {
            let zone = Zone::new(" ", 0.0, 1.0, 0.0, 1.0).unwrap();
            assert_eq!(zone.name(), " ");
        }

        #[test]
        fn test_inverted_latitude_rejected() {
            let err = Zone::new("BAD", 2.0, 1.0, 0.0, 1.0).unwrap_err();
            assert!(matches!(err, ZoneError::InvertedBounds { axis: "lat", .. }));
        }

        #[test]
        fn test_inverted_longitude_rejected() {
            let err = Zone::new("BAD", 0.0, 1.0, 5.0, 1.0).unwrap_err();
            assert!(matches!(err, ZoneError::InvertedBounds { axis: "lon", .. }));
        }

        #[test]
        fn test_non_finite_bound_rejected() {
            let err = Zone::new("BAD", 0.0, f64::NAN, 0.0, 1.0).unwrap_err();
            assert!(matches!(
                err,
                ZoneError::NonFiniteBound {
                    bound: "max_lat",
                    ..
                }
            ));
        }
    }

    mod containment {
        use super::*;

        #[test]
        fn test_interior_point() {
            assert!(airport().contains(12.96, 77.65));
        }

        #[test]
        fn test_all_four_edges_are_inclusive() {
            let zone = airport();
            assert!(zone.contains(12.94, 77.65), "min_lat edge");
            assert!(zone.contains(13.00, 77.65), "max_lat edge");
            assert!(zone.contains(12.96, 77.60), "min_lon edge");
            assert!(zone.contains(12.96, 77.70), "max_lon edge");
            assert!(zone.contains(12.94, 77.60), "south-west corner");
            assert!(zone.contains(13.00, 77.70), "north-east corner");
        }

        #[test]
        fn test_just_outside_edges() {
            let zone = airport();
            assert!(!zone.contains(12.9399, 77.65));
            assert!(!zone.contains(13.0001, 77.65));
            assert!(!zone.contains(12.96, 77.5999));
            assert!(!zone.contains(12.96, 77.7001));
        }

        #[test]
        fn test_nan_never_matches() {
            assert!(!airport().contains(f64::NAN, 77.65));
            assert!(!airport().contains(12.96, f64::NAN));
        }

        #[test]
        fn test_contains_coordinate() {
            let coord = Coordinate::unchecked(12.96, 77.65);
            assert!(airport().contains_coordinate(coord));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", airport()),
            "AIRPORT [lat 12.94..=13, lon 77.6..=77.7]"
        );
    }
}
