//! Coordinate module
//!
//! Provides the validated latitude/longitude pair that every ping is reduced to
//! before classification.
//!
//! Only finiteness is enforced. Values outside the usual WGS84 ranges are
//! accepted and simply fall outside every configured zone.

use std::fmt;

use thiserror::Error;

/// Errors produced when building a [`Coordinate`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordError {
    /// Latitude was NaN or infinite.
    #[error("Latitude must be a finite number, got {0}")]
    NonFiniteLatitude(f64),

    /// Longitude was NaN or infinite.
    #[error("Longitude must be a finite number, got {0}")]
    NonFiniteLongitude(f64),
}

/// A geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite components.
    ///
    /// # Arguments
    ///
    /// * `lat` - Latitude in degrees (any finite value)
    /// * `lon` - Longitude in degrees (any finite value)
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() {
            return Err(CoordError::NonFiniteLatitude(lat));
        }
        if !lon.is_finite() {
            return Err(CoordError::NonFiniteLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Create a coordinate without validation.
    ///
    /// The classifier tolerates non-finite values (they match nothing), so this
    /// is used on paths where validation already happened or is not required.
    #[inline]
    pub const fn unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
