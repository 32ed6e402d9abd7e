//! Service error types.

use thiserror::Error;

use crate::coord::CoordError;

/// Reasons a ping is rejected before it reaches the tracker.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInput {
    /// The vehicle id was the empty string.
    #[error("vehicle_id must not be empty")]
    EmptyVehicleId,

    /// Latitude or longitude was not finite.
    #[error(transparent)]
    Coordinate(#[from] CoordError),
}

/// Errors surfaced by [`super::GeofenceService`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeofenceError {
    /// The call was rejected without touching any state.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl From<CoordError> for GeofenceError {
    fn from(e: CoordError) -> Self {
        GeofenceError::InvalidInput(InvalidInput::Coordinate(e))
    }
}
