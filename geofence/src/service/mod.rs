//! Service layer for the geofence engine.
//!
//! [`GeofenceService`] is the API a transport layer calls: `ingest` a ping,
//! read a vehicle's `status`. Input validation happens here; the tracker and
//! classifier below it never fail.

mod error;
mod facade;

pub use error::{GeofenceError, InvalidInput};
pub use facade::GeofenceService;
