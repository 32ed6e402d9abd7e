//! Geofence - Zone transition tracking for vehicle location pings
//!
//! This library classifies vehicle positions against a set of named
//! rectangular zones and reports a zone-change event whenever a vehicle's
//! zone membership differs from its last known state.
//!
//! ```text
//! LocationEvent ─► ZoneClassifier ─► TransitionTracker ─► ZoneChangeEvent
//!                                          │
//!                                  VehicleStateStore
//! ```
//!
//! The transport (HTTP, queues) is left to the caller: [`service::GeofenceService`]
//! is the entry point it talks to.

pub mod config;
pub mod coord;
pub mod logging;
pub mod service;
pub mod tracker;
pub mod zone;

pub use service::{GeofenceError, GeofenceService, InvalidInput};
pub use tracker::{LocationEvent, VehicleStatus, ZoneChangeEvent};
pub use zone::{Zone, ZoneClassifier};
