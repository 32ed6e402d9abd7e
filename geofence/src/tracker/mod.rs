//! Vehicle transition tracking.
//!
//! This module owns per-vehicle zone state and turns each location ping into a
//! [`ZoneChangeEvent`].
//!
//! # State Machine
//!
//! Each vehicle is a labelled automaton whose states are "no zone" plus every
//! configured zone name. Every ping is a transition labelled with the
//! (previous, current) pair, possibly a self-loop. There is no terminal state.
//!
//! ```text
//! Unseen --ping--> Seen(zone | none) --ping--> Seen(zone' | none) --> ...
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use geofence::tracker::TransitionTracker;
//! use geofence::zone::ZoneClassifier;
//!
//! let tracker = TransitionTracker::with_classifier(ZoneClassifier::with_defaults());
//!
//! let event = tracker.record("TAXI_001", 12.96, 77.65, Utc::now());
//! assert_eq!(event.entered_zone.as_deref(), Some("AIRPORT"));
//!
//! let status = tracker.status("TAXI_001");
//! assert_eq!(status.current_zone.as_deref(), Some("AIRPORT"));
//! ```

mod model;
mod store;
mod transition;

pub use model::{
    LocationEvent, Timestamp, VehicleState, VehicleStatus, ZoneChangeEvent, ZoneTransition,
};
pub use store::VehicleStateStore;
pub use transition::{TrackerConfig, TransitionTracker, DEFAULT_EVENT_CHANNEL_CAPACITY};
