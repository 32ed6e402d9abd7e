//! Core data types for the transition tracker.
//!
//! Inputs ([`LocationEvent`]), stored per-vehicle state ([`VehicleState`]) and
//! derived outputs ([`ZoneChangeEvent`], [`VehicleStatus`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instant at which a ping was observed.
pub type Timestamp = DateTime<Utc>;

/// One observation of a vehicle's position (a "ping").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEvent {
    /// Vehicle identifier (e.g. `TAXI_001`).
    pub vehicle_id: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// When the observation was made.
    pub timestamp: Timestamp,
}

impl LocationEvent {
    /// Create a new location event.
    pub fn new(vehicle_id: impl Into<String>, lat: f64, lon: f64, timestamp: Timestamp) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            lat,
            lon,
            timestamp,
        }
    }
}

/// Stored state for one vehicle.
///
/// `Unseen` and `Seen { current_zone: None, .. }` are deliberately distinct:
/// the first means no ping was ever recorded, the second means the last ping
/// landed outside every zone.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VehicleState {
    /// No ping has been recorded for this vehicle.
    #[default]
    Unseen,
    /// At least one ping has been recorded.
    Seen {
        /// Zone of the most recently processed ping.
        current_zone: Option<String>,
        /// Timestamp of the most recently processed ping.
        last_update: Timestamp,
    },
}

impl VehicleState {
    /// Zone of the last processed ping (`None` if unseen or outside all zones).
    pub fn current_zone(&self) -> Option<&str> {
        match self {
            VehicleState::Unseen => None,
            VehicleState::Seen { current_zone, .. } => current_zone.as_deref(),
        }
    }

    /// Timestamp of the last processed ping (`None` if unseen).
    pub fn last_update(&self) -> Option<Timestamp> {
        match self {
            VehicleState::Unseen => None,
            VehicleState::Seen { last_update, .. } => Some(*last_update),
        }
    }

    /// Whether any ping has been recorded.
    pub fn is_seen(&self) -> bool {
        matches!(self, VehicleState::Seen { .. })
    }
}

/// Entered/exited zones derived from a (previous, current) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ZoneTransition {
    /// Zone newly occupied.
    pub entered_zone: Option<String>,
    /// Zone newly vacated.
    pub exited_zone: Option<String>,
}

impl ZoneTransition {
    /// Derive the transition between two consecutive classifications.
    ///
    /// Equal inputs (including both `None`) produce no transition. Otherwise
    /// the previous zone is exited and the current zone is entered, either of
    /// which may be absent.
    pub fn between(previous: Option<&str>, current: Option<&str>) -> Self {
        if previous == current {
            return Self::default();
        }
        Self {
            entered_zone: current.map(str::to_string),
            exited_zone: previous.map(str::to_string),
        }
    }

    /// Whether zone membership changed.
    pub fn is_transition(&self) -> bool {
        membership_changed(self.entered_zone.as_deref(), self.exited_zone.as_deref())
    }
}

fn membership_changed(entered: Option<&str>, exited: Option<&str>) -> bool {
    entered.is_some() || exited.is_some()
}

/// Result of recording a ping.
///
/// Produced for every ping, whether or not membership changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneChangeEvent {
    pub vehicle_id: String,
    pub previous_zone: Option<String>,
    pub current_zone: Option<String>,
    pub entered_zone: Option<String>,
    pub exited_zone: Option<String>,
    pub timestamp: Timestamp,
}

impl ZoneChangeEvent {
    /// Whether this event records a change in zone membership.
    pub fn is_transition(&self) -> bool {
        membership_changed(self.entered_zone.as_deref(), self.exited_zone.as_deref())
    }
}

/// Last known zone and update time for a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleStatus {
    pub vehicle_id: String,
    pub current_zone: Option<String>,
    pub last_update: Option<Timestamp>,
}

impl VehicleStatus {
    /// Build a status view from a stored state snapshot.
    pub fn from_state(vehicle_id: impl Into<String>, state: &VehicleState) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            current_zone: state.current_zone().map(str::to_string),
            last_update: state.last_update(),
        }
    }
}
