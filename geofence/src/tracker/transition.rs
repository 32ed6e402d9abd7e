//! Transition tracker implementation.
//!
//! The tracker classifies each ping, swaps the vehicle's stored state in one
//! atomic step and derives the resulting [`ZoneChangeEvent`]. It offers both
//! query APIs (pull) and a transition subscription (push).

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, trace};

use super::model::{Timestamp, VehicleState, VehicleStatus, ZoneChangeEvent, ZoneTransition};
use super::store::VehicleStateStore;
use crate::zone::ZoneClassifier;

/// Default capacity of the transition broadcast channel.
pub const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 256;

/// Configuration for the [`TransitionTracker`].
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Channel capacity for transition broadcasts.
    ///
    /// Subscribers that fall further behind than this lose the oldest events
    /// (`RecvError::Lagged`).
    pub event_channel_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            event_channel_capacity: DEFAULT_EVENT_CHANNEL_CAPACITY,
        }
    }
}

/// Tracks each vehicle's zone and detects zone changes.
///
/// Owns no global state: the classifier and the state store are handed in,
/// so several independent trackers can coexist (e.g. one per test).
///
/// # Concurrency
///
/// `record` is safe to call from many threads at once. Calls for the same
/// vehicle are serialized by the store; the last one to commit wins,
/// regardless of the timestamps carried by the pings.
pub struct TransitionTracker {
    classifier: Arc<ZoneClassifier>,
    store: Arc<VehicleStateStore>,
    /// Broadcast channel for zone transitions.
    event_tx: broadcast::Sender<ZoneChangeEvent>,
}

impl std::fmt::Debug for TransitionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionTracker")
            .field("zones", &self.classifier.len())
            .field("tracked_vehicles", &self.store.len())
            .field("subscribers", &self.event_tx.receiver_count())
            .finish()
    }
}

impl TransitionTracker {
    /// Create a tracker over an existing classifier and store.
    pub fn new(
        classifier: Arc<ZoneClassifier>,
        store: Arc<VehicleStateStore>,
        config: TrackerConfig,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_channel_capacity.max(1));
        Self {
            classifier,
            store,
            event_tx,
        }
    }

    /// Create a tracker with a fresh store and default configuration.
    pub fn with_classifier(classifier: ZoneClassifier) -> Self {
        Self::new(
            Arc::new(classifier),
            Arc::new(VehicleStateStore::new()),
            TrackerConfig::default(),
        )
    }

    /// Record a ping and return the resulting event.
    ///
    /// The vehicle's state is always overwritten with the new zone and
    /// timestamp, even when the zone did not change. Inputs are not validated
    /// here; non-finite coordinates classify as "no zone".
    pub fn record(
        &self,
        vehicle_id: &str,
        lat: f64,
        lon: f64,
        timestamp: Timestamp,
    ) -> ZoneChangeEvent {
        let new_zone = self.classifier.classify(lat, lon).map(str::to_string);

        trace!(
            vehicle_id,
            lat,
            lon,
            zone = new_zone.as_deref().unwrap_or("-"),
            "Recording ping"
        );

        // Broadcast inside the update so subscribers see one vehicle's
        // transitions in commit order.
        self.store.update(vehicle_id, |prev| {
            let previous_zone = prev.current_zone().map(str::to_string);
            let transition =
                ZoneTransition::between(previous_zone.as_deref(), new_zone.as_deref());

            let event = ZoneChangeEvent {
                vehicle_id: vehicle_id.to_string(),
                previous_zone,
                current_zone: new_zone.clone(),
                entered_zone: transition.entered_zone,
                exited_zone: transition.exited_zone,
                timestamp,
            };

            if event.is_transition() {
                debug!(
                    vehicle_id,
                    entered = event.entered_zone.as_deref().unwrap_or("-"),
                    exited = event.exited_zone.as_deref().unwrap_or("-"),
                    "Zone transition"
                );
                // No subscribers is OK
                let _ = self.event_tx.send(event.clone());
            }

            let next = VehicleState::Seen {
                current_zone: new_zone,
                last_update: timestamp,
            };
            (next, event)
        })
    }

    /// Last known zone and update time for a vehicle.
    ///
    /// Unseen vehicles report both fields as absent. Never fails.
    pub fn status(&self, vehicle_id: &str) -> VehicleStatus {
        VehicleStatus::from_state(vehicle_id, &self.store.get(vehicle_id))
    }

    /// Raw stored state for a vehicle.
    pub fn state(&self, vehicle_id: &str) -> VehicleState {
        self.store.get(vehicle_id)
    }

    /// Status of every tracked vehicle, sorted by id.
    pub fn statuses(&self) -> Vec<VehicleStatus> {
        self.store
            .snapshot()
            .into_iter()
            .map(|(id, state)| VehicleStatus::from_state(id, &state))
            .collect()
    }

    /// Number of vehicles seen so far.
    pub fn tracked_vehicles(&self) -> usize {
        self.store.len()
    }

    /// Ids of all vehicles seen so far, sorted.
    pub fn vehicle_ids(&self) -> Vec<String> {
        self.store.vehicle_ids()
    }

    /// Subscribe to zone transitions.
    ///
    /// Only events where the zone changed are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<ZoneChangeEvent> {
        self.event_tx.subscribe()
    }

    /// The classifier used by this tracker.
    pub fn classifier(&self) -> &ZoneClassifier {
        &self.classifier
    }

    /// The state store backing this tracker.
    pub fn store(&self) -> &Arc<VehicleStateStore> {
        &self.store
    }
}
