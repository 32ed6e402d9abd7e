//! Per-vehicle state table.
//!
//! # Locking
//!
//! The table maps each vehicle id to its own `Mutex<VehicleState>` slot. The
//! map's shard lock is held only long enough to find or create a slot; the
//! read-modify-write itself runs under the vehicle's mutex. Updates for one
//! vehicle are serialized while different vehicles proceed independently.
//!
//! Readers lock the same slot, so `current_zone` and `last_update` are always
//! observed as a pair written by a single update.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;

use super::model::VehicleState;

type Slot = Arc<Mutex<VehicleState>>;

/// Owned, shareable store of per-vehicle state.
///
/// Entries are created lazily on first update and never removed.
#[derive(Debug, Default)]
pub struct VehicleStateStore {
    slots: DashMap<String, Slot>,
}

impl VehicleStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the state of a vehicle.
    ///
    /// Returns [`VehicleState::Unseen`] for ids that were never updated. Does
    /// not create an entry.
    pub fn get(&self, vehicle_id: &str) -> VehicleState {
        match self.slot(vehicle_id) {
            Some(slot) => slot.lock().clone(),
            None => VehicleState::Unseen,
        }
    }

    /// Atomically read and replace a vehicle's state.
    ///
    /// `f` receives the current state (`Unseen` for a new vehicle) and returns
    /// the state to store plus a value handed back to the caller. No other
    /// update or read of the same vehicle can interleave with `f`.
    pub fn update<F, R>(&self, vehicle_id: &str, f: F) -> R
    where
        F: FnOnce(&VehicleState) -> (VehicleState, R),
    {
        let slot = self.slot_or_insert(vehicle_id);
        let mut state = slot.lock();
        let (next, result) = f(&state);
        *state = next;
        result
    }

    /// Number of vehicles with an entry.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no vehicle has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Ids of all vehicles with an entry, sorted.
    pub fn vehicle_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.slots.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Snapshot every vehicle's state, sorted by id.
    ///
    /// Each entry is individually consistent; the set as a whole is not a
    /// point-in-time view while updates are running.
    pub fn snapshot(&self) -> Vec<(String, VehicleState)> {
        // Clone the slot handles first so no shard lock is held while locking slots
        let slots: Vec<(String, Slot)> = self
            .slots
            .iter()
            .map(|e| (e.key().clone(), Arc::clone(e.value())))
            .collect();

        let mut states: Vec<(String, VehicleState)> = slots
            .into_iter()
            .map(|(id, slot)| {
                let state = slot.lock().clone();
                (id, state)
            })
            .collect();
        states.sort_by(|a, b| a.0.cmp(&b.0));
        states
    }

    fn slot(&self, vehicle_id: &str) -> Option<Slot> {
        self.slots.get(vehicle_id).map(|e| Arc::clone(e.value()))
    }

    fn slot_or_insert(&self, vehicle_id: &str) -> Slot {
        if let Some(slot) = self.slot(vehicle_id) {
            return slot;
        }
        let entry = self
            .slots
            .entry(vehicle_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(VehicleState::Unseen)));
        Arc::clone(entry.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::thread;

    fn seen(zone: Option<&str>, secs: i64) -> VehicleState {
        VehicleState::Seen {
            current_zone: zone.map(str::to_string),
            last_update: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_get_unknown_vehicle_is_unseen() {
        let store = VehicleStateStore::new();
        assert_eq!(store.get("NOBODY"), VehicleState::Unseen);
        assert!(store.is_empty(), "Reads must not create entries");
    }

    #[test]
    fn test_update_sees_unseen_then_previous_state() {
        let store = VehicleStateStore::new();

        let first = store.update("V1", |prev| (seen(Some("A"), 1), prev.clone()));
        assert_eq!(first, VehicleState::Unseen);

        let second = store.update("V1", |prev| (seen(None, 2), prev.clone()));
        assert_eq!(second, seen(Some("A"), 1));

        assert_eq!(store.get("V1"), seen(None, 2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_vehicle_ids_sorted() {
        let store = VehicleStateStore::new();
        for id in ["C", "A", "B"] {
            store.update(id, |_| (seen(None, 0), ()));
        }
        assert_eq!(store.vehicle_ids(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_snapshot_sorted_by_id() {
        let store = VehicleStateStore::new();
        store.update("Z", |_| (seen(Some("X"), 5), ()));
        store.update("M", |_| (seen(None, 3), ()));

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].0, "M");
        assert_eq!(snapshot[1], ("Z".to_string(), seen(Some("X"), 5)));
    }

    #[test]
    fn test_concurrent_updates_same_vehicle_are_not_lost() {
        // Each update reads a counter out of last_update and writes +1
        let store = Arc::new(VehicleStateStore::new());
        let threads = 8;
        let per_thread = 500;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..per_thread {
                        store.update("SHARED", |prev| {
                            let n = prev.last_update().map(|t| t.timestamp()).unwrap_or(0);
                            (seen(None, n + 1), ())
                        });
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let total = store.get("SHARED").last_update().unwrap().timestamp();
        assert_eq!(total, (threads * per_thread) as i64);
    }
}
