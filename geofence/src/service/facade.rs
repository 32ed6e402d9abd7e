//! Geofence service facade implementation.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{info, warn};

use super::error::{GeofenceError, InvalidInput};
use crate::config::GeofenceConfig;
use crate::coord::Coordinate;
use crate::tracker::{
    LocationEvent, Timestamp, TrackerConfig, TransitionTracker, VehicleStateStore,
    VehicleStatus, ZoneChangeEvent,
};
use crate::zone::{ZoneClassifier, ZoneError};

/// Transport-agnostic entry point for ingesting pings and querying status.
///
/// Validates input and delegates to the [`TransitionTracker`]. An HTTP,
/// message-queue or CLI layer sits on top of this type and maps
/// [`GeofenceError`] to its own responses.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use geofence::service::GeofenceService;
/// use geofence::tracker::LocationEvent;
///
/// let service = GeofenceService::with_defaults();
///
/// let event = service
///     .ingest(&LocationEvent::new("TAXI_001", 12.96, 77.65, Utc::now()))
///     .unwrap();
/// assert_eq!(event.current_zone.as_deref(), Some("AIRPORT"));
///
/// let status = service.status("NEW_VEHICLE");
/// assert!(status.current_zone.is_none() && status.last_update.is_none());
/// ```
#[derive(Debug)]
pub struct GeofenceService {
    tracker: TransitionTracker,
}

impl GeofenceService {
    /// Create a service over an existing classifier and state store.
    pub fn new(
        classifier: Arc<ZoneClassifier>,
        store: Arc<VehicleStateStore>,
        config: TrackerConfig,
    ) -> Self {
        Self {
            tracker: TransitionTracker::new(classifier, store, config),
        }
    }

    /// Create a service from loaded configuration with a fresh state store.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::DuplicateName`] if the configured zones clash.
    pub fn from_config(config: &GeofenceConfig) -> Result<Self, ZoneError> {
        let classifier = ZoneClassifier::new(config.zones.clone())?;
        info!(
            zones = classifier.len(),
            event_channel_capacity = config.tracker.event_channel_capacity,
            "Geofence service initialized"
        );
        Ok(Self::new(
            Arc::new(classifier),
            Arc::new(VehicleStateStore::new()),
            config.tracker.clone(),
        ))
    }

    /// Create a service over the default zones.
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(ZoneClassifier::with_defaults()),
            Arc::new(VehicleStateStore::new()),
            TrackerConfig::default(),
        )
    }

    /// Ingest one ping and return the resulting zone-change event.
    ///
    /// # Errors
    ///
    /// Returns [`GeofenceError::InvalidInput`] for an empty vehicle id or a
    /// non-finite coordinate. Rejected pings leave all state untouched.
    pub fn ingest(&self, event: &LocationEvent) -> Result<ZoneChangeEvent, GeofenceError> {
        self.record(&event.vehicle_id, event.lat, event.lon, event.timestamp)
    }

    /// [`GeofenceService::ingest`] with the ping's fields passed separately.
    pub fn record(
        &self,
        vehicle_id: &str,
        lat: f64,
        lon: f64,
        timestamp: Timestamp,
    ) -> Result<ZoneChangeEvent, GeofenceError> {
        let coord = match validate(vehicle_id, lat, lon) {
            Ok(coord) => coord,
            Err(e) => {
                warn!(vehicle_id, lat, lon, error = %e, "Rejected location event");
                return Err(e.into());
            }
        };
        Ok(self.tracker.record(vehicle_id, coord.lat, coord.lon, timestamp))
    }

    /// Last known zone and update time for a vehicle.
    ///
    /// Never fails; unknown ids (including the empty string) report both
    /// fields as absent.
    pub fn status(&self, vehicle_id: &str) -> VehicleStatus {
        self.tracker.status(vehicle_id)
    }

    /// Status of every tracked vehicle, sorted by id.
    pub fn statuses(&self) -> Vec<VehicleStatus> {
        self.tracker.statuses()
    }

    /// Subscribe to zone transitions.
    pub fn subscribe(&self) -> broadcast::Receiver<ZoneChangeEvent> {
        self.tracker.subscribe()
    }

    /// The underlying tracker.
    pub fn tracker(&self) -> &TransitionTracker {
        &self.tracker
    }

    /// The zone classifier.
    pub fn classifier(&self) -> &ZoneClassifier {
        self.tracker.classifier()
    }
}

/// Check a ping's fields, failing fast on the first problem.
fn validate(vehicle_id: &str, lat: f64, lon: f64) -> Result<Coordinate, InvalidInput> {
    if vehicle_id.is_empty() {
        return Err(InvalidInput::EmptyVehicleId);
    }
    Ok(Coordinate::new(lat, lon)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::CoordError;
    use chrono::{TimeZone, Utc};

    fn ts(secs: i64) -> Timestamp {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_ingest_valid_event() {
        let service = GeofenceService::with_defaults();
        let event = service
            .ingest(&LocationEvent::new("TAXI_001", 12.90, 77.55, ts(1)))
            .unwrap();
        assert_eq!(event.vehicle_id, "TAXI_001");
        assert_eq!(event.entered_zone.as_deref(), Some("SUBURB"));
    }

    #[test]
    fn test_empty_vehicle_id_rejected() {
        let service = GeofenceService::with_defaults();
        let err = service.record("", 12.90, 77.55, ts(1)).unwrap_err();
        assert_eq!(err, GeofenceError::InvalidInput(InvalidInput::EmptyVehicleId));
        assert_eq!(service.tracker().tracked_vehicles(), 0);
    }

    #[test]
    fn test_whitespace_vehicle_id_accepted() {
        let service = GeofenceService::with_defaults();
        let event = service.record(" ", 12.96, 77.65, ts(1)).unwrap();
        assert_eq!(event.vehicle_id, " ");
        assert_eq!(service.status(" ").current_zone.as_deref(), Some("AIRPORT"));
    }

    #[test]
    fn test_non_finite_coordinates_rejected_without_state_change() {
        let service = GeofenceService::with_defaults();
        service.record("V1", 12.96, 77.65, ts(1)).unwrap();

        let err = service.record("V1", f64::NAN, 77.65, ts(2)).unwrap_err();
        assert!(matches!(
            err,
            GeofenceError::InvalidInput(InvalidInput::Coordinate(CoordError::NonFiniteLatitude(_)))
        ));

        let status = service.status("V1");
        assert_eq!(status.current_zone.as_deref(), Some("AIRPORT"));
        assert_eq!(status.last_update, Some(ts(1)));
    }

    #[test]
    fn test_status_never_fails_for_unknown_or_empty_id() {
        let service = GeofenceService::with_defaults();
        for id in ["NEW_VEHICLE", ""] {
            let status = service.status(id);
            assert_eq!(status.vehicle_id, id);
            assert!(status.current_zone.is_none());
            assert!(status.last_update.is_none());
        }
    }

    #[test]
    fn test_from_config_uses_configured_zones() {
        let config = GeofenceConfig::from_ini_str(
            "[zone.DEPOT]\nmin_lat = 0\nmax_lat = 1\nmin_lon = 0\nmax_lon = 1\n",
        )
        .unwrap();
        let service = GeofenceService::from_config(&config).unwrap();

        assert_eq!(service.classifier().len(), 1);
        let event = service.record("V1", 0.5, 0.5, ts(1)).unwrap();
        assert_eq!(event.current_zone.as_deref(), Some("DEPOT"));
    }

    #[test]
    fn test_subscribe_through_service() {
        let service = GeofenceService::with_defaults();
        let mut rx = service.subscribe();
        service.record("V1", 12.96, 77.65, ts(1)).unwrap();
        assert_eq!(rx.try_recv().unwrap().vehicle_id, "V1");
    }
}
