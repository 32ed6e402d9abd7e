//! Zone model and classifier.
//!
//! Zones are named axis-aligned rectangles configured at startup. The
//! [`ZoneClassifier`] maps a coordinate to the first zone that contains it.
//!
//! # Example
//!
//! ```
//! use geofence::zone::{Zone, ZoneClassifier};
//!
//! let classifier = ZoneClassifier::new(vec![
//!     Zone::new("AIRPORT", 12.94, 13.00, 77.60, 77.70).unwrap(),
//!     Zone::new("SUBURB", 12.85, 12.95, 77.50, 77.60).unwrap(),
//! ])
//! .unwrap();
//!
//! assert_eq!(classifier.classify(12.96, 77.65), Some("AIRPORT"));
//! assert_eq!(classifier.classify(0.0, 0.0), None);
//! ```

mod classifier;
mod model;

pub use classifier::{default_zones, ZoneClassifier};
pub use model::{Zone, ZoneError};
