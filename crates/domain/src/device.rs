//! Device — a phone-number-identified trackable with a last known position.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;
use crate::time::Timestamp;

/// A tracked device, created lazily on the first location report for an
/// unseen phone number.
///
/// `phone_number` is unique across all devices and never changes once the
/// row exists; only the `last_known_*`, `last_location_update`, and
/// `is_online` fields are mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub phone_number: String,
    pub name: String,
    pub last_known_latitude: Option<f64>,
    pub last_known_longitude: Option<f64>,
    pub last_location_update: Option<Timestamp>,
    pub is_online: bool,
    pub created_at: Timestamp,
    /// Soft-delete flag. Nothing unsets it yet, but listings filter on it.
    pub is_active: bool,
}

impl Device {
    /// Default display name for a device auto-created from a report.
    #[must_use]
    pub fn auto_name(phone_number: &str) -> String {
        format!("Device {phone_number}")
    }

    /// The most recent known position, if the device has ever reported one.
    ///
    /// A coordinate of `0.0` is an ordinary position; only a NULL
    /// coordinate counts as absent.
    #[must_use]
    pub fn last_known_location(&self) -> Option<LastKnownLocation> {
        match (self.last_known_latitude, self.last_known_longitude) {
            (Some(latitude), Some(longitude)) => Some(LastKnownLocation {
                device_id: self.id,
                phone_number: self.phone_number.clone(),
                latitude,
                longitude,
                timestamp: self.last_location_update,
                is_online: self.is_online,
            }),
            _ => None,
        }
    }
}

/// Snapshot of a device's most recent known position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastKnownLocation {
    pub device_id: DeviceId,
    pub phone_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Option<Timestamp>,
    pub is_online: bool,
}
