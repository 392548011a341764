//! Location update — one immutable historical position report.

use serde::{Deserialize, Serialize};

use crate::id::{DeviceId, LocationUpdateId};
use crate::time::Timestamp;

/// A single recorded position report tied to a device.
///
/// Rows are append-only: once written, an update is never edited or
/// deleted. `timestamp` is the fix's capture time as supplied by the
/// client; `created_at` is the server-side ingestion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub id: LocationUpdateId,
    pub device_id: DeviceId,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Timestamp,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub bearing: Option<f64>,
    pub created_at: Timestamp,
}
