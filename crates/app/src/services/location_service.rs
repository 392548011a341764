//! Location service — the ingestion use-case.

use geotrack_domain::error::GeotrackError;
use geotrack_domain::location_update::LocationUpdate;
use geotrack_domain::report::LocationReport;

use crate::ports::IngestionStore;

/// Application service for recording incoming location reports.
pub struct LocationService<S> {
    store: S,
}

impl<S: IngestionStore> LocationService<S> {
    /// Create a new service backed by the given ingestion store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record one location report: upsert the device for the report's phone
    /// number and append a history row, as a single atomic write.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store; on failure no row
    /// of the write survives.
    #[tracing::instrument(skip(self, report), fields(phone_number = %report.phone_number))]
    pub async fn share_location(
        &self,
        report: LocationReport,
    ) -> Result<LocationUpdate, GeotrackError> {
        self.store.record(report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geotrack_domain::id::{DeviceId, LocationUpdateId};
    use geotrack_domain::time::now;
    use std::future::Future;
    use std::sync::Mutex;

    struct RecordingStore {
        recorded: Mutex<Vec<LocationReport>>,
    }

    impl Default for RecordingStore {
        fn default() -> Self {
            Self {
                recorded: Mutex::new(Vec::new()),
            }
        }
    }

    impl IngestionStore for RecordingStore {
        fn record(
            &self,
            report: LocationReport,
        ) -> impl Future<Output = Result<LocationUpdate, GeotrackError>> + Send {
            let mut recorded = self.recorded.lock().unwrap();
            let update = LocationUpdate {
                id: LocationUpdateId::from_i64(i64::try_from(recorded.len()).unwrap() + 1),
                device_id: DeviceId::from_i64(1),
                latitude: report.latitude,
                longitude: report.longitude,
                timestamp: report.timestamp,
                accuracy: report.accuracy,
                speed: report.speed,
                bearing: report.bearing,
                created_at: now(),
            };
            recorded.push(report);
            async { Ok(update) }
        }
    }

    fn test_report() -> LocationReport {
        LocationReport::builder()
            .phone_number("+15551234")
            .latitude(37.7)
            .longitude(-122.4)
            .timestamp(now())
            .accuracy(5.0)
            .build()
    }

    #[tokio::test]
    async fn should_record_report_and_return_appended_update() {
        let svc = LocationService::new(RecordingStore::default());

        let update = svc.share_location(test_report()).await.unwrap();
        assert_eq!(update.id, LocationUpdateId::from_i64(1));
        assert!((update.latitude - 37.7).abs() < f64::EPSILON);
        assert_eq!(update.accuracy, Some(5.0));
    }

    #[tokio::test]
    async fn should_append_one_row_per_report() {
        let svc = LocationService::new(RecordingStore::default());

        svc.share_location(test_report()).await.unwrap();
        let second = svc.share_location(test_report()).await.unwrap();

        assert_eq!(second.id, LocationUpdateId::from_i64(2));
    }
}
