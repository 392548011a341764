//! `SQLite` implementation of [`IngestionStore`].
//!
//! The whole ingestion write — device find-or-create, last-known-position
//! overwrite, history append — runs inside one transaction. Dropping the
//! transaction on any error rolls the call back completely, so concurrent
//! reports for the same phone number keep plain last-writer-wins semantics.

use std::future::Future;

use sqlx::{Row, SqlitePool};

use geotrack_app::ports::IngestionStore;
use geotrack_domain::device::Device;
use geotrack_domain::error::GeotrackError;
use geotrack_domain::id::{DeviceId, LocationUpdateId};
use geotrack_domain::location_update::LocationUpdate;
use geotrack_domain::report::LocationReport;
use geotrack_domain::time::now;

use crate::error::StorageError;

const SELECT_ID_BY_PHONE: &str = "SELECT id FROM devices WHERE phone_number = ?";

const INSERT_DEVICE: &str = "
    INSERT INTO devices (phone_number, name, is_online, created_at, is_active)
    VALUES (?, ?, 1, ?, 1)
";

const UPDATE_LAST_KNOWN: &str = "
    UPDATE devices
    SET last_known_latitude = ?, last_known_longitude = ?,
        last_location_update = ?, is_online = 1
    WHERE id = ?
";

const INSERT_UPDATE: &str = "
    INSERT INTO location_updates
        (device_id, latitude, longitude, timestamp, accuracy, speed, bearing, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// `SQLite`-backed ingestion store.
pub struct SqliteIngestionStore {
    pool: SqlitePool,
}

impl SqliteIngestionStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl IngestionStore for SqliteIngestionStore {
    fn record(
        &self,
        report: LocationReport,
    ) -> impl Future<Output = Result<LocationUpdate, GeotrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let existing = sqlx::query(SELECT_ID_BY_PHONE)
                .bind(&report.phone_number)
                .fetch_optional(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let device_id = match existing {
                Some(row) => row.try_get("id").map_err(StorageError::from)?,
                None => sqlx::query(INSERT_DEVICE)
                    .bind(&report.phone_number)
                    .bind(Device::auto_name(&report.phone_number))
                    .bind(now().to_rfc3339())
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?
                    .last_insert_rowid(),
            };

            sqlx::query(UPDATE_LAST_KNOWN)
                .bind(report.latitude)
                .bind(report.longitude)
                .bind(report.timestamp.to_rfc3339())
                .bind(device_id)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let created_at = now();
            let update_id = sqlx::query(INSERT_UPDATE)
                .bind(device_id)
                .bind(report.latitude)
                .bind(report.longitude)
                .bind(report.timestamp.to_rfc3339())
                .bind(report.accuracy)
                .bind(report.speed)
                .bind(report.bearing)
                .bind(created_at.to_rfc3339())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?
                .last_insert_rowid();

            tx.commit().await.map_err(StorageError::from)?;

            Ok(LocationUpdate {
                id: LocationUpdateId::from_i64(update_id),
                device_id: DeviceId::from_i64(device_id),
                latitude: report.latitude,
                longitude: report.longitude,
                timestamp: report.timestamp,
                accuracy: report.accuracy,
                speed: report.speed,
                bearing: report.bearing,
                created_at,
            })
        }
    }
}
