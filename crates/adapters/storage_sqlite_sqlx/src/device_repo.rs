//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use geotrack_app::ports::DeviceRepository;
use geotrack_domain::device::Device;
use geotrack_domain::error::GeotrackError;
use geotrack_domain::id::DeviceId;
use geotrack_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

fn parse_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let phone_number: String = row.try_get("phone_number")?;
        let name: String = row.try_get("name")?;
        let last_known_latitude: Option<f64> = row.try_get("last_known_latitude")?;
        let last_known_longitude: Option<f64> = row.try_get("last_known_longitude")?;
        let last_location_update: Option<String> = row.try_get("last_location_update")?;
        let is_online: bool = row.try_get("is_online")?;
        let created_at: String = row.try_get("created_at")?;
        let is_active: bool = row.try_get("is_active")?;

        let last_location_update = last_location_update
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;
        let created_at = parse_timestamp(&created_at)?;

        Ok(Self(Device {
            id: DeviceId::from_i64(id),
            phone_number,
            name,
            last_known_latitude,
            last_known_longitude,
            last_location_update,
            is_online,
            created_at,
            is_active,
        }))
    }
}

const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ACTIVE: &str = "SELECT * FROM devices WHERE is_active = 1 ORDER BY id";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GeotrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_active(&self) -> impl Future<Output = Result<Vec<Device>, GeotrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ACTIVE)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
