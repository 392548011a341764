//! Storage port — repository traits for persistence.

use std::future::Future;

use geotrack_domain::device::Device;
use geotrack_domain::error::GeotrackError;
use geotrack_domain::id::DeviceId;
use geotrack_domain::location_update::LocationUpdate;
use geotrack_domain::report::LocationReport;

/// Read access to persisted [`Device`]s.
pub trait DeviceRepository {
    /// Get a device by its unique identifier.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GeotrackError>> + Send;

    /// Get all active (non-soft-deleted) devices, in insertion order.
    fn get_active(&self) -> impl Future<Output = Result<Vec<Device>, GeotrackError>> + Send;
}

/// The ingestion write path.
///
/// A single `record` call covers the whole multi-row write: find or create
/// the device for the report's phone number, overwrite its last-known
/// position, mark it online, and append one history row. Implementations
/// must apply all of it atomically — on failure no row may survive.
pub trait IngestionStore {
    /// Durably record one location report, returning the appended history row.
    fn record(
        &self,
        report: LocationReport,
    ) -> impl Future<Output = Result<LocationUpdate, GeotrackError>> + Send;
}
