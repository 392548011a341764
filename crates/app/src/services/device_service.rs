//! Device service — read use-cases for devices and their positions.

use geotrack_domain::device::{Device, LastKnownLocation};
use geotrack_domain::error::{GeotrackError, NotFoundError};
use geotrack_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device queries.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all active devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, GeotrackError> {
        self.repo.get_active().await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`GeotrackError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, GeotrackError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Fetch the last known position of a device.
    ///
    /// # Errors
    ///
    /// Returns [`GeotrackError::NotFound`] when the device does not exist,
    /// [`GeotrackError::NoLocationData`] when it exists but has never
    /// reported a position, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device_location(
        &self,
        id: DeviceId,
    ) -> Result<LastKnownLocation, GeotrackError> {
        let device = self.get_device(id).await?;
        device
            .last_known_location()
            .ok_or(GeotrackError::NoLocationData)
    }
}
