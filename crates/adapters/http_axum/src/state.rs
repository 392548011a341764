//! Shared application state for axum handlers.

use std::sync::Arc;

use geotrack_app::ports::{DeviceRepository, IngestionStore};
use geotrack_app::services::device_service::DeviceService;
use geotrack_app::services::location_service::LocationService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and store types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<DR, IS> {
    /// Device query service.
    pub device_service: Arc<DeviceService<DR>>,
    /// Location ingestion service.
    pub location_service: Arc<LocationService<IS>>,
}

impl<DR, IS> Clone for AppState<DR, IS> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            location_service: Arc::clone(&self.location_service),
        }
    }
}

impl<DR, IS> AppState<DR, IS>
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(device_service: DeviceService<DR>, location_service: LocationService<IS>) -> Self {
        Self {
            device_service: Arc::new(device_service),
            location_service: Arc::new(location_service),
        }
    }
}
