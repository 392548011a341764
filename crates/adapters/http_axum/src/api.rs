//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod location;

use axum::Router;
use axum::routing::{get, post};

use geotrack_app::ports::{DeviceRepository, IngestionStore};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<DR, IS>() -> Router<AppState<DR, IS>>
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/location/share", post(location::share::<DR, IS>))
        .route("/devices", get(devices::list::<DR, IS>))
        .route("/devices/{id}", get(devices::get::<DR, IS>))
        .route("/devices/{id}/location", get(devices::location::<DR, IS>))
        .route("/health", get(health::check))
}
