//! JSON handlers for device queries.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use geotrack_app::ports::{DeviceRepository, IngestionStore};
use geotrack_domain::device::{Device, LastKnownLocation};
use geotrack_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// A device as exposed over the API.
#[derive(Serialize)]
pub struct DeviceBody {
    pub id: DeviceId,
    pub phone_number: String,
    pub name: String,
    pub last_known_latitude: Option<f64>,
    pub last_known_longitude: Option<f64>,
    pub last_location_update: Option<String>,
    pub is_online: bool,
    pub created_at: String,
}

impl From<Device> for DeviceBody {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            phone_number: device.phone_number,
            name: device.name,
            last_known_latitude: device.last_known_latitude,
            last_known_longitude: device.last_known_longitude,
            last_location_update: device.last_location_update.map(|ts| ts.to_rfc3339()),
            is_online: device.is_online,
            created_at: device.created_at.to_rfc3339(),
        }
    }
}

/// A last known position as exposed over the API.
#[derive(Serialize)]
pub struct LocationBody {
    pub device_id: DeviceId,
    pub phone_number: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: Option<String>,
    pub is_online: bool,
}

impl From<LastKnownLocation> for LocationBody {
    fn from(location: LastKnownLocation) -> Self {
        Self {
            device_id: location.device_id,
            phone_number: location.phone_number,
            latitude: location.latitude,
            longitude: location.longitude,
            timestamp: location.timestamp.map(|ts| ts.to_rfc3339()),
            is_online: location.is_online,
        }
    }
}

/// Response body for the list endpoint.
#[derive(Serialize)]
pub struct DeviceListBody {
    pub success: bool,
    pub devices: Vec<DeviceBody>,
}

/// Response body for the get endpoint.
#[derive(Serialize)]
pub struct DeviceGetBody {
    pub success: bool,
    pub device: DeviceBody,
}

/// Response body for the location endpoint.
#[derive(Serialize)]
pub struct DeviceLocationBody {
    pub success: bool,
    pub location: LocationBody,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<DeviceListBody>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<DeviceGetBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the location endpoint.
pub enum LocationResponse {
    Ok(Json<DeviceLocationBody>),
}

impl IntoResponse for LocationResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/devices`
pub async fn list<DR, IS>(State(state): State<AppState<DR, IS>>) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(DeviceListBody {
        success: true,
        devices: devices.into_iter().map(DeviceBody::from).collect(),
    })))
}

/// `GET /api/devices/{id}`
pub async fn get<DR, IS>(
    State(state): State<AppState<DR, IS>>,
    Path(id): Path<DeviceId>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    let device = state.device_service.get_device(id).await?;
    Ok(GetResponse::Ok(Json(DeviceGetBody {
        success: true,
        device: device.into(),
    })))
}

/// `GET /api/devices/{id}/location`
pub async fn location<DR, IS>(
    State(state): State<AppState<DR, IS>>,
    Path(id): Path<DeviceId>,
) -> Result<LocationResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    let location = state.device_service.get_device_location(id).await?;
    Ok(LocationResponse::Ok(Json(DeviceLocationBody {
        success: true,
        location: location.into(),
    })))
}
