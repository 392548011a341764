//! JSON handler for location ingestion.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use geotrack_app::ports::{DeviceRepository, IngestionStore};
use geotrack_domain::error::{GeotrackError, ValidationError};
use geotrack_domain::report::LocationReport;
use geotrack_domain::time::{now, parse_client_timestamp};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for sharing a location.
///
/// Every field is optional at the decoding stage; required-field presence
/// is checked explicitly so a missing field yields a 400 naming it.
#[derive(Deserialize)]
pub struct ShareLocationRequest {
    pub phone_number: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Option<String>,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub bearing: Option<f64>,
}

/// Response body acknowledging an ingested report.
#[derive(Serialize)]
pub struct ShareLocationBody {
    pub success: bool,
    pub message: String,
    /// Server-side acknowledgement time, not the client's fix time.
    pub timestamp: String,
}

/// Possible responses from the share endpoint.
pub enum ShareResponse {
    Ok(Json<ShareLocationBody>),
}

impl IntoResponse for ShareResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::from(GeotrackError::from(ValidationError::MissingField(field))))
}

/// `POST /api/location/share`
pub async fn share<DR, IS>(
    State(state): State<AppState<DR, IS>>,
    Json(req): Json<ShareLocationRequest>,
) -> Result<ShareResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    let phone_number = require(req.phone_number, "phone_number")?;
    let latitude = require(req.latitude, "latitude")?;
    let longitude = require(req.longitude, "longitude")?;
    let raw_timestamp = require(req.timestamp, "timestamp")?;
    let timestamp = parse_client_timestamp(&raw_timestamp).map_err(GeotrackError::from)?;

    let mut builder = LocationReport::builder()
        .phone_number(phone_number)
        .latitude(latitude)
        .longitude(longitude)
        .timestamp(timestamp);
    if let Some(accuracy) = req.accuracy {
        builder = builder.accuracy(accuracy);
    }
    if let Some(speed) = req.speed {
        builder = builder.speed(speed);
    }
    if let Some(bearing) = req.bearing {
        builder = builder.bearing(bearing);
    }

    state.location_service.share_location(builder.build()).await?;

    Ok(ShareResponse::Ok(Json(ShareLocationBody {
        success: true,
        message: "Location shared successfully".to_string(),
        timestamp: now().to_rfc3339(),
    })))
}
