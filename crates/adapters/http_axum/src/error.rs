//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use geotrack_domain::error::GeotrackError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

/// Maps [`GeotrackError`] to an HTTP response with appropriate status code.
pub struct ApiError(GeotrackError);

impl From<GeotrackError> for ApiError {
    fn from(err: GeotrackError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            GeotrackError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            GeotrackError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            GeotrackError::NoLocationData => (StatusCode::NOT_FOUND, self.0.to_string()),
            GeotrackError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
