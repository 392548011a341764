//! Liveness probe handler.

use axum::Json;
use serde::Serialize;

use geotrack_domain::time::now;

/// Response body for the health endpoint.
#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /api/health`
///
/// Liveness only — does not touch the store.
pub async fn check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        timestamp: now().to_rfc3339(),
    })
}
