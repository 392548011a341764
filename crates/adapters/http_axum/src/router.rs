//! Axum router assembly.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use geotrack_app::ports::{DeviceRepository, IngestionStore};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the JSON API under `/api`. Includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem, and a permissive [`CorsLayer`] so browser clients on any
/// origin can reach the API.
pub fn build<DR, IS>(state: AppState<DR, IS>) -> Router
where
    DR: DeviceRepository + Send + Sync + 'static,
    IS: IngestionStore + Send + Sync + 'static,
{
    Router::new()
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
