//! End-to-end smoke tests for the full geotrackd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real
//! repos, real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound. The helper also
//! hands back the pool so row-level effects can be asserted directly.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use geotrack_adapter_http_axum::router;
use geotrack_adapter_http_axum::state::AppState;
use geotrack_adapter_storage_sqlite_sqlx::{Config, SqliteDeviceRepository, SqliteIngestionStore};
use geotrack_app::services::device_service::DeviceService;
use geotrack_app::services::location_service::LocationService;
use http_body_util::BodyExt;
use sqlx::{Row, SqlitePool};
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> (axum::Router, SqlitePool) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let pool = db.pool().clone();

    let device_repo = SqliteDeviceRepository::new(pool.clone());
    let ingestion_store = SqliteIngestionStore::new(pool.clone());

    let state = AppState::new(
        DeviceService::new(device_repo),
        LocationService::new(ingestion_store),
    );

    (router::build(state), pool)
}

fn share_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/location/share")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn table_count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query(&format!("SELECT COUNT(*) AS n FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
        .try_get("n")
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_report_healthy_when_health_check_called() {
    let (app, _pool) = app().await;

    let resp = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

// ---------------------------------------------------------------------------
// Ingestion: upsert-on-first-contact and append-only history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_device_and_history_row_on_first_report() {
    let (app, pool) = app().await;

    let resp = app
        .clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":37.7,"longitude":-122.4,"timestamp":"2024-01-01T12:00:00Z","accuracy":5.0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Location shared successfully");

    assert_eq!(table_count(&pool, "devices").await, 1);
    assert_eq!(table_count(&pool, "location_updates").await, 1);

    let resp = app.oneshot(get_request("/api/devices")).await.unwrap();
    let body = body_json(resp).await;
    let device = &body["devices"][0];
    assert_eq!(device["phone_number"], "+15551234");
    assert_eq!(device["name"], "Device +15551234");
    assert_eq!(device["last_known_latitude"], 37.7);
    assert_eq!(device["last_known_longitude"], -122.4);
    assert_eq!(device["is_online"], true);
}

#[tokio::test]
async fn should_keep_one_device_and_two_rows_after_second_report() {
    let (app, pool) = app().await;

    app.clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":37.7,"longitude":-122.4,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();
    let resp = app
        .clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":40.7,"longitude":-74.0,"timestamp":"2024-01-01T12:05:00Z"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(table_count(&pool, "devices").await, 1);
    assert_eq!(table_count(&pool, "location_updates").await, 2);

    let resp = app.oneshot(get_request("/api/devices")).await.unwrap();
    let body = body_json(resp).await;
    assert_eq!(body["devices"].as_array().unwrap().len(), 1);
    assert_eq!(body["devices"][0]["id"], 1);
    assert_eq!(body["devices"][0]["last_known_latitude"], 40.7);
    assert_eq!(body["devices"][0]["last_known_longitude"], -74.0);
}

#[tokio::test]
async fn should_serve_last_ingested_position_through_location_endpoint() {
    let (app, _pool) = app().await;

    app.clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":60.17,"longitude":24.94,"timestamp":"2024-06-15T08:30:00Z"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(get_request("/api/devices/1/location"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    let location = &body["location"];
    assert_eq!(location["device_id"], 1);
    assert_eq!(location["phone_number"], "+15551234");
    assert_eq!(location["latitude"], 60.17);
    assert_eq!(location["longitude"], 24.94);
    assert_eq!(location["timestamp"], "2024-06-15T08:30:00+00:00");
    assert_eq!(location["is_online"], true);
}

// ---------------------------------------------------------------------------
// Ingestion: validation failures write nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_reject_report_missing_any_required_field() {
    let payloads = [
        (
            "phone_number",
            r#"{"latitude":37.7,"longitude":-122.4,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ),
        (
            "latitude",
            r#"{"phone_number":"+15551234","longitude":-122.4,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ),
        (
            "longitude",
            r#"{"phone_number":"+15551234","latitude":37.7,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ),
        (
            "timestamp",
            r#"{"phone_number":"+15551234","latitude":37.7,"longitude":-122.4}"#,
        ),
    ];

    for (field, payload) in payloads {
        let (app, pool) = app().await;

        let resp = app.oneshot(share_request(payload)).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field: {field}");
        let body = body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            format!("Missing required field: {field}")
        );
        assert_eq!(table_count(&pool, "devices").await, 0);
        assert_eq!(table_count(&pool, "location_updates").await, 0);
    }
}

#[tokio::test]
async fn should_reject_malformed_timestamp_without_writing() {
    let (app, pool) = app().await;

    let resp = app
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":37.7,"longitude":-122.4,"timestamp":"01/01/2024 noon"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(table_count(&pool, "devices").await, 0);
    assert_eq!(table_count(&pool, "location_updates").await, 0);
}

// ---------------------------------------------------------------------------
// Device queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_unknown_device_id() {
    let (app, _pool) = app().await;

    let resp = app
        .clone()
        .oneshot(get_request("/api/devices/42"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app
        .oneshot(get_request("/api/devices/42/location"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_get_single_device_by_id() {
    let (app, _pool) = app().await;

    app.clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":37.7,"longitude":-122.4,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get_request("/api/devices/1")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["device"]["id"], 1);
    assert_eq!(body["device"]["phone_number"], "+15551234");
}

#[tokio::test]
async fn should_exclude_soft_deleted_devices_from_listing() {
    let (app, pool) = app().await;

    app.clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15550001","latitude":37.7,"longitude":-122.4,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15550002","latitude":40.7,"longitude":-74.0,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();

    sqlx::query("UPDATE devices SET is_active = 0 WHERE phone_number = ?")
        .bind("+15550002")
        .execute(&pool)
        .await
        .unwrap();

    let resp = app.oneshot(get_request("/api/devices")).await.unwrap();
    let body = body_json(resp).await;
    let devices = body["devices"].as_array().unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["phone_number"], "+15550001");
}

#[tokio::test]
async fn should_return_no_location_data_for_device_without_position() {
    let (app, pool) = app().await;

    sqlx::query(
        "INSERT INTO devices (phone_number, name, is_online, created_at, is_active)
         VALUES (?, ?, 0, ?, 1)",
    )
    .bind("+15551234")
    .bind("Device +15551234")
    .bind("2024-01-01T00:00:00+00:00")
    .execute(&pool)
    .await
    .unwrap();

    let resp = app
        .oneshot(get_request("/api/devices/1/location"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No location data available");
}

#[tokio::test]
async fn should_treat_zero_coordinates_as_a_real_position() {
    let (app, _pool) = app().await;

    app.clone()
        .oneshot(share_request(
            r#"{"phone_number":"+15551234","latitude":0.0,"longitude":0.0,"timestamp":"2024-01-01T12:00:00Z"}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(get_request("/api/devices/1/location"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["location"]["latitude"], 0.0);
    assert_eq!(body["location"]["longitude"], 0.0);
}

// ---------------------------------------------------------------------------
// Cross-origin access
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_answer_preflight_from_any_origin() {
    let (app, _pool) = app().await;

    let resp = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/location/share")
                .header("origin", "https://tracker.example")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}
