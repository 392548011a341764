//! # geotrack-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/api` (`/api/location/share`,
//!   `/api/devices`, `/api/devices/{id}`, `/api/devices/{id}/location`,
//!   `/api/health`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into the
//!   `{success, …}` / `{success: false, message}` response envelope
//!
//! ## Dependency rule
//! Depends on `geotrack-app` (for port traits and services) and
//! `geotrack-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
