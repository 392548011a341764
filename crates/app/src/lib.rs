//! # geotrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — read access to devices
//!   - `IngestionStore` — the atomic upsert-plus-append ingestion write
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — list active devices, get one, get its last position
//!   - `LocationService` — record an incoming location report
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `geotrack-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
