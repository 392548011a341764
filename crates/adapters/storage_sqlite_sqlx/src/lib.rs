//! # geotrack-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the port traits defined in `geotrack-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `geotrack-app` (for port traits) and `geotrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod device_repo;
pub mod error;
pub mod ingestion_store;
pub mod pool;

pub use device_repo::SqliteDeviceRepository;
pub use ingestion_store::SqliteIngestionStore;
pub use pool::{Config, Database};
