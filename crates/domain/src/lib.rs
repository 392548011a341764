//! # geotrack-domain
//!
//! Pure domain model for the geotrack location-sharing backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Devices** (phone-number-identified trackables with a last
//!   known position)
//! - Define **Location reports** (validated incoming GPS fixes)
//! - Define **Location updates** (immutable, append-only position history)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod location_update;
pub mod report;
