//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GeotrackError`] via `#[from]`; the HTTP adapter maps the taxonomy to
//! status codes at the boundary.

/// Base error enum covering every failure the core can surface.
#[derive(Debug, thiserror::Error)]
pub enum GeotrackError {
    /// The request was missing or carried malformed input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced device does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The device exists but has never reported a position.
    #[error("No location data available")]
    NoLocationData,

    /// The underlying store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input validation failures, surfaced as client errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent from the request body.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The client-supplied timestamp could not be parsed.
    #[error("invalid timestamp: {value}")]
    MalformedTimestamp {
        /// The raw value as received.
        value: String,
    },
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Which kind of entity was looked up.
    pub entity: &'static str,
    /// The identifier that matched nothing.
    pub id: String,
}
