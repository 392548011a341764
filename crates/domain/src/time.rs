//! Time and timestamp helpers.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::ValidationError;

/// UTC timestamp used for `created_at`, `last_location_update`, fix capture
/// times, etc.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a client-supplied fix timestamp.
///
/// Accepts RFC 3339 (including a trailing `Z` UTC designator) and naive
/// `YYYY-MM-DDTHH:MM:SS[.ffffff]` values, which are treated as UTC.
///
/// # Errors
///
/// Returns [`ValidationError::MalformedTimestamp`] when the value parses as
/// neither form.
pub fn parse_client_timestamp(value: &str) -> Result<Timestamp, ValidationError> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.to_utc());
    }
    value
        .parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::MalformedTimestamp {
            value: value.to_string(),
        })
}
