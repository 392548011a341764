//! Location report — a validated incoming GPS fix.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// One incoming fix for a phone-number-identified device.
///
/// Field presence and timestamp syntax are checked at the transport
/// boundary; a constructed report is always complete. The optional fix
/// metadata passes through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationReport {
    pub phone_number: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Capture time of the fix, as supplied by the client.
    pub timestamp: Timestamp,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub bearing: Option<f64>,
}

impl LocationReport {
    /// Create a builder for constructing a [`LocationReport`].
    #[must_use]
    pub fn builder() -> LocationReportBuilder {
        LocationReportBuilder::default()
    }
}

/// Step-by-step builder for [`LocationReport`].
#[derive(Debug, Default)]
pub struct LocationReportBuilder {
    phone_number: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timestamp: Option<Timestamp>,
    accuracy: Option<f64>,
    speed: Option<f64>,
    bearing: Option<f64>,
}

impl LocationReportBuilder {
    #[must_use]
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use]
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.latitude = Some(latitude);
        self
    }

    #[must_use]
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.longitude = Some(longitude);
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = Some(accuracy);
        self
    }

    #[must_use]
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    #[must_use]
    pub fn bearing(mut self, bearing: f64) -> Self {
        self.bearing = Some(bearing);
        self
    }

    /// Consume the builder and return a [`LocationReport`].
    #[must_use]
    pub fn build(self) -> LocationReport {
        LocationReport {
            phone_number: self.phone_number.unwrap_or_default(),
            latitude: self.latitude.unwrap_or_default(),
            longitude: self.longitude.unwrap_or_default(),
            timestamp: self.timestamp.unwrap_or_else(crate::time::now),
            accuracy: self.accuracy,
            speed: self.speed,
            bearing: self.bearing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::now;

    #[test]
    fn should_build_report_with_all_fields() {
        let timestamp = now();
        let report = LocationReport::builder()
            .phone_number("+15551234")
            .latitude(37.7)
            .longitude(-122.4)
            .timestamp(timestamp)
            .accuracy(5.0)
            .speed(1.2)
            .bearing(270.0)
            .build();

        assert_eq!(report.phone_number, "+15551234");
        assert_eq!(report.timestamp, timestamp);
        assert_eq!(report.accuracy, Some(5.0));
        assert_eq!(report.speed, Some(1.2));
        assert_eq!(report.bearing, Some(270.0));
    }

    #[test]
    fn should_leave_optional_fields_absent_when_not_provided() {
        let report = LocationReport::builder()
            .phone_number("+15551234")
            .latitude(37.7)
            .longitude(-122.4)
            .timestamp(now())
            .build();

        assert_eq!(report.accuracy, None);
        assert_eq!(report.speed, None);
        assert_eq!(report.bearing, None);
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let report = LocationReport::builder()
            .phone_number("+15551234")
            .latitude(0.0)
            .longitude(0.0)
            .timestamp(now())
            .build();

        let json = serde_json::to_string(&report).unwrap();
        let parsed: LocationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.phone_number, report.phone_number);
        assert_eq!(parsed.timestamp, report.timestamp);
    }
}
