//! Check-in event domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use punchcard_core::{CheckinId, CustomerId, POINTS_PER_CHECKIN, Points, iso_millis};

/// An immutable record of a customer's visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckinEvent {
    /// Creation time in milliseconds since the epoch.
    pub id: CheckinId,
    /// Customer who checked in.
    #[serde(rename = "clienteId")]
    pub customer_id: CustomerId,
    /// When the check-in happened.
    #[serde(rename = "data", with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Points awarded by this check-in.
    #[serde(rename = "pontos")]
    pub points_awarded: Points,
}

impl CheckinEvent {
    /// Create a check-in worth [`POINTS_PER_CHECKIN`] at the given time.
    #[must_use]
    pub fn new(customer_id: CustomerId, at: DateTime<Utc>) -> Self {
        Self {
            id: CheckinId::from_timestamp(&at),
            customer_id,
            timestamp: at,
            points_awarded: POINTS_PER_CHECKIN,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serializes_with_wire_names() {
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap();
        let event = CheckinEvent::new(CustomerId::parse("42").unwrap(), at);

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "id": at.timestamp_millis(),
                "clienteId": "42",
                "data": "2026-10-15T09:30:00.000Z",
                "pontos": 10
            })
        );
    }
}
