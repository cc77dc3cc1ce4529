use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted reservation record as the remote API represents it.
///
/// The remote is a document store: the identifier travels as `_id` and is
/// only present once the server has assigned it. Dates are date-only, no
/// time component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub customer_name: String,
    pub room_type: String,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

impl Booking {
    /// A booking without an id has not been acknowledged by the remote yet.
    pub fn is_persisted(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// What callers submit to create or update a booking: the same fields as
/// [`Booking`] minus the server-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub customer_name: String,
    pub room_type: String,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    #[serde(default)]
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_remote_document() {
        let doc = serde_json::json!({
            "_id": "66f2a1c4e9b0",
            "customerName": "Alice Smith",
            "roomType": "Suite",
            "checkinDate": "2024-06-01",
            "checkoutDate": "2024-06-05",
            "status": "pending",
        });

        let booking: Booking = serde_json::from_value(doc).unwrap();
        assert_eq!(booking.id.as_deref(), Some("66f2a1c4e9b0"));
        assert_eq!(booking.customer_name, "Alice Smith");
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(
            booking.checkin_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(booking.is_persisted());
    }

    #[test]
    fn test_status_defaults_to_confirmed() {
        let doc = serde_json::json!({
            "_id": "66f2a1c4e9b0",
            "customerName": "Alice Smith",
            "roomType": "Suite",
            "checkinDate": "2024-06-01",
            "checkoutDate": "2024-06-05",
        });

        let booking: Booking = serde_json::from_value(doc).unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_draft_serializes_camel_case_without_id() {
        let draft = BookingDraft {
            customer_name: "Alice Smith".to_string(),
            room_type: "Suite".to_string(),
            checkin_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            status: BookingStatus::Confirmed,
        };

        let value = serde_json::to_value(&draft).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("customerName"));
        assert!(obj.contains_key("checkinDate"));
        assert!(!obj.contains_key("_id"));
        assert_eq!(obj["status"], "confirmed");
    }

    #[test]
    fn test_unpersisted_booking_omits_id() {
        let booking = Booking {
            id: None,
            customer_name: "Bob Jones".to_string(),
            room_type: "Double".to_string(),
            checkin_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2024, 7, 12).unwrap(),
            status: BookingStatus::Cancelled,
        };

        assert!(!booking.is_persisted());
        let value = serde_json::to_value(&booking).unwrap();
        assert!(!value.as_object().unwrap().contains_key("_id"));
    }
}
