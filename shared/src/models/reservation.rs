//! Reservation Model

use crate::status::ReservationStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub people_count: u32,
    /// Calendar date as served by the backend (e.g. "2026-08-12")
    pub date: String,
    /// Wall-clock time slot (e.g. "19:30")
    pub time: String,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_request: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_parses_backend_payload() {
        let json = r#"{
            "_id": "64f1c0ffee0000000000d001",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "+34600000000",
            "peopleCount": 4,
            "date": "2026-08-12",
            "time": "19:30",
            "status": "Confirmed",
            "specialRequest": "Window table",
            "createdAt": "2026-07-03T09:00:00Z"
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reservation.people_count, 4);
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.special_request.as_deref(), Some("Window table"));
    }

    #[test]
    fn special_request_is_optional() {
        let json = r#"{
            "_id": "d2", "name": "Grace", "peopleCount": 2,
            "date": "2026-08-13", "time": "20:00", "status": "pending",
            "createdAt": "2026-07-03T09:00:00Z"
        }"#;
        let reservation: Reservation = serde_json::from_str(json).unwrap();
        assert!(reservation.special_request.is_none());
        assert_eq!(reservation.status, ReservationStatus::Pending);
    }
}
