//! Order and reservation status machines
//!
//! Both machines are declared as static adjacency tables. The backend is the
//! authority on transition legality; these tables gate which next states a
//! screen may offer. The wire form is capitalized ("Pending"), the internal
//! and display form is lowercase ("pending"), and parsing accepts any casing
//! so a backend casing change cannot break the client.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for unrecognized status strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Lowercase internal form
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized wire form, the backend's canonical storage casing
    pub fn capitalized(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Legal next states from this state
    pub fn transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => &[OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => &[OrderStatus::Completed, OrderStatus::Cancelled],
            OrderStatus::Completed => &[],
            OrderStatus::Cancelled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.transitions().is_empty()
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.transitions().contains(&next)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.capitalized())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Reservation lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Pending,
        ReservationStatus::Confirmed,
        ReservationStatus::Completed,
        ReservationStatus::Cancelled,
    ];

    /// Lowercase internal form
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized wire form
    pub fn capitalized(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Completed => "Completed",
            ReservationStatus::Cancelled => "Cancelled",
        }
    }

    /// Legal next states from this state
    pub fn transitions(&self) -> &'static [ReservationStatus] {
        match self {
            ReservationStatus::Pending => {
                &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
            }
            ReservationStatus::Confirmed => {
                &[ReservationStatus::Completed, ReservationStatus::Cancelled]
            }
            ReservationStatus::Completed => &[],
            ReservationStatus::Cancelled => &[],
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.transitions().is_empty()
    }

    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        self.transitions().contains(&next)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReservationStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

impl Serialize for ReservationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.capitalized())
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_transition_table_matches_declared_machine() {
        assert_eq!(
            OrderStatus::Pending.transitions(),
            &[OrderStatus::Preparing, OrderStatus::Cancelled]
        );
        assert_eq!(
            OrderStatus::Preparing.transitions(),
            &[OrderStatus::Ready, OrderStatus::Cancelled]
        );
        assert_eq!(
            OrderStatus::Ready.transitions(),
            &[OrderStatus::Completed, OrderStatus::Cancelled]
        );
        assert!(OrderStatus::Completed.transitions().is_empty());
        assert!(OrderStatus::Cancelled.transitions().is_empty());
    }

    #[test]
    fn reservation_transition_table_matches_declared_machine() {
        assert_eq!(
            ReservationStatus::Pending.transitions(),
            &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
        );
        assert_eq!(
            ReservationStatus::Confirmed.transitions(),
            &[ReservationStatus::Completed, ReservationStatus::Cancelled]
        );
        assert!(ReservationStatus::Completed.transitions().is_empty());
        assert!(ReservationStatus::Cancelled.transitions().is_empty());
    }

    #[test]
    fn terminal_states_offer_no_transitions() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(ReservationStatus::Completed.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
        assert!(!ReservationStatus::Confirmed.is_terminal());
    }

    #[test]
    fn status_round_trips_through_wire_casing() {
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.capitalized().parse().unwrap();
            assert_eq!(parsed.as_str(), status.as_str());
        }
        for status in ReservationStatus::ALL {
            let parsed: ReservationStatus = status.capitalized().parse().unwrap();
            assert_eq!(parsed.as_str(), status.as_str());
        }
    }

    #[test]
    fn parse_accepts_any_casing() {
        assert_eq!("PREPARING".parse::<OrderStatus>().unwrap(), OrderStatus::Preparing);
        assert_eq!("ready".parse::<OrderStatus>().unwrap(), OrderStatus::Ready);
        assert_eq!("cOnFiRmEd".parse::<ReservationStatus>().unwrap(), ReservationStatus::Confirmed);
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn serde_emits_capitalized_and_accepts_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"Preparing\"");
        let back: OrderStatus = serde_json::from_str("\"preparing\"").unwrap();
        assert_eq!(back, OrderStatus::Preparing);
    }

    #[test]
    fn can_transition_follows_table() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(ReservationStatus::Confirmed.can_transition_to(ReservationStatus::Completed));
        assert!(!ReservationStatus::Pending.can_transition_to(ReservationStatus::Completed));
    }
}
