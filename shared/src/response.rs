//! API response wrappers
//!
//! The backend wraps every list in a `{ success, <plural>, currentPage,
//! totalPages, ... }` shell. Fields are defaulted so a minimal shell still
//! parses.

use crate::models::{Category, MenuItem, Order, Reservation, Review};
use serde::{Deserialize, Serialize};

/// Generic mutation acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `GET /admin/menu/categories` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Paginated items listing for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Paginated orders listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_orders: u64,
}

/// Single-order envelope (`GET /admin/orders/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEnvelope {
    #[serde(default)]
    pub success: bool,
    pub order: Order,
}

/// Paginated reservations listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

/// Reservation detail as it arrives on the wire: wrapped or flat,
/// depending on backend revision. Envelope probed first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReservationResponse {
    Wrapped {
        reservation: Reservation,
    },
    Flat(Reservation),
}

impl ReservationResponse {
    pub fn into_inner(self) -> Reservation {
        match self {
            ReservationResponse::Wrapped { reservation } => reservation,
            ReservationResponse::Flat(reservation) => reservation,
        }
    }
}

/// Paginated reviews listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsPage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}

macro_rules! impl_has_next {
    ($($page:ty),+) => {
        $(impl $page {
            /// Whether a further page exists after the current one
            pub fn has_next(&self) -> bool {
                self.current_page < self.total_pages
            }
        })+
    };
}

impl_has_next!(ItemsPage, OrdersPage, ReservationsPage, ReviewsPage);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_page_parses_backend_shell() {
        let json = r#"{
            "success": true,
            "orders": [],
            "currentPage": 2,
            "totalPages": 5,
            "totalOrders": 93
        }"#;
        let page: OrdersPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_orders, 93);
        assert!(page.has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        let json = r#"{"reviews": [], "currentPage": 3, "totalPages": 3}"#;
        let page: ReviewsPage = serde_json::from_str(json).unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn minimal_shell_still_parses() {
        let page: ReservationsPage = serde_json::from_str(r#"{"reservations": []}"#).unwrap();
        assert_eq!(page.current_page, 1);
        assert!(!page.has_next());
    }

    #[test]
    fn reservation_detail_accepts_wrapped_and_flat() {
        let flat = r#"{
            "_id": "d1", "name": "Ada", "peopleCount": 2,
            "date": "2026-08-12", "time": "19:30", "status": "Pending",
            "createdAt": "2026-07-03T09:00:00Z"
        }"#;
        let wrapped = format!(r#"{{"success": true, "reservation": {flat}}}"#);

        let a: ReservationResponse = serde_json::from_str(flat).unwrap();
        let b: ReservationResponse = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(a.into_inner().id, "d1");
        assert_eq!(b.into_inner().id, "d1");
    }
}
