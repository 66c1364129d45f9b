//! Per-screen view models
//!
//! Reshapes wire payloads into what the screens consume. Statuses display
//! through the enums' lowercase form, and `_id` renaming is already
//! absorbed by the wire types, so the work left here is the order
//! line-item resolution, list summaries and overview normalization.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use shared::models::{DailyOrders, ItemRef, Order, OrderLine, Overview};
use shared::response::{OrdersPage, ReservationsPage};
use shared::status::{OrderStatus, ReservationStatus};

/// Image reference substituted when an item carries none
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// One row of the orders list screen
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items_count: usize,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            status: order.status,
            total_amount: order.total_amount,
            created_at: order.created_at,
            items_count: order.items.len(),
        }
    }
}

/// Rows for the orders list screen
pub fn order_summaries(page: &OrdersPage) -> Vec<OrderSummary> {
    page.orders.iter().map(OrderSummary::from).collect()
}

/// A resolved order line as the detail screen renders it
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemView {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub image_url: String,
    pub is_deleted: bool,
}

/// Resolve one order line against the three wire shapes its item
/// reference can take. A reference that cannot be resolved must still
/// render, so the fallbacks synthesize a placeholder row instead of
/// failing.
pub fn resolve_line(line: &OrderLine, index: usize) -> LineItemView {
    match &line.item {
        // Bare identifier string: population failed upstream
        Some(ItemRef::Id(raw_id)) => LineItemView {
            id: if raw_id.is_empty() {
                line.id.clone().unwrap_or_else(|| format!("item-{index}"))
            } else {
                raw_id.clone()
            },
            name: "Item Not Found".to_string(),
            price: Decimal::ZERO,
            quantity: line.quantity,
            image_url: PLACEHOLDER_IMAGE.to_string(),
            is_deleted: true,
        },
        // Absent reference: the item was deleted server-side
        None => LineItemView {
            id: line.id.clone().unwrap_or_else(|| format!("deleted-{index}")),
            name: "Deleted Item".to_string(),
            price: Decimal::ZERO,
            quantity: line.quantity,
            image_url: PLACEHOLDER_IMAGE.to_string(),
            is_deleted: true,
        },
        // Populated object: extract, defaulting price and image
        Some(ItemRef::Populated(snapshot)) => LineItemView {
            id: snapshot
                .id
                .clone()
                .or_else(|| line.id.clone())
                .unwrap_or_else(|| format!("item-{index}")),
            name: snapshot
                .name
                .clone()
                .unwrap_or_else(|| "Unknown Item".to_string()),
            price: snapshot.price.unwrap_or(Decimal::ZERO),
            quantity: line.quantity,
            image_url: snapshot
                .image
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            is_deleted: false,
        },
    }
}

/// The order detail screen's shape
#[derive(Debug, Clone)]
pub struct OrderDetailView {
    pub id: String,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<LineItemView>,
}

impl From<&Order> for OrderDetailView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            status: order.status,
            total_amount: order.total_amount,
            created_at: order.created_at,
            items: order
                .items
                .iter()
                .enumerate()
                .map(|(index, line)| resolve_line(line, index))
                .collect(),
        }
    }
}

impl OrderDetailView {
    /// Next states the status control may offer; empty disables the control
    pub fn status_options(&self) -> &'static [OrderStatus] {
        self.status.transitions()
    }
}

/// One row of the reservations list screen
#[derive(Debug, Clone)]
pub struct ReservationSummary {
    pub id: String,
    pub name: String,
    pub people_count: u32,
    pub date: String,
    pub time: String,
    pub status: ReservationStatus,
}

/// Rows for the reservations list screen
pub fn reservation_summaries(page: &ReservationsPage) -> Vec<ReservationSummary> {
    page.reservations
        .iter()
        .map(|reservation| ReservationSummary {
            id: reservation.id.clone(),
            name: reservation.name.clone(),
            people_count: reservation.people_count,
            date: reservation.date.clone(),
            time: reservation.time.clone(),
            status: reservation.status,
        })
        .collect()
}

/// One normalized orders-by-status slice for the dashboard chart
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCountView {
    /// Display name, first letter upper and the rest lower
    pub status: String,
    pub count: u64,
}

/// The dashboard screen's shape
#[derive(Debug, Clone)]
pub struct OverviewView {
    pub total_orders: u64,
    pub total_revenue: Decimal,
    pub total_reservations: u64,
    pub active_reservations: u64,
    pub orders_by_status: Vec<StatusCountView>,
    pub daily_orders: Vec<DailyOrders>,
}

impl From<Overview> for OverviewView {
    fn from(overview: Overview) -> Self {
        Self {
            total_orders: overview.total_orders,
            total_revenue: overview.total_revenue,
            total_reservations: overview.total_reservations,
            active_reservations: overview.active_reservations,
            orders_by_status: overview
                .orders_by_status
                .into_iter()
                .map(|bucket| StatusCountView {
                    status: bucket
                        .status
                        .as_deref()
                        .map(format_status_name)
                        .unwrap_or_else(|| "Unknown".to_string()),
                    count: bucket.count,
                })
                .collect(),
            daily_orders: overview.daily_orders,
        }
    }
}

/// Normalize an arbitrary status string for display: first letter upper,
/// the rest lower
pub fn format_status_name(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ItemSnapshot;

    fn line(item: Option<ItemRef>) -> OrderLine {
        OrderLine {
            id: Some("l1".to_string()),
            quantity: 2,
            item,
        }
    }

    #[test]
    fn bare_id_string_resolves_to_not_found_placeholder() {
        let view = resolve_line(&line(Some(ItemRef::Id("b0rked".into()))), 0);
        assert_eq!(view.name, "Item Not Found");
        assert_eq!(view.id, "b0rked");
        assert_eq!(view.price, Decimal::ZERO);
        assert_eq!(view.image_url, PLACEHOLDER_IMAGE);
        assert!(view.is_deleted);
    }

    #[test]
    fn missing_item_resolves_to_deleted_placeholder() {
        let view = resolve_line(&line(None), 3);
        assert_eq!(view.name, "Deleted Item");
        assert_eq!(view.id, "l1");
        assert_eq!(view.price, Decimal::ZERO);
        assert_eq!(view.quantity, 2);
    }

    #[test]
    fn missing_item_without_line_id_synthesizes_one() {
        let mut l = line(None);
        l.id = None;
        let view = resolve_line(&l, 3);
        assert_eq!(view.id, "deleted-3");
    }

    #[test]
    fn populated_item_extracts_fields() {
        let snapshot = ItemSnapshot {
            id: Some("i1".into()),
            name: Some("Pasta".into()),
            price: Some("9.5".parse().unwrap()),
            image: None,
        };
        let view = resolve_line(&line(Some(ItemRef::Populated(snapshot))), 0);
        assert_eq!(view.name, "Pasta");
        assert_eq!(view.price.to_string(), "9.5");
        assert_eq!(view.image_url, PLACEHOLDER_IMAGE);
        assert!(!view.is_deleted);
    }

    #[test]
    fn populated_item_defaults_missing_name_and_price() {
        let snapshot = ItemSnapshot {
            id: None,
            name: None,
            price: None,
            image: Some("/uploads/x.jpg".into()),
        };
        let view = resolve_line(&line(Some(ItemRef::Populated(snapshot))), 7);
        assert_eq!(view.name, "Unknown Item");
        assert_eq!(view.price, Decimal::ZERO);
        assert_eq!(view.id, "l1");
        assert_eq!(view.image_url, "/uploads/x.jpg");
    }

    #[test]
    fn overview_normalizes_buckets_and_unknown_status() {
        let overview: Overview = serde_json::from_str(
            r#"{
                "totalOrders": 10,
                "ordersByStatus": [
                    {"_id": "PENDING", "count": 4},
                    {"status": "completed", "count": 5},
                    {"count": 1}
                ]
            }"#,
        )
        .unwrap();
        let view = OverviewView::from(overview);
        assert_eq!(
            view.orders_by_status,
            vec![
                StatusCountView { status: "Pending".into(), count: 4 },
                StatusCountView { status: "Completed".into(), count: 5 },
                StatusCountView { status: "Unknown".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn status_options_follow_transition_table() {
        let order: Order = serde_json::from_str(
            r#"{"_id": "o1", "status": "Ready", "createdAt": "2026-07-02T12:30:00Z"}"#,
        )
        .unwrap();
        let view = OrderDetailView::from(&order);
        assert_eq!(view.status_options(), &[OrderStatus::Completed, OrderStatus::Cancelled]);

        let done: Order = serde_json::from_str(
            r#"{"_id": "o2", "status": "Cancelled", "createdAt": "2026-07-02T12:30:00Z"}"#,
        )
        .unwrap();
        assert!(OrderDetailView::from(&done).status_options().is_empty());
    }
}
