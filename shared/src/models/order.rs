//! Order Model

use crate::status::OrderStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
}

/// One line of an order, referencing a menu item by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// `None` when the referenced item was deleted server-side
    #[serde(default)]
    pub item: Option<ItemRef>,
}

fn default_quantity() -> u32 {
    1
}

/// The three wire shapes an order line's item reference can take:
/// a populated object, a bare identifier string (population failed
/// upstream), or absent/null (item deleted, modeled as `Option<ItemRef>`
/// on [`OrderLine`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
    Populated(ItemSnapshot),
    Id(String),
}

/// Fields extracted from a populated item reference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSnapshot {
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_parses_with_populated_line() {
        let json = r#"{
            "_id": "64f1c0ffee0000000000c001",
            "status": "Preparing",
            "totalAmount": 19.0,
            "createdAt": "2026-07-02T12:30:00Z",
            "items": [
                {"_id": "l1", "quantity": 2,
                 "item": {"_id": "i1", "name": "Pasta", "price": 9.5, "image": "/uploads/pasta.jpg"}}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.items.len(), 1);
        match order.items[0].item.as_ref().unwrap() {
            ItemRef::Populated(snapshot) => {
                assert_eq!(snapshot.name.as_deref(), Some("Pasta"));
                assert_eq!(snapshot.price.unwrap().to_string(), "9.5");
            }
            other => panic!("expected populated item, got {other:?}"),
        }
    }

    #[test]
    fn line_with_bare_id_string_parses_as_id_ref() {
        let json = r#"{"_id": "l1", "quantity": 1, "item": "64f1c0ffee0000000000b002"}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        match line.item.as_ref().unwrap() {
            ItemRef::Id(id) => assert_eq!(id, "64f1c0ffee0000000000b002"),
            other => panic!("expected id ref, got {other:?}"),
        }
    }

    #[test]
    fn line_with_null_item_parses_as_none() {
        let json = r#"{"_id": "l1", "quantity": 3, "item": null}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert!(line.item.is_none());
        assert_eq!(line.quantity, 3);
    }

    #[test]
    fn line_quantity_defaults_to_one() {
        let json = r#"{"_id": "l1"}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.quantity, 1);
        assert!(line.item.is_none());
    }

    #[test]
    fn order_status_accepts_backend_casing_variants() {
        let json = r#"{
            "_id": "o1", "status": "COMPLETED",
            "createdAt": "2026-07-02T12:30:00Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.total_amount, Decimal::ZERO);
    }
}
