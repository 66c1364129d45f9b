//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity, associated with exactly one category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Image payload attached to an item upload
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Create/update item payload, sent as a multipart form
///
/// `category_id` rides along as a form field on create even though the
/// category is already in the path; the backend expects both.
#[derive(Debug, Clone)]
pub struct ItemUpload {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub available: bool,
    pub category_id: Option<String>,
    pub image: Option<ImageFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_parses_backend_payload() {
        let json = r#"{
            "_id": "64f1c0ffee0000000000b001",
            "name": "Pasta",
            "price": 9.5,
            "description": "Fresh egg pasta",
            "image": "/uploads/pasta.jpg",
            "available": true
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Pasta");
        assert_eq!(item.price.to_string(), "9.5");
        assert_eq!(item.image.as_deref(), Some("/uploads/pasta.jpg"));
    }

    #[test]
    fn missing_price_defaults_to_zero() {
        let json = r#"{"_id": "i1", "name": "Bread"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, Decimal::ZERO);
        assert!(item.available);
    }
}
