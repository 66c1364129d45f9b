//! Category Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_orderable: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    pub description: String,
    pub is_orderable: bool,
}

/// Update category payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_orderable: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_backend_payload() {
        let json = r#"{
            "_id": "64f1c0ffee0000000000a001",
            "name": "Starters",
            "description": "Small plates",
            "isOrderable": true,
            "createdAt": "2026-07-01T10:00:00Z"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, "64f1c0ffee0000000000a001");
        assert_eq!(category.name, "Starters");
        assert!(category.is_orderable);
    }

    #[test]
    fn category_serializes_with_mongo_id() {
        let category = Category {
            id: "c1".into(),
            name: "Mains".into(),
            description: String::new(),
            is_orderable: false,
            created_at: "2026-07-01T10:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&category).unwrap();
        assert_eq!(value["_id"], "c1");
        assert_eq!(value["isOrderable"], false);
    }

    #[test]
    fn update_payload_omits_unset_fields() {
        let update = CategoryUpdate {
            name: Some("Desserts".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["name"], "Desserts");
        assert!(value.get("description").is_none());
        assert!(value.get("isOrderable").is_none());
    }
}
