//! Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// 1..=5 stars
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_parses_backend_payload() {
        let json = r#"{
            "_id": "64f1c0ffee0000000000e001",
            "rating": 5,
            "comment": "Great pasta",
            "userName": "Nia",
            "createdAt": "2026-07-04T18:00:00Z"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.user_name, "Nia");
    }
}
