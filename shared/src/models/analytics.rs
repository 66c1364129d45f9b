//! Analytics overview payloads

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate dashboard numbers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_revenue: Decimal,
    #[serde(default)]
    pub total_reservations: u64,
    #[serde(default)]
    pub active_reservations: u64,
    #[serde(default)]
    pub orders_by_status: Vec<StatusBucket>,
    #[serde(default)]
    pub daily_orders: Vec<DailyOrders>,
}

/// One orders-by-status aggregation bucket
///
/// Aggregation pipelines key the group under `_id`; older backend revisions
/// used `status`. Both are accepted, and a missing key maps to the
/// "Unknown" bucket downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBucket {
    #[serde(rename = "_id", alias = "status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub count: u64,
}

/// Per-day order/revenue aggregation for the last-7-days chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyOrders {
    pub date: String,
    /// Short weekday label (e.g. "Mon")
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub orders: u64,
    #[serde(default)]
    pub revenue: Decimal,
}

/// Overview as it arrives on the wire: either wrapped in a `data` envelope
/// or flat. Variant order matters, the envelope is probed first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OverviewResponse {
    Enveloped { data: Overview },
    Flat(Overview),
}

impl OverviewResponse {
    pub fn into_inner(self) -> Overview {
        match self {
            OverviewResponse::Enveloped { data } => data,
            OverviewResponse::Flat(overview) => overview,
        }
    }
}
