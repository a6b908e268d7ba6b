//! Yield (crop sale) models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for recording a yield (crop sale).
#[derive(Debug, Clone, Serialize)]
pub struct NewYieldRecord {
    pub farm_id: Uuid,
    pub crop_name: String,
    pub date: NaiveDate,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_notes: Option<String>,
}

/// A yield record, as returned by the backend.
///
/// `total_income` is computed server-side from quantity and price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldRecord {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub crop_name: String,
    pub date: NaiveDate,
    pub quantity_kg: f64,
    pub price_per_kg: f64,
    pub total_income: f64,
    #[serde(default)]
    pub buyer_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
