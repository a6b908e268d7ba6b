//! Expense models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for expense entry.
#[derive(Debug, Clone, Serialize)]
pub struct NewExpense {
    pub farm_id: Uuid,
    pub crop_name: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An expense record, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub crop_name: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}
