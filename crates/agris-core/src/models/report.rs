//! Report and chart models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profit/loss report for a farm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmReport {
    pub farm_id: Uuid,
    pub total_expenses: f64,
    pub total_income: f64,
    pub net_profit: f64,
    pub profit_status: String,
}

/// Dashboard summary for a farm.
///
/// Note the singular `total_expense`; the backend names this field
/// differently from [`FarmReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSummary {
    pub farm_id: Uuid,
    pub total_expense: f64,
    pub total_income: f64,
    pub net_profit: f64,
    pub profit_status: String,
    pub profit_percentage: f64,
}

/// One point in a chart series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub total: f64,
}

/// Expense trend chart data for a farm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseChart {
    pub farm_id: Uuid,
    pub chart_type: String,
    pub data: Vec<ChartPoint>,
}
