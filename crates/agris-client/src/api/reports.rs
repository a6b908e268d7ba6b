//! Report, summary, and chart operations.

use tracing::{debug, instrument};
use uuid::Uuid;

use agris_core::Result;
use agris_core::models::{ExpenseChart, FarmReport, FarmSummary};

use crate::AgrisClient;

impl AgrisClient {
    /// Fetch the profit/loss report for a farm.
    #[instrument(skip(self))]
    pub async fn farm_report(&self, farm_id: Uuid) -> Result<Option<FarmReport>> {
        debug!("fetching farm report");
        self.get(&format!("/reports/farm/{}", farm_id)).await
    }

    /// Fetch the dashboard summary for a farm.
    #[instrument(skip(self))]
    pub async fn farm_summary(&self, farm_id: Uuid) -> Result<Option<FarmSummary>> {
        debug!("fetching farm summary");
        self.get(&format!("/dashboard/farm-summary?farmId={}", farm_id))
            .await
    }

    /// Fetch expense trend chart data, optionally bounded by ISO dates.
    #[instrument(skip(self))]
    pub async fn expense_chart(
        &self,
        farm_id: Uuid,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Option<ExpenseChart>> {
        debug!("fetching expense chart");
        let mut path = format!("/charts/expenses?farmId={}", farm_id);
        if let Some(from) = from {
            path.push_str(&format!("&from={}", from));
        }
        if let Some(to) = to {
            path.push_str(&format!("&to={}", to));
        }
        self.get(&path).await
    }

    /// Download the PDF summary report for a farm.
    #[instrument(skip(self))]
    pub async fn summary_pdf(&self, farm_id: Uuid) -> Result<Vec<u8>> {
        debug!("downloading summary PDF");
        self.get_blob(&format!("/farms/{}/summary/pdf", farm_id))
            .await
    }
}
