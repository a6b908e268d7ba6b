//! Expense operations.

use tracing::{debug, instrument};
use uuid::Uuid;

use agris_core::Result;
use agris_core::models::{Expense, NewExpense};

use crate::AgrisClient;
use crate::endpoints::EXPENSES;

impl AgrisClient {
    /// Record an expense against a farm.
    #[instrument(skip(self, expense), fields(farm_id = %expense.farm_id))]
    pub async fn add_expense(&self, expense: &NewExpense) -> Result<Option<Expense>> {
        debug!(category = %expense.category, "recording expense");
        self.post(EXPENSES, expense).await
    }

    /// List all expenses for a farm.
    #[instrument(skip(self))]
    pub async fn farm_expenses(&self, farm_id: Uuid) -> Result<Vec<Expense>> {
        debug!("listing expenses");
        Ok(self
            .get(&format!("{}/farm/{}", EXPENSES, farm_id))
            .await?
            .unwrap_or_default())
    }
}
