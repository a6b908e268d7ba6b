//! Expense add command implementation.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

use agris_client::AgrisClient;
use agris_core::models::NewExpense;

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Farm ID
    #[arg(long)]
    pub farm: Uuid,

    /// Crop name
    #[arg(long)]
    pub crop: String,

    /// Expense date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Expense category (e.g. seeds, fertilizer, labour)
    #[arg(long)]
    pub category: String,

    /// Amount spent
    #[arg(long)]
    pub amount: f64,

    /// Free-form note
    #[arg(long)]
    pub note: Option<String>,
}

pub async fn run(args: AddArgs, client: &AgrisClient) -> Result<()> {
    if args.amount <= 0.0 {
        bail!("Amount must be positive");
    }

    let expense = NewExpense {
        farm_id: args.farm,
        crop_name: args.crop,
        date: args.date,
        category: args.category,
        amount: args.amount,
        note: args.note,
    };

    let expense = client
        .add_expense(&expense)
        .await
        .context("Failed to record expense")?
        .context("Backend returned no expense")?;

    output::success("Expense recorded");
    output::field("ID", &expense.id.to_string());
    output::field(
        "Entry",
        &format!("{} {} on {}", expense.amount, expense.category, expense.date),
    );

    Ok(())
}
