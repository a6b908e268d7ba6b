//! Expense list command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Farm ID
    pub farm_id: Uuid,

    /// Print expenses as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, client: &AgrisClient) -> Result<()> {
    let expenses = client
        .farm_expenses(args.farm_id)
        .await
        .context("Failed to list expenses")?;

    if expenses.is_empty() {
        eprintln!("{}", "No expenses recorded.".dimmed());
        return Ok(());
    }

    let mut total = 0.0;
    for expense in &expenses {
        if args.json {
            output::json(expense)?;
        } else {
            println!(
                "{}  {:>10.2}  {}  {} ({})",
                expense.date, expense.amount, expense.category, expense.crop_name, expense.id
            );
        }
        total += expense.amount;
    }

    if !args.json {
        println!();
        output::field("Total", &format!("{:.2}", total));
    }

    Ok(())
}
