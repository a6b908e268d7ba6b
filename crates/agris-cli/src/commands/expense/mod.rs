//! Expense subcommand implementations.

mod add;
mod chart;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

use agris_client::AgrisClient;

#[derive(Args, Debug)]
pub struct ExpenseCommand {
    #[command(subcommand)]
    pub command: ExpenseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ExpenseSubcommand {
    /// Record an expense against a farm
    Add(add::AddArgs),

    /// List expenses for a farm
    List(list::ListArgs),

    /// Show expense trend data for a farm
    Chart(chart::ChartArgs),
}

pub async fn handle(cmd: ExpenseCommand, client: &AgrisClient) -> Result<()> {
    match cmd.command {
        ExpenseSubcommand::Add(args) => add::run(args, client).await,
        ExpenseSubcommand::List(args) => list::run(args, client).await,
        ExpenseSubcommand::Chart(args) => chart::run(args, client).await,
    }
}
