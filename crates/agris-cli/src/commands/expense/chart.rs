//! Expense chart command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Farm ID
    pub farm_id: Uuid,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Print the chart data as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ChartArgs, client: &AgrisClient) -> Result<()> {
    let chart = client
        .expense_chart(args.farm_id, args.from.as_deref(), args.to.as_deref())
        .await
        .context("Failed to fetch chart data")?
        .context("No chart data available for this farm")?;

    if args.json {
        return output::json_pretty(&chart);
    }

    if chart.data.is_empty() {
        eprintln!("{}", "No expense data in the selected range.".dimmed());
        return Ok(());
    }

    for point in &chart.data {
        println!("{}  {:>10.2}", point.date, point.total);
    }

    Ok(())
}
