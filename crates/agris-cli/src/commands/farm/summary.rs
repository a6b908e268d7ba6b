//! Farm summary command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Farm ID
    pub farm_id: Uuid,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SummaryArgs, client: &AgrisClient) -> Result<()> {
    let summary = client
        .farm_summary(args.farm_id)
        .await
        .context("Failed to fetch farm summary")?
        .context("No summary available for this farm")?;

    if args.json {
        return output::json_pretty(&summary);
    }

    output::field("Total expenses", &format!("{:.2}", summary.total_expense));
    output::field("Total income", &format!("{:.2}", summary.total_income));
    output::field("Net profit", &format!("{:.2}", summary.net_profit));
    output::field(
        "Margin",
        &format!("{:.1}%", summary.profit_percentage),
    );

    let status = if summary.net_profit >= 0.0 {
        summary.profit_status.green()
    } else {
        summary.profit_status.red()
    };
    println!("{}: {}", "Status".dimmed(), status);

    Ok(())
}
