//! Yield list command implementation.

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

    /// Print yields as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, client: &AgrisClient) -> Result<()> {
    let yields = client
        .farm_yields(args.farm_id)
        .await
        .context("Failed to list yields")?;

    if yields.is_empty() {
        eprintln!("{}", "No yields recorded.".dimmed());
        return Ok(());
    }

    let mut total = 0.0;
    for record in &yields {
        if args.json {
            output::json(record)?;
        } else {
            println!(
                "{}  {:>8.1} kg  {:>10.2}  {} ({})",
                record.date, record.quantity_kg, record.total_income, record.crop_name, record.id
            );
        }
        total += record.total_income;
    }

    if !args.json {
        println!();
        output::field("Total income", &format!("{:.2}", total));
    }

    Ok(())
}
