//! Farm list command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print farms as JSON lines
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, client: &AgrisClient) -> Result<()> {
    let farms = client.farms().await.context("Failed to list farms")?;

    if farms.is_empty() {
        eprintln!("{}", "No farms registered yet.".dimmed());
        return Ok(());
    }

    for farm in &farms {
        if args.json {
            output::json(farm)?;
        } else {
            println!(
                "{}  {} ({} {})",
                farm.id,
                farm.name,
                farm.total_area,
                farm.area_unit
            );
        }
    }

    Ok(())
}
