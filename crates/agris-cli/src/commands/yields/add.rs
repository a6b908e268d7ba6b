//! Yield add command implementation.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

use agris_client::AgrisClient;
use agris_core::models::NewYieldRecord;

use crate::output;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Farm ID
    #[arg(long)]
    pub farm: Uuid,

    /// Crop name
    #[arg(long)]
    pub crop: String,

    /// Sale date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Quantity sold in kilograms
    #[arg(long)]
    pub quantity: f64,

    /// Price per kilogram
    #[arg(long)]
    pub price: f64,

    /// Buyer notes
    #[arg(long)]
    pub notes: Option<String>,
}

pub async fn run(args: AddArgs, client: &AgrisClient) -> Result<()> {
    if args.quantity <= 0.0 || args.price < 0.0 {
        bail!("Quantity must be positive and price non-negative");
    }

    let record = NewYieldRecord {
        farm_id: args.farm,
        crop_name: args.crop,
        date: args.date,
        quantity_kg: args.quantity,
        price_per_kg: args.price,
        buyer_notes: args.notes,
    };

    let record = client
        .add_yield(&record)
        .await
        .context("Failed to record yield")?
        .context("Backend returned no yield record")?;

    output::success("Yield recorded");
    output::field("ID", &record.id.to_string());
    output::field(
        "Income",
        &format!(
            "{} kg x {} = {:.2}",
            record.quantity_kg, record.price_per_kg, record.total_income
        ),
    );

    Ok(())
}
