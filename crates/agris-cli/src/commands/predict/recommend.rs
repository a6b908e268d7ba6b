//! Crop recommendation command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use agris_client::AgrisClient;
use agris_core::models::CropRecommendationRequest;

use crate::output;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Farm ID
    #[arg(long)]
    pub farm: Uuid,

    /// Crop type hint
    #[arg(long)]
    pub crop_type: String,

    /// Soil nitrogen level
    #[arg(long)]
    pub n: f64,

    /// Soil phosphorus level
    #[arg(long)]
    pub p: f64,

    /// Soil potassium level
    #[arg(long)]
    pub k: f64,

    /// Soil pH
    #[arg(long)]
    pub ph: f64,

    /// City used to look up current weather
    #[arg(long)]
    pub city: String,
}

pub async fn run(args: RecommendArgs, client: &AgrisClient) -> Result<()> {
    let request = CropRecommendationRequest {
        farm_id: args.farm,
        crop_type: args.crop_type,
        n: args.n,
        p: args.p,
        k: args.k,
        ph: args.ph,
        city: args.city,
    };

    eprintln!("{}", "Requesting recommendation...".dimmed());

    let prediction = client
        .recommend_crop(&request)
        .await
        .context("Failed to fetch recommendation")?
        .context("Backend returned no recommendation")?;

    output::field("Recommended crop", &prediction.recommended_crop);
    output::field(
        "Expected yield",
        &format!("{:.1} kg", prediction.expected_yield),
    );
    output::field(
        "Confidence",
        &format!("{:.0}%", prediction.confidence * 100.0),
    );

    Ok(())
}
