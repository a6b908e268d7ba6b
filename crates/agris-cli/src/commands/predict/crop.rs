//! Crop prediction command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agris_client::AgrisClient;
use agris_core::models::CropPredictionRequest;

use crate::output;

#[derive(Args, Debug)]
pub struct CropArgs {
    /// Crop type hint
    #[arg(long, default_value = "Generic")]
    pub crop_type: String,

    /// Soil nitrogen level
    #[arg(long, default_value_t = 0.0)]
    pub n: f64,

    /// Soil phosphorus level
    #[arg(long, default_value_t = 0.0)]
    pub p: f64,

    /// Soil potassium level
    #[arg(long, default_value_t = 0.0)]
    pub k: f64,

    /// Soil pH
    #[arg(long, default_value_t = 7.0)]
    pub ph: f64,

    /// Rainfall in mm
    #[arg(long, default_value_t = 0.0)]
    pub rainfall: f64,

    /// Temperature in Celsius
    #[arg(long, default_value_t = 0.0)]
    pub temperature: f64,

    /// Cultivated area in hectares
    #[arg(long, default_value_t = 1.0)]
    pub area: f64,
}

pub async fn run(args: CropArgs, client: &AgrisClient) -> Result<()> {
    let request = CropPredictionRequest {
        crop_type: args.crop_type,
        n: args.n,
        p: args.p,
        k: args.k,
        ph: args.ph,
        rainfall: args.rainfall,
        temperature: args.temperature,
        area_hectares: args.area,
    };

    eprintln!("{}", "Running prediction...".dimmed());

    let prediction = client
        .predict_crop(&request)
        .await
        .context("Failed to run prediction")?
        .context("Backend returned no prediction")?;

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
