//! Prediction subcommand implementations.

mod crop;
mod recommend;

use anyhow::Result;
use clap::{Args, Subcommand};

use agris_client::AgrisClient;

#[derive(Args, Debug)]
pub struct PredictCommand {
    #[command(subcommand)]
    pub command: PredictSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PredictSubcommand {
    /// Predict a crop from soil and climate inputs
    Crop(crop::CropArgs),

    /// Recommend a crop for a farm using a city's weather
    Recommend(recommend::RecommendArgs),
}

pub async fn handle(cmd: PredictCommand, client: &AgrisClient) -> Result<()> {
    match cmd.command {
        PredictSubcommand::Crop(args) => crop::run(args, client).await,
        PredictSubcommand::Recommend(args) => recommend::run(args, client).await,
    }
}
