//! Farm show command implementation.

use anyhow::{Context, Result};
use clap::Args;
use uuid::Uuid;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Farm ID
    pub farm_id: Uuid,

    /// Print the farm as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, client: &AgrisClient) -> Result<()> {
    let farm = client
        .farm(args.farm_id)
        .await
        .context("Failed to fetch farm")?
        .context("Farm not found")?;

    if args.json {
        return output::json_pretty(&farm);
    }

    output::field("ID", &farm.id.to_string());
    output::field("Name", &farm.name);
    output::field(
        "Area",
        &format!("{} {}", farm.total_area, farm.area_unit),
    );
    if let (Some(lat), Some(lon)) = (farm.lat, farm.lon) {
        output::field("Location", &format!("{}, {}", lat, lon));
    }
    output::field("Created", &farm.created_at.to_rfc3339());

    Ok(())
}
