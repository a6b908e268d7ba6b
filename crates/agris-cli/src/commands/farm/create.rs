//! Farm create command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use agris_client::AgrisClient;
use agris_core::models::{Location, NewFarm};

use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Farm name
    #[arg(long)]
    pub name: String,

    /// Total area
    #[arg(long)]
    pub area: f64,

    /// Area unit (e.g. acre, hectare)
    #[arg(long, default_value = "acre")]
    pub unit: String,

    /// Latitude of the farm location
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude of the farm location
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,
}

pub async fn run(args: CreateArgs, client: &AgrisClient) -> Result<()> {
    if args.area <= 0.0 {
        bail!("Area must be positive");
    }

    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Location { lat, lon }),
        _ => None,
    };

    let farm = NewFarm {
        name: args.name,
        total_area: args.area,
        area_unit: args.unit,
        location,
    };

    eprintln!("{}", "Registering farm...".dimmed());

    let farm = client
        .create_farm(&farm)
        .await
        .context("Failed to create farm")?
        .context("Backend returned no farm")?;

    output::success("Farm registered");
    println!();
    output::field("ID", &farm.id.to_string());
    output::field("Name", &farm.name);
    output::field(
        "Area",
        &format!("{} {}", farm.total_area, farm.area_unit),
    );

    Ok(())
}
