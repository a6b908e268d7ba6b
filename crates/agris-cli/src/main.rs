//! agris - CLI for the agris farm-management backend.
//!
//! This is a thin wrapper over the `agris-client` library, intended for
//! working against a backend from the terminal and for exercising the
//! API surface during development.

mod cli;
mod commands;
mod output;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use agris_client::AgrisClient;
use agris_core::BaseUrl;

use cli::{Cli, Commands};
use store::FileTokenStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let base = match cli.base_url {
        Some(ref url) => BaseUrl::new(url).context("Invalid base URL")?,
        None => BaseUrl::from_env().context("Invalid AGRIS_API_URL")?,
    };
    let client = AgrisClient::new(base, Arc::new(FileTokenStore::from_default_location()));

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, &client).await,
        Commands::Farm(cmd) => commands::farm::handle(cmd, &client).await,
        Commands::Expense(cmd) => commands::expense::handle(cmd, &client).await,
        Commands::Yield(cmd) => commands::yields::handle(cmd, &client).await,
        Commands::Predict(cmd) => commands::predict::handle(cmd, &client).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
