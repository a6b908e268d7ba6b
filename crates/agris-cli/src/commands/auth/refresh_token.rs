//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, client: &AgrisClient) -> Result<()> {
    eprintln!("{}", "Refreshing session...".dimmed());

    client
        .refresh_session()
        .await
        .context("Failed to refresh session. Run 'agris auth verify-otp' to log in again.")?;

    output::success("Session refreshed successfully");

    Ok(())
}
