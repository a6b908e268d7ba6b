//! Request OTP command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct RequestOtpArgs {
    /// Phone number (with country code)
    #[arg(long)]
    pub phone: String,
}

pub async fn run(args: RequestOtpArgs, client: &AgrisClient) -> Result<()> {
    eprintln!("{}", "Requesting OTP...".dimmed());

    let response = client
        .request_otp(&args.phone)
        .await
        .context("Failed to request OTP")?
        .context("Backend returned no OTP response")?;

    output::success(&response.message);

    Ok(())
}
