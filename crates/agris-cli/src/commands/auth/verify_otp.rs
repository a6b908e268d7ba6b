//! Verify OTP command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct VerifyOtpArgs {
    /// Phone number (with country code)
    #[arg(long)]
    pub phone: String,

    /// The one-time password received
    #[arg(long)]
    pub otp: String,
}

pub async fn run(args: VerifyOtpArgs, client: &AgrisClient) -> Result<()> {
    eprintln!("{}", "Verifying OTP...".dimmed());

    let session = client
        .verify_otp(&args.phone, &args.otp)
        .await
        .context("Failed to verify OTP")?;

    output::success("Logged in successfully");
    println!();
    output::field("Phone", &args.phone);
    if let Some(name) = session.user.get("name").and_then(|n| n.as_str()) {
        output::field("Name", name);
    }

    Ok(())
}
