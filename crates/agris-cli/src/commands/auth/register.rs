//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use agris_client::{AgrisClient, RegisterRequest};

use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Phone number (with country code)
    #[arg(long)]
    pub phone: String,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Preferred language code (backend default: en)
    #[arg(long)]
    pub language: Option<String>,
}

pub async fn run(args: RegisterArgs, client: &AgrisClient) -> Result<()> {
    let request = RegisterRequest {
        name: args.name,
        phone: args.phone.clone(),
        email: args.email,
        language: args.language,
    };

    eprintln!("{}", "Registering...".dimmed());

    let response = client
        .register(&request)
        .await
        .context("Failed to register")?
        .context("Backend returned no registration response")?;

    output::success(&response.message);
    output::field("Status", &response.status);
    println!();
    println!(
        "Verify the OTP sent to {} with 'agris auth verify-otp'.",
        args.phone
    );

    Ok(())
}
