//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the raw stored profile as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, client: &AgrisClient) -> Result<()> {
    let user = client
        .stored_user()
        .context("No active session. Run 'agris auth verify-otp' first.")?;

    if args.json {
        return output::json_pretty(&user);
    }

    for key in ["name", "phone", "email", "language"] {
        if let Some(value) = user.get(key).and_then(|v| v.as_str()) {
            output::field(key, value);
        }
    }
    output::field("Backend", client.base().as_str());

    Ok(())
}
