//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, client: &AgrisClient) -> Result<()> {
    client.logout();
    output::success("Logged out");

    Ok(())
}
