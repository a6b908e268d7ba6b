//! Yield subcommand implementations.

mod add;
mod list;

use anyhow::Result;
use clap::{Args, Subcommand};

use agris_client::AgrisClient;

#[derive(Args, Debug)]
pub struct YieldCommand {
    #[command(subcommand)]
    pub command: YieldSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum YieldSubcommand {
    /// Record a yield (crop sale) against a farm
    Add(add::AddArgs),

    /// List yields for a farm
    List(list::ListArgs),
}

pub async fn handle(cmd: YieldCommand, client: &AgrisClient) -> Result<()> {
    match cmd.command {
        YieldSubcommand::Add(args) => add::run(args, client).await,
        YieldSubcommand::List(args) => list::run(args, client).await,
    }
}
