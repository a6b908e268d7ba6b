//! Farm subcommand implementations.

mod create;
mod list;
mod report;
mod show;
mod summary;

use anyhow::Result;
use clap::{Args, Subcommand};

use agris_client::AgrisClient;

#[derive(Args, Debug)]
pub struct FarmCommand {
    #[command(subcommand)]
    pub command: FarmSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FarmSubcommand {
    /// Register a new farm
    Create(create::CreateArgs),

    /// List your farms
    List(list::ListArgs),

    /// Show a single farm
    Show(show::ShowArgs),

    /// Show the profit/loss summary for a farm
    Summary(summary::SummaryArgs),

    /// Download the PDF summary report for a farm
    Report(report::ReportArgs),
}

pub async fn handle(cmd: FarmCommand, client: &AgrisClient) -> Result<()> {
    match cmd.command {
        FarmSubcommand::Create(args) => create::run(args, client).await,
        FarmSubcommand::List(args) => list::run(args, client).await,
        FarmSubcommand::Show(args) => show::run(args, client).await,
        FarmSubcommand::Summary(args) => summary::run(args, client).await,
        FarmSubcommand::Report(args) => report::run(args, client).await,
    }
}
