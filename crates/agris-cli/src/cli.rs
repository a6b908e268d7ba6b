//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::expense::ExpenseCommand;
use crate::commands::farm::FarmCommand;
use crate::commands::predict::PredictCommand;
use crate::commands::yields::YieldCommand;

/// Farm-management CLI for the agris backend.
#[derive(Parser, Debug)]
#[command(name = "agris")]
#[command(author, version = env!("AGRIS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Backend base URL (defaults to $AGRIS_API_URL, then localhost)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Registration, OTP login, and session management
    Auth(AuthCommand),

    /// Farm registration and reporting
    Farm(FarmCommand),

    /// Expense entry and listing
    Expense(ExpenseCommand),

    /// Yield (crop sale) entry and listing
    Yield(YieldCommand),

    /// Crop prediction
    Predict(PredictCommand),
}
