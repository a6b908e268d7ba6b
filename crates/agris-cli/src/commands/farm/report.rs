//! Farm report download command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use agris_client::AgrisClient;

use crate::output;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Farm ID
    pub farm_id: Uuid,

    /// Output file (defaults to farm-summary-<id>.pdf)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: ReportArgs, client: &AgrisClient) -> Result<()> {
    eprintln!("{}", "Downloading report...".dimmed());

    let bytes = client
        .summary_pdf(args.farm_id)
        .await
        .context("Failed to download report")?;

    if bytes.is_empty() {
        bail!("Backend returned an empty report");
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("farm-summary-{}.pdf", args.farm_id)));

    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    output::success(&format!(
        "Report saved to {} ({} bytes)",
        path.display(),
        bytes.len()
    ));

    Ok(())
}
