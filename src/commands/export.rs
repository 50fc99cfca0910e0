//! Data export command.
//!
//! Fetches the feed, derives the same per-day summaries the dashboard
//! shows, and writes them in the chosen format.

use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        grouping::DayGroups,
        messages::Message,
        summary::{self, DaySummary},
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the export command.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; a timestamped name is generated when
    /// omitted, e.g. `rollcall_export_20250825_143022.csv`
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Executes the export command. An empty feed still produces a valid
/// file with headers only (or an empty JSON array).
pub async fn cmd(args: ExportArgs) -> Result<()> {
    let records = super::fetch_records().await?;

    msg_info!(Message::ExportingData);

    let groups = DayGroups::build(&records);
    let summaries: Vec<DaySummary> = groups.iter().filter_map(|(_, bucket)| summary::summarize(bucket)).collect();

    Exporter::new(args.format, args.output).export(&summaries)
}
