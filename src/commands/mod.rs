pub mod board;
pub mod export;
pub mod init;
pub mod show;
pub mod today;

use crate::api::tracker::Tracker;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::record::AttendanceRecord;
use crate::libs::state::FetchState;
use crate::{msg_error_anyhow, msg_info};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Display the day-by-day attendance dashboard")]
    Board,
    #[command(about = "Display today's sign-in/sign-out card")]
    Today,
    #[command(about = "Display the step-by-step detail for one day")]
    Show(show::ShowArgs),
    #[command(about = "Export day summaries to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Board => board::cmd().await,
            Commands::Today => today::cmd().await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}

/// Shared fetch path for every data command: load the tracker
/// configuration, run the one GET, and drive the state machine from
/// `Loading` to its settled state. An unsettled or errored state never
/// leaks records; the error banner is the only output on failure.
async fn fetch_records() -> Result<Vec<AttendanceRecord>> {
    let config = Config::read()?;
    let tracker_config = match config.tracker {
        Some(tracker_config) => tracker_config,
        None => return Err(msg_error_anyhow!(Message::TrackerConfigNotFound)),
    };
    let tracker = Tracker::new(&tracker_config);

    let state = FetchState::new();
    msg_info!(Message::FetchingRecords);

    let state = state.settle(tracker.fetch_records().await.map_err(|e| e.to_string()));
    if let Some(error) = state.error() {
        return Err(msg_error_anyhow!(Message::FetchFailed(error.to_string())));
    }

    Ok(state.into_records().unwrap_or_default())
}
