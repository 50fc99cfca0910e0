//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard that configures the tracker feed
//! endpoint and the cosmetic schedule settings.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command: the wizard by default, or
/// configuration removal with `--delete`.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    // Run the interactive wizard and persist whatever it produced
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
