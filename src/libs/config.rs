//! Configuration management for the rollcall application.
//!
//! Settings are split into optional modules so a user configures only what
//! they use: the tracker module holds the attendance feed endpoint, the
//! schedule module mirrors the upstream notification settings. The file is
//! JSON in the platform application data directory and is safe to edit by
//! hand.
//!
//! The schedule module is cosmetic. It is persisted and editable but no
//! derivation consults it; in particular the today-card fallback time is a
//! fixed upstream constant, not the configured sign-out time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::libs::config::Config;
//!
//! let config = Config::read().unwrap_or_default();
//! if config.tracker.is_some() {
//!     println!("Tracker feed is configured");
//! }
//! ```

use super::data_storage::DataStorage;
use crate::api::tracker::TrackerConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// One selectable module in the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique key used for configuration routing
    pub key: String,
    /// Display name shown in the module selection prompt
    pub name: String,
}

/// Notification schedule settings, mirrored from the upstream settings
/// panel. Times are stored as entered, a `HH:MM` string plus an AM/PM
/// period, because they are display values rather than instants.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    pub sign_in: String,
    pub sign_in_period: String,
    pub sign_out: String,
    pub sign_out_period: String,
    pub notify: bool,
    /// Days of month excluded from attendance, as bare day numbers.
    pub skip_days: Vec<u32>,
}

impl Default for ScheduleConfig {
    /// The upstream panel's initial values: sign in at 11:00 AM, sign out
    /// at 6:00 PM, notifications on, no skip days.
    fn default() -> Self {
        ScheduleConfig {
            sign_in: "11:00".to_string(),
            sign_in_period: "AM".to_string(),
            sign_out: "18:00".to_string(),
            sign_out_period: "PM".to_string(),
            notify: true,
            skip_days: Vec::new(),
        }
    }
}

/// Root configuration object. Unconfigured modules stay out of the JSON
/// entirely via `skip_serializing_if`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Attendance feed endpoint settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    /// Cosmetic notification schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

impl Config {
    /// Reads the configuration file, returning the default (everything
    /// unconfigured) when no file exists yet. A file that exists but does
    /// not parse is an error, not a silent reset.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory on first save.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Missing file is not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Starts from the existing configuration so current values appear as
    /// prompt defaults, presents the module multi-select, then walks each
    /// selected module's prompt flow. The caller saves the result.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let module_descriptions = vec![
            TrackerConfig::module(),
            ConfigModule {
                key: "schedule".to_string(),
                name: "Schedule".to_string(),
            },
        ];

        let selected_modules = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_modules {
            match module_descriptions[selection].key.as_str() {
                "tracker" => config.tracker = Some(TrackerConfig::init(&config.tracker)?),

                // Schedule prompts are inline; the module has no API client
                // to delegate to.
                "schedule" => {
                    let default = config.schedule.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleSchedule);

                    let periods = ["AM", "PM"];
                    let sign_in = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSignInTime.to_string())
                        .default(default.sign_in)
                        .interact_text()?;
                    let sign_in_period = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSignInPeriod.to_string())
                        .items(&periods)
                        .default(periods.iter().position(|p| *p == default.sign_in_period).unwrap_or(0))
                        .interact()?;
                    let sign_out = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSignOutTime.to_string())
                        .default(default.sign_out)
                        .interact_text()?;
                    let sign_out_period = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSignOutPeriod.to_string())
                        .items(&periods)
                        .default(periods.iter().position(|p| *p == default.sign_out_period).unwrap_or(1))
                        .interact()?;
                    let notify = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptNotify.to_string())
                        .default(default.notify)
                        .interact()?;
                    let skip_days: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSkipDays.to_string())
                        .default(default.skip_days.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(","))
                        .allow_empty(true)
                        .interact_text()?;

                    config.schedule = Some(ScheduleConfig {
                        sign_in,
                        sign_in_period: periods[sign_in_period].to_string(),
                        sign_out,
                        sign_out_period: periods[sign_out_period].to_string(),
                        notify,
                        skip_days: skip_days.split(',').filter_map(|d| d.trim().parse().ok()).collect(),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
