//! HTTP client for the attendance tracker feed.
//!
//! The tracker exposes the complete record history as one JSON array behind
//! a single unauthenticated GET. Every command run fetches the whole feed
//! fresh; there is no pagination, no caching, and no write path.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::api::tracker::{Tracker, TrackerConfig, DEFAULT_API_URL};
//!
//! let config = TrackerConfig {
//!     api_url: DEFAULT_API_URL.to_string(),
//! };
//! let client = Tracker::new(&config);
//! ```

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::record::AttendanceRecord;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Public endpoint of the attendance feed, offered as the wizard default.
pub const DEFAULT_API_URL: &str = "https://api.rider.rahulnjs.com/greyt/data";

/// Client for the attendance tracker feed.
///
/// Stateless apart from the pooled HTTP client, so one instance per command
/// run is enough.
#[derive(Debug)]
pub struct Tracker {
    /// HTTP client with connection pooling
    client: Client,
    /// Endpoint configuration
    config: TrackerConfig,
}

impl Tracker {
    pub fn new(config: &TrackerConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Fetches the full record list.
    ///
    /// One GET against the configured endpoint; a non-2xx response or a
    /// body that does not decode as a record array is a fetch failure. The
    /// result is all-or-nothing, there is no partial decode.
    pub async fn fetch_records(&self) -> Result<Vec<AttendanceRecord>> {
        let response = self.client.get(&self.config.api_url).send().await?.error_for_status()?;
        let records = response.json::<Vec<AttendanceRecord>>().await?;

        msg_debug!(format!("Fetched {} records from {}", records.len(), self.config.api_url));

        Ok(records)
    }
}

/// Configuration for the tracker feed endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Full URL of the record feed, response expected to be a JSON array
    /// of attendance records.
    pub api_url: String,
}

impl TrackerConfig {
    /// Configuration module metadata for the setup wizard.
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "tracker".to_string(),
            name: "Tracker".to_string(),
        }
    }

    /// Interactive setup for the tracker module. Shows the existing URL as
    /// the prompt default, or the known public endpoint on first setup.
    pub fn init(config: &Option<TrackerConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: DEFAULT_API_URL.to_string(),
        });

        msg_print!(Message::ConfigModuleTracker);

        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
        })
    }
}
