//! # Rollcall - Attendance Dashboard for the Terminal
//!
//! A command-line dashboard over an automated attendance tracker: fetches
//! the full sign-in/sign-out record feed and renders day-by-day status,
//! durations, and holiday detection.
//!
//! ## Features
//!
//! - **Day Dashboard**: Per-date table with sign-in/sign-out presence,
//!   aggregate status, and aggregate duration
//! - **Today Card**: Quick sign-in/sign-out summary for the current date
//! - **Detail View**: Step-by-step automation log for any recorded day
//! - **Holiday Detection**: Skip-day markers picked up from the record log
//! - **Data Export**: Day summaries as CSV, JSON, or Excel
//! - **Cosmetic Settings**: Persisted schedule preferences
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
