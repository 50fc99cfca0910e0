//! Core library modules for the rollcall application.
//!
//! Serves as the main entry point for all rollcall library components,
//! providing centralized access to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Record Derivation**: Day grouping, status/duration aggregation,
//!   holiday detection
//! - **Fetch Lifecycle**: The loading/error/ready state machine
//! - **User Interface**: Console rendering, data export, formatting
//!
//! ## Usage
//!
//! ```rust
//! use rollcall::libs::summary::{aggregate_duration, aggregate_status, DayStatus};
//!
//! assert_eq!(aggregate_status(Some("passed"), Some("passed")), DayStatus::Passed);
//! assert_eq!(aggregate_duration(Some(4000.0), Some(6000.0)), "5.0s");
//! ```

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod grouping;
pub mod holiday;
pub mod messages;
pub mod record;
pub mod state;
pub mod summary;
pub mod view;
