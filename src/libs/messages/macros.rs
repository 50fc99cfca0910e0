//! Macros for application messaging and logging.
//!
//! Every user-facing line goes through one of these macros, which route the
//! output based on runtime mode: plain console output for normal use, the
//! `tracing` system when debug mode is on. Callers never choose a channel,
//! they choose a severity.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when either environment variable is set:
//! - **`ROLLCALL_DEBUG`**: application-specific flag
//! - **`RUST_LOG`**: standard Rust logging configuration
//!
//! The check is cached in a `OnceLock`, so the environment is consulted
//! once per process.
//!
//! ## Macro Categories
//!
//! - **`msg_print!`**: plain message, no prefix
//! - **`msg_success!`** / **`msg_info!`** / **`msg_warning!`**: prefixed
//!   notifications on stdout
//! - **`msg_error!`**: prefixed errors on stderr
//! - **`msg_debug!`**: suppressed entirely outside debug mode
//! - **`msg_error_anyhow!`** / **`msg_bail_anyhow!`**: build or return an
//!   `anyhow::Error` carrying the same prefixed text
//!
//! ## Usage
//!
//! ```rust
//! use rollcall::{msg_success, msg_error};
//! use rollcall::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_error!(Message::FetchFailed("connection refused".to_string()));
//! ```

use std::sync::OnceLock;

/// Cached result of the environment check. The process never flips modes
/// mid-run, so one read is enough.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks whether debug mode is enabled, caching the answer.
///
/// Debug mode means structured `tracing` output instead of plain console
/// lines; [`crate::commands::Cli::menu`] callers also use it to decide
/// whether a subscriber should be installed at startup.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Either the application flag or the standard logging variable
        // switches the process into debug output.
        std::env::var("ROLLCALL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a message with no prefix.
///
/// The two-argument form wraps the message in blank lines, used for
/// headers and standalone notices:
///
/// ```text
/// msg_print!(Message::NoAttendanceRecords, true);
/// // "\nNo attendance records found\n"
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix.
///
/// Errors go to stderr in normal mode, so scripted callers can separate
/// them from the dashboard output on stdout.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with a ⚠️ prefix.
///
/// Warnings cover conditions that do not stop the command, like a record
/// carrying an upstream error string alongside usable data.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message with a 🔍 prefix. Produces no output at all outside
/// debug mode.
///
/// ```text
/// msg_debug!(format!("Fetched {} records", records.len()));
/// // debug mode: "🔍 Fetched 42 records"
/// // normal mode: (nothing)
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message, with the same ❌ prefix the
/// display macros use.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message. Shorthand for
/// `return Err(msg_error_anyhow!(..))`.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
