//! Display implementation for rollcall application messages.
//!
//! Every user-facing string lives here, in one `Display` implementation
//! over the `Message` enum. Keeping the text in a single match arm per
//! variant makes the wording easy to audit and keeps format parameters
//! type-checked at the call site.
//!
//! One deliberate exception to the "text lives here" rule:
//! `Message::RecordError` passes the upstream error string through
//! untouched, because the feed's own wording is the most useful thing to
//! show for a failed attempt.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration file deleted".to_string(),
            Message::ConfigModuleTracker => "Tracker settings".to_string(),
            Message::ConfigModuleSchedule => "Schedule settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptApiUrl => "Attendance feed URL".to_string(),
            Message::PromptSignInTime => "Sign-in time (HH:MM)".to_string(),
            Message::PromptSignInPeriod => "Sign-in period".to_string(),
            Message::PromptSignOutTime => "Sign-out time (HH:MM)".to_string(),
            Message::PromptSignOutPeriod => "Sign-out period".to_string(),
            Message::PromptNotify => "Enable notifications?".to_string(),
            Message::PromptSkipDays => "Skip days of month (comma separated, blank for none)".to_string(),
            Message::TrackerConfigNotFound => "Tracker is not configured. Run 'rollcall init' first.".to_string(),

            // === FETCH MESSAGES ===
            Message::FetchingRecords => "Fetching attendance records...".to_string(),
            Message::FetchFailed(error) => format!("Failed to fetch data: {}", error),

            // === DASHBOARD MESSAGES ===
            Message::NoAttendanceRecords => "No attendance records found".to_string(),
            Message::TodayHeader(date) => format!("Today {}", date),
            Message::DetailHeader(date) => format!("Attendance for {}", date),
            Message::HolidayDay(date) => format!("{} is marked as a holiday", date),
            Message::NoRecordsForDate(date) => format!("No records found for {}", date),
            Message::RecordError(error) => error.clone(),
            Message::NoRecordData => "No data".to_string(),
            Message::InvalidDateFormat(input) => format!("Invalid date '{}'. Expected YYYY-MM-DD or 'today'.", input),

            // === EXPORT MESSAGES ===
            Message::ExportingData => "Exporting attendance data...".to_string(),
            Message::ExportCompleted(path) => format!("Export completed successfully: {}", path),
        };
        write!(f, "{}", text)
    }
}
