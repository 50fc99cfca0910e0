//! Holiday detection over a date's log entries.
//!
//! The upstream agent writes a line like `"Skip holiday for Diwali festival"`
//! into the record log when it sits a day out. A day is a holiday when any
//! of its records carries a log message starting with `Skip`.

use super::record::AttendanceRecord;
use serde::Serialize;

/// Marker for a skipped day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Holiday {
    /// Label pulled from the skip message, when the message has one.
    pub label: Option<String>,
}

/// Extracts the holiday label from a skip message: the fifth whitespace
/// separated token. `"Skip holiday for Diwali festival"` yields `festival`.
/// Shorter messages yield `None`.
pub fn skip_label(msg: &str) -> Option<String> {
    msg.split_whitespace().nth(4).map(str::to_string)
}

/// Scans a date's bucket for a skip marker. The first log entry whose
/// message starts with `Skip` wins; the prefix match is anchored, a `Skip`
/// later in the message does not count.
pub fn detect(records: &[&AttendanceRecord]) -> Option<Holiday> {
    for record in records {
        for entry in &record.log {
            if entry.msg.starts_with("Skip") {
                return Some(Holiday { label: skip_label(&entry.msg) });
            }
        }
    }
    None
}
