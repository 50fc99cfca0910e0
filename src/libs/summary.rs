//! The core derivation logic: reduces a date's sign-in/sign-out pair into
//! one display status and one display duration.
//!
//! Both aggregators reproduce the upstream feed's truthiness rules on
//! purpose: an empty status string and a zero duration count as absent,
//! exactly like a missing record. Correcting either would change observable
//! behavior, so they are documented quirks, not bugs.

use super::holiday::{self, Holiday};
use super::record::{AttendanceRecord, Seq};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Aggregate status of one date, derived from the sign-in/sign-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Passed,
    Failed,
    Pending,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Passed => "passed",
            DayStatus::Failed => "failed",
            DayStatus::Pending => "pending",
        }
    }
}

impl Display for DayStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reduces the pair of per-record statuses into the day's aggregate status.
///
/// Rules, in order:
/// 1. Exactly one side present (an empty status string counts as absent)
///    means `Pending`, whatever that single status says.
/// 2. Either side is the literal `"failed"` means `Failed`.
/// 3. Otherwise `Passed`. Both sides absent also lands here; a bucket with
///    no records is never evaluated in practice, so the degenerate case is
///    not special-cased.
pub fn aggregate_status(sign_in: Option<&str>, sign_out: Option<&str>) -> DayStatus {
    let a = sign_in.filter(|s| !s.is_empty());
    let b = sign_out.filter(|s| !s.is_empty());

    match (a, b) {
        (Some(_), None) | (None, Some(_)) => DayStatus::Pending,
        (a, b) if a == Some("failed") || b == Some("failed") => DayStatus::Failed,
        _ => DayStatus::Passed,
    }
}

/// Reduces the pair of per-record durations into the day's display string.
///
/// Both present and nonzero: average of the two, milliseconds to seconds,
/// one decimal place, `"s"` suffix. Anything else: `"-"`. A duration of
/// exactly zero counts as absent.
pub fn aggregate_duration(sign_in: Option<f64>, sign_out: Option<f64>) -> String {
    match (sign_in, sign_out) {
        (Some(a), Some(b)) if a != 0.0 && b != 0.0 => format!("{:.1}s", (a + b) / 2000.0),
        _ => "-".to_string(),
    }
}

/// One display-ready dashboard row.
///
/// String fields are pre-formatted so the struct serializes directly for
/// export; the table view adds its own glyphs on top.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    /// Raw `YYYY-MM-DD` date key.
    pub date: String,
    pub sign_in: bool,
    pub sign_out: bool,
    pub duration: String,
    pub status: DayStatus,
    /// Present when the day carries a skip marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<Holiday>,
}

/// Builds the summary row for one date's bucket.
///
/// Presence and values come from the first sign-in and first sign-out match
/// in the bucket. Returns `None` only for an empty bucket.
pub fn summarize(records: &[&AttendanceRecord]) -> Option<DaySummary> {
    let sign_in = records.iter().find(|r| r.seq == Seq::SignIn).copied();
    let sign_out = records.iter().find(|r| r.seq == Seq::SignOut).copied();

    let date = sign_in.or(sign_out).or_else(|| records.first().copied())?.date.clone();

    Some(DaySummary {
        date,
        sign_in: sign_in.is_some(),
        sign_out: sign_out.is_some(),
        duration: aggregate_duration(sign_in.and_then(|r| r.duration), sign_out.and_then(|r| r.duration)),
        status: aggregate_status(sign_in.map(|r| r.status.as_str()), sign_out.map(|r| r.status.as_str())),
        holiday: holiday::detect(records),
    })
}
