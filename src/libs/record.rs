//! Wire model for attendance records fetched from the tracker service.
//!
//! The tracker returns one JSON array of records, each describing a single
//! automated sign-in or sign-out attempt for one date. Records are created
//! and fully populated upstream; this crate only reads them and derives
//! display values. Nothing here is ever persisted locally.
//!
//! ## Record Shape
//!
//! ```json
//! {
//!   "_id": { "$oid": "65f1c0..." },
//!   "user": "rider",
//!   "date": "2025-02-01",
//!   "seq": "Sign In",
//!   "log": [ { "at": "2025-02-01T08:07:31.000Z", "msg": "Started" } ],
//!   "status": "passed",
//!   "duration": 4000,
//!   "error": null,
//!   "at": "2025-02-01T08:07:35.000Z"
//! }
//! ```
//!
//! Older feed entries carry `_id` as a plain string instead of the
//! structured object form; both decode into [`RecordId`]. The `duration`,
//! `error`, and `log` fields may be absent entirely.

use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Opaque record identifier.
///
/// The feed mixes two historical encodings: a structured `{"$oid": "..."}`
/// object and a bare string. Neither form carries meaning for this crate;
/// the identifier is surfaced only in debug logging.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordId {
    Oid {
        #[serde(rename = "$oid")]
        oid: String,
    },
    Plain(String),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Oid { oid } => write!(f, "{}", oid),
            RecordId::Plain(id) => write!(f, "{}", id),
        }
    }
}

/// Which half of the attendance pair a record represents.
///
/// The wire literals are exactly `"Sign In"` and `"Sign Out"`; a date may
/// have zero, one, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Seq {
    #[serde(rename = "Sign In")]
    SignIn,
    #[serde(rename = "Sign Out")]
    SignOut,
}

impl Seq {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seq::SignIn => "Sign In",
            Seq::SignOut => "Sign Out",
        }
    }
}

/// One step of the automated sign-in/sign-out process.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    /// ISO 8601 timestamp of the step.
    pub at: String,
    /// Free-text step description, e.g. "Logged in" or "Sign In successful".
    pub msg: String,
}

/// One sign-in or sign-out attempt for one user on one date.
///
/// For a given `(user, date)` pair the feed holds at most one `SignIn` and
/// at most one `SignOut` record. The feed is single-user; no filtering by
/// `user` is performed anywhere.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub user: String,
    /// Calendar date string (`YYYY-MM-DD`), the grouping key.
    pub date: String,
    pub seq: Seq,
    /// Chronological step log; may be empty.
    #[serde(default)]
    pub log: Vec<LogEntry>,
    /// Free-form status; in practice `passed`, `failed`, or `pending`.
    /// An empty string counts as no record at all during aggregation.
    pub status: String,
    /// Attempt duration in milliseconds, absent when the attempt was not
    /// timed or did not complete.
    #[serde(default)]
    pub duration: Option<f64>,
    /// Failure cause when the attempt errored out.
    #[serde(default)]
    pub error: Option<String>,
    /// Timestamp of the record's own creation/completion.
    pub at: String,
}

/// Looks up the `(sign_in, sign_out)` record pair for a date.
///
/// Scans the full flat record list and returns the first match of each
/// `seq` value for that date. This is a re-derivation independent of the
/// day grouper, used by the today card and the detail view.
pub fn day_pair<'a>(records: &'a [AttendanceRecord], date: &str) -> (Option<&'a AttendanceRecord>, Option<&'a AttendanceRecord>) {
    let sign_in = records.iter().find(|r| r.date == date && r.seq == Seq::SignIn);
    let sign_out = records.iter().find(|r| r.date == date && r.seq == Seq::SignOut);
    (sign_in, sign_out)
}
