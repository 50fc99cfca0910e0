//! Date and time formatting for console display.
//!
//! The feed stores two temporal shapes: plain `YYYY-MM-DD` date keys and
//! RFC 3339 timestamps. This module converts both into the strings the
//! dashboard shows, and owns the "what day is it" questions so the rest of
//! the code never calls `chrono` clocks directly.
//!
//! ## Format Specifications
//!
//! - **Dates**: `"Sat, 01-02-2025"` (weekday abbreviation, `DD-MM-YYYY`)
//! - **Times**: `"09:05 AM"` (12-hour clock, zero-padded)
//! - **Step times**: `"09:05:07 AM"` (same, with seconds)
//!
//! Timestamps render in the offset they were recorded with; no conversion
//! to the viewer's timezone happens here.
//!
//! ## Error Handling
//!
//! Formatting never fails. A value that does not parse is displayed as-is,
//! on the theory that a raw timestamp beats an empty cell when the feed
//! misbehaves.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Formats a `YYYY-MM-DD` date key for the dashboard's date column.
///
/// # Examples
///
/// ```rust
/// use rollcall::libs::formatter::format_date;
///
/// assert_eq!(format_date("2025-02-01"), "Sat, 01-02-2025");
/// assert_eq!(format_date("not-a-date"), "not-a-date");
/// ```
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%a, %d-%m-%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Formats an RFC 3339 timestamp as a 12-hour clock time.
///
/// # Examples
///
/// ```rust
/// use rollcall::libs::formatter::format_time;
///
/// assert_eq!(format_time("2025-02-01T14:30:00+05:30"), "02:30 PM");
/// assert_eq!(format_time("2025-02-01T09:05:00.000Z"), "09:05 AM");
/// ```
pub fn format_time(at: &str) -> String {
    match DateTime::parse_from_rfc3339(at) {
        Ok(parsed) => parsed.format("%I:%M %p").to_string(),
        Err(_) => at.to_string(),
    }
}

/// Formats an RFC 3339 timestamp with seconds, for the step-by-step log
/// view where consecutive entries often land within the same minute.
///
/// # Examples
///
/// ```rust
/// use rollcall::libs::formatter::format_time_hms;
///
/// assert_eq!(format_time_hms("2025-02-01T09:05:07+05:30"), "09:05:07 AM");
/// ```
pub fn format_time_hms(at: &str) -> String {
    match DateTime::parse_from_rfc3339(at) {
        Ok(parsed) => parsed.format("%I:%M:%S %p").to_string(),
        Err(_) => at.to_string(),
    }
}

/// Today's date key in the feed's `YYYY-MM-DD` form.
///
/// The feed stamps records with UTC dates, so the key is derived from the
/// UTC clock even though headers elsewhere use local time.
pub fn today_key() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Today's date as the `DD/MM/YYYY` card header, in local time.
pub fn today_header() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}
