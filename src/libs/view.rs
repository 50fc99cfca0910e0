//! Terminal rendering of the dashboard, the pair card, and the detail log.
//!
//! All surfaces share this one module: the `board` command is the card plus
//! the dashboard table, `today` is the card alone, `show` is the card
//! embedded under a date header with the step log sections below it.

use super::formatter;
use super::messages::Message;
use super::record::{AttendanceRecord, Seq};
use super::summary::{DaySummary, DayStatus};
use crate::{msg_debug, msg_print, msg_warning};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

/// Placeholder for a missing sign-in time.
const SIGN_IN_MISSING: &str = "--:--";

/// Fallback shown for a pending sign-out. Upstream constant, deliberately
/// not read from the schedule settings.
const SIGN_OUT_FALLBACK: &str = "18:45pm";

pub struct View {}

impl View {
    /// Renders the day-by-day dashboard table.
    ///
    /// One row per date in the order given. Holiday rows collapse the four
    /// value columns into a single spanned cell. An empty summary list
    /// renders the explicit empty-state message instead of a bare table.
    pub fn dashboard(summaries: &[DaySummary]) -> Result<()> {
        if summaries.is_empty() {
            msg_print!(Message::NoAttendanceRecords, true);
            return Ok(());
        }

        let mut table = Table::new();

        table.add_row(row!["DATE", "SIGN IN", "SIGN OUT", "DURATION", "STATUS"]);
        for summary in summaries {
            let date = formatter::format_date(&summary.date);
            match &summary.holiday {
                Some(holiday) => {
                    let marker = match &holiday.label {
                        Some(label) => format!("⊖ {}", label),
                        None => "⊖".to_string(),
                    };
                    // One cell spanning the four value columns.
                    table.add_row(Row::new(vec![Cell::new(&date), Cell::new(&marker).with_hspan(4)]));
                }
                None => {
                    table.add_row(row![
                        date,
                        Self::presence(summary.sign_in),
                        Self::presence(summary.sign_out),
                        summary.duration,
                        format!("{} {}", Self::status_glyph(summary.status), summary.status)
                    ]);
                }
            }
        }
        table.printstd();

        Ok(())
    }

    /// Renders the sign-in/sign-out pair card. With `today` set the card
    /// carries the local-date header; embedded in the detail view it does
    /// not. Callers skip the card entirely when both records are absent.
    pub fn pair_card(sign_in: Option<&AttendanceRecord>, sign_out: Option<&AttendanceRecord>, today: bool) -> Result<()> {
        if today {
            msg_print!(Message::TodayHeader(formatter::today_header()), true);
        }

        let sign_in_cell = match sign_in {
            Some(record) => format!("✅ {}", formatter::format_time(&record.at)),
            None => SIGN_IN_MISSING.to_string(),
        };
        let sign_out_cell = match sign_out {
            Some(record) => format!("Signed out {}", formatter::format_time(&record.at)),
            None => format!("Scheduled {}", SIGN_OUT_FALLBACK),
        };

        let mut table = Table::new();
        table.add_row(row!["SIGN IN", sign_in_cell]);
        table.add_row(row!["SIGN OUT", sign_out_cell]);
        table.printstd();

        Ok(())
    }

    /// Renders the step-by-step detail sections, one per `seq` value.
    ///
    /// A record's upstream error string surfaces first as a warning line,
    /// then its log prints as a glyph-annotated table. A missing record
    /// renders a "No data" body under the section header.
    pub fn detail(sign_in: Option<&AttendanceRecord>, sign_out: Option<&AttendanceRecord>) -> Result<()> {
        for (seq, record) in [(Seq::SignIn, sign_in), (Seq::SignOut, sign_out)] {
            let mut table = Table::new();
            table.add_row(row![seq.as_str().to_uppercase(), "TIME"]);

            match record {
                Some(record) => {
                    msg_debug!(format!("Rendering {} record {}", seq.as_str(), record.id));
                    if let Some(error) = &record.error {
                        msg_warning!(Message::RecordError(error.clone()));
                    }
                    for entry in &record.log {
                        table.add_row(row![
                            format!("{} {}", Self::step_glyph(&entry.msg), entry.msg),
                            formatter::format_time_hms(&entry.at)
                        ]);
                    }
                }
                None => {
                    table.add_row(Row::new(vec![Cell::new(&Message::NoRecordData.to_string()).with_hspan(2)]));
                }
            }
            table.printstd();
        }

        Ok(())
    }

    fn presence(present: bool) -> &'static str {
        if present {
            "✓"
        } else {
            "-"
        }
    }

    fn status_glyph(status: DayStatus) -> &'static str {
        match status {
            DayStatus::Passed => "✅",
            DayStatus::Failed => "❌",
            DayStatus::Pending => "⏳",
        }
    }

    /// Picks a glyph for one automation step by keyword, first match wins.
    /// The final keyword pair covers a known upstream misspelling that
    /// still appears in historical records.
    fn step_glyph(msg: &str) -> &'static str {
        let msg = msg.to_lowercase();
        if msg.contains("started") {
            "▶"
        } else if msg.contains("logged in") {
            "🔑"
        } else if msg.contains("sign in") {
            "📝"
        } else if msg.contains("sign out") {
            "📤"
        } else if msg.contains("logging out") {
            "🚪"
        } else if msg.contains("successful") {
            "✅"
        } else if msg.contains("finished") || msg.contains("finshed") {
            "🏁"
        } else {
            "•"
        }
    }
}
