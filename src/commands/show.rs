//! Per-day detail command: the pair card plus the automation step log.

use crate::libs::formatter;
use crate::libs::grouping::DayGroups;
use crate::libs::holiday;
use crate::libs::messages::Message;
use crate::libs::record::day_pair;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

/// Command-line arguments for the detail command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Date to inspect: 'today' or YYYY-MM-DD
    #[arg(short, long, default_value = "today")]
    date: String,
}

/// Executes the detail command for one date.
///
/// Holiday dates are refused with a notice instead of a detail view, and
/// dates with no records report that plainly. Otherwise the date header,
/// the embedded pair card, and both step-log sections are rendered.
pub async fn cmd(args: ShowArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let records = super::fetch_records().await?;

    let groups = DayGroups::build(&records);
    if holiday::detect(groups.records(&date)).is_some() {
        msg_info!(Message::HolidayDay(formatter::format_date(&date)), true);
        return Ok(());
    }

    let (sign_in, sign_out) = day_pair(&records, &date);
    if sign_in.is_none() && sign_out.is_none() {
        msg_print!(Message::NoRecordsForDate(args.date.clone()), true);
        return Ok(());
    }

    msg_print!(Message::DetailHeader(formatter::format_date(&date)), true);
    View::pair_card(sign_in, sign_out, false)?;
    View::detail(sign_in, sign_out)
}

/// Resolves the date argument to the feed's `YYYY-MM-DD` key form.
/// `today` maps to the current UTC date, matching the feed's own keys.
fn parse_date(input: &str) -> Result<String> {
    if input.to_lowercase() == "today" {
        return Ok(formatter::today_key());
    }
    match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Ok(date.format("%Y-%m-%d").to_string()),
        Err(_) => msg_bail_anyhow!(Message::InvalidDateFormat(input.to_string())),
    }
}
