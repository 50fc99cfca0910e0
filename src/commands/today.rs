//! Standalone today-card command.

use crate::libs::formatter;
use crate::libs::messages::Message;
use crate::libs::record::day_pair;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

/// Fetches the feed and renders the card for the current UTC date, or the
/// no-records notice when today has neither record yet.
pub async fn cmd() -> Result<()> {
    let records = super::fetch_records().await?;

    let today = formatter::today_key();
    let (sign_in, sign_out) = day_pair(&records, &today);
    if sign_in.is_none() && sign_out.is_none() {
        msg_print!(Message::NoRecordsForDate("today".to_string()), true);
        return Ok(());
    }

    View::pair_card(sign_in, sign_out, true)
}
