//! The main dashboard command: today's card plus the full day-by-day table.

use crate::libs::formatter;
use crate::libs::grouping::DayGroups;
use crate::libs::record::day_pair;
use crate::libs::summary::{self, DaySummary};
use crate::libs::view::View;
use anyhow::Result;

/// Fetches the feed and renders the card-plus-table dashboard.
///
/// The card only appears when today has at least one record; an empty feed
/// renders the explicit empty state and nothing else.
pub async fn cmd() -> Result<()> {
    let records = super::fetch_records().await?;

    let today = formatter::today_key();
    let (sign_in, sign_out) = day_pair(&records, &today);
    if sign_in.is_some() || sign_out.is_some() {
        View::pair_card(sign_in, sign_out, true)?;
    }

    let groups = DayGroups::build(&records);
    let summaries: Vec<DaySummary> = groups.iter().filter_map(|(_, bucket)| summary::summarize(bucket)).collect();

    View::dashboard(&summaries)
}
