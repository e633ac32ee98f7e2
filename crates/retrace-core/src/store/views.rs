//! One-shot history queries for callers that don't keep a `HistoryStore`.
//!
//! Each helper fetches once, filters locally, groups, and optionally
//! gap-fills against that same unfiltered fetch result — so a filtered query
//! still yields the full calendar span.

use anyhow::{Context, Result};

use crate::grouping::{self, DayBuckets, DayHourBuckets};
use crate::provider::HistoryProvider;
use crate::search;

/// Fetch and group the history by local day.
pub async fn history_by_day(
    provider: &dyn HistoryProvider,
    query: &str,
    include_empty: bool,
) -> Result<DayBuckets> {
    let records = provider
        .fetch_all()
        .await
        .context("fetching history for day view")?;

    let filtered = search::filter_records(&records, query);
    let mut grouped = grouping::group_by_day(&filtered);
    if include_empty {
        grouped = grouping::fill_empty_days(grouped, &records);
    }
    Ok(grouped)
}

/// Fetch and group the history by local day and hour.
pub async fn history_by_day_and_hour(
    provider: &dyn HistoryProvider,
    query: &str,
    include_empty: bool,
) -> Result<DayHourBuckets> {
    let records = provider
        .fetch_all()
        .await
        .context("fetching history for hour view")?;

    let filtered = search::filter_records(&records, query);
    let mut grouped = grouping::group_by_day_and_hour(&filtered);
    if include_empty {
        grouped = grouping::fill_empty_hours(grouped, &records);
    }
    Ok(grouped)
}
