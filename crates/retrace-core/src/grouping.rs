//! Calendar bucketing and range filling.
//!
//! Pure functions from record slices to keyed bucket maps. Grouping keys use
//! the local clock, matching what the host browser shows the user. Range
//! fillers insert empty buckets so the calendar renders contiguously; the day
//! view additionally rolls its start back to Monday so weeks align in a grid.
//!
//! All functions are total: undated records and timestamps outside chrono's
//! representable range simply never bucket.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, TimeZone, Timelike};

use crate::models::HistoryRecord;

/// Records keyed by local calendar day, newest first within each bucket.
pub type DayBuckets = HashMap<NaiveDate, Vec<HistoryRecord>>;

/// Records keyed by local day, then by hour of day (0-23).
pub type DayHourBuckets = HashMap<NaiveDate, HashMap<u32, Vec<HistoryRecord>>>;

fn local_moment(millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(millis).single()
}

fn local_day(millis: i64) -> Option<NaiveDate> {
    local_moment(millis).map(|moment| moment.date_naive())
}

fn local_day_hour(millis: i64) -> Option<(NaiveDate, u32)> {
    local_moment(millis).map(|moment| (moment.date_naive(), moment.hour()))
}

/// Local-day span covered by the datable records in `records`.
fn local_date_range(records: &[HistoryRecord]) -> Option<(NaiveDate, NaiveDate)> {
    let mut range: Option<(NaiveDate, NaiveDate)> = None;
    for record in records {
        let Some(day) = record.last_visit_time.and_then(local_day) else {
            continue;
        };
        range = Some(match range {
            None => (day, day),
            Some((start, end)) => (start.min(day), end.max(day)),
        });
    }
    range
}

/// Group records into day buckets, newest first within each day.
pub fn group_by_day(records: &[HistoryRecord]) -> DayBuckets {
    let mut grouped: DayBuckets = HashMap::new();

    for record in records {
        let Some(day) = record.last_visit_time.and_then(local_day) else {
            continue;
        };
        grouped.entry(day).or_default().push(record.clone());
    }

    for items in grouped.values_mut() {
        items.sort_by(|a, b| b.last_visit_time.cmp(&a.last_visit_time));
    }

    grouped
}

/// Group records into hour buckets nested under day keys, newest first within
/// each hour.
pub fn group_by_day_and_hour(records: &[HistoryRecord]) -> DayHourBuckets {
    let mut grouped: DayHourBuckets = HashMap::new();

    for record in records {
        let Some((day, hour)) = record.last_visit_time.and_then(local_day_hour) else {
            continue;
        };
        grouped
            .entry(day)
            .or_default()
            .entry(hour)
            .or_default()
            .push(record.clone());
    }

    for hours in grouped.values_mut() {
        for items in hours.values_mut() {
            items.sort_by(|a, b| b.last_visit_time.cmp(&a.last_visit_time));
        }
    }

    grouped
}

/// Insert an empty bucket for every calendar day the full history spans.
///
/// The range always comes from `all_records` (the unfiltered set), so a
/// narrowed search keeps the full calendar span visible. The start rolls back
/// to the Monday of its week; with no datable records the map is returned
/// unchanged. Idempotent.
pub fn fill_empty_days(mut grouped: DayBuckets, all_records: &[HistoryRecord]) -> DayBuckets {
    let Some((start, end)) = local_date_range(all_records) else {
        return grouped;
    };

    let monday_offset = start.weekday().num_days_from_monday();
    let mut current = start
        .checked_sub_days(Days::new(u64::from(monday_offset)))
        .unwrap_or(start);

    while current <= end {
        grouped.entry(current).or_default();
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    grouped
}

/// Ensure every day the full history spans carries all 24 hour buckets.
///
/// Same range rule as [`fill_empty_days`], but the start is the earliest
/// record's own day — hour view has no week alignment. Idempotent.
pub fn fill_empty_hours(
    mut grouped: DayHourBuckets,
    all_records: &[HistoryRecord],
) -> DayHourBuckets {
    let Some((start, end)) = local_date_range(all_records) else {
        return grouped;
    };

    let mut current = start;
    while current <= end {
        let hours = grouped.entry(current).or_default();
        for hour in 0..24 {
            hours.entry(hour).or_default();
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    grouped
}
