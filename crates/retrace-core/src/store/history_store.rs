use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::grouping::{self, DayBuckets, DayHourBuckets};
use crate::models::{CalendarMode, HistoryRecord, MomentKey};
use crate::provider::HistoryProvider;
use crate::search;
use crate::store::SelectionStore;

/// Aggregation store - single source of truth for history state.
///
/// Raw records arrive wholesale from the provider; every derived view
/// (filtered, bucketed, gap-filled, at both granularities) is rebuilt from
/// scratch after each upstream change, so readers always observe a consistent
/// set. Collaborator failures are recorded as a display message and never
/// propagate past the store.
pub struct HistoryStore {
    provider: Arc<dyn HistoryProvider>,

    raw: Vec<HistoryRecord>,
    search: String,
    calendar_mode: CalendarMode,
    is_loading: bool,
    error: Option<String>,

    selection: SelectionStore,
    views: DerivedViews,
}

#[derive(Default)]
struct DerivedViews {
    filtered: Vec<HistoryRecord>,
    by_day: DayBuckets,
    by_day_filled: DayBuckets,
    by_day_hour: DayHourBuckets,
    by_day_hour_filled: DayHourBuckets,
}

impl HistoryStore {
    pub fn new(provider: Arc<dyn HistoryProvider>) -> Self {
        Self {
            provider,
            raw: Vec::new(),
            search: String::new(),
            calendar_mode: CalendarMode::default(),
            is_loading: false,
            error: None,
            selection: SelectionStore::new(),
            views: DerivedViews::default(),
        }
    }

    // ===== Getters =====

    pub fn raw(&self) -> &[HistoryRecord] {
        &self.raw
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn calendar_mode(&self) -> CalendarMode {
        self.calendar_mode
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_moments(&self) -> &[MomentKey] {
        self.selection.moments()
    }

    pub fn filtered(&self) -> &[HistoryRecord] {
        &self.views.filtered
    }

    pub fn by_day(&self) -> &DayBuckets {
        &self.views.by_day
    }

    pub fn by_day_filled(&self) -> &DayBuckets {
        &self.views.by_day_filled
    }

    pub fn by_day_hour(&self) -> &DayHourBuckets {
        &self.views.by_day_hour
    }

    pub fn by_day_hour_filled(&self) -> &DayHourBuckets {
        &self.views.by_day_hour_filled
    }

    /// Records behind a selected moment, resolved through the unfilled view
    /// of the key's own granularity. Absent keys yield an empty slice.
    pub fn items_for_moment(&self, key: &MomentKey) -> &[HistoryRecord] {
        match key {
            MomentKey::Day(day) => self
                .views
                .by_day
                .get(day)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            MomentKey::Hour(day, hour) => self
                .views
                .by_day_hour
                .get(day)
                .and_then(|hours| hours.get(hour))
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        }
    }

    // ===== Actions =====

    /// Replace the raw record set from the provider.
    ///
    /// The loading flag covers the await and clears on both outcomes; failure
    /// empties the raw set and stores the message for the UI.
    pub async fn fetch(&mut self) {
        self.is_loading = true;
        self.error = None;

        match self.provider.fetch_all().await {
            Ok(records) => {
                debug!("fetched {} history records", records.len());
                self.raw = records;
            }
            Err(e) => {
                warn!("history fetch failed: {}", e);
                self.error = Some(e.to_string());
                self.raw = Vec::new();
            }
        }

        self.is_loading = false;
        self.rebuild_views();
    }

    /// Delete every visit for `url` at the provider, then mirror the removal
    /// locally. Provider failure leaves the raw set untouched.
    pub async fn remove_url(&mut self, url: &str) {
        match self.provider.delete_entry(url).await {
            Ok(()) => {
                self.raw.retain(|record| record.url != url);
                self.rebuild_views();
            }
            Err(e) => {
                warn!("history delete failed for {}: {}", url, e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.rebuild_views();
    }

    /// Switch bucketing granularity. Selection always clears: keys from the
    /// previous granularity would go stale against the new views.
    pub fn set_calendar_mode(&mut self, mode: CalendarMode) {
        self.calendar_mode = mode;
        self.selection.clear();
    }

    /// Toggle a moment in the selection. Keys of the wrong granularity for
    /// the current mode are dropped, keeping the selection resolvable.
    pub fn toggle_moment(&mut self, key: MomentKey) {
        if key.mode() != self.calendar_mode {
            debug!(
                "ignoring toggle of {} while in {} mode",
                key,
                self.calendar_mode.label()
            );
            return;
        }
        self.selection.toggle(key);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn rebuild_views(&mut self) {
        let filtered = search::filter_records(&self.raw, &self.search);
        let by_day = grouping::group_by_day(&filtered);
        let by_day_filled = grouping::fill_empty_days(by_day.clone(), &self.raw);
        let by_day_hour = grouping::group_by_day_and_hour(&filtered);
        let by_day_hour_filled = grouping::fill_empty_hours(by_day_hour.clone(), &self.raw);

        trace!(
            "rebuilt views: {} filtered records across {} days",
            filtered.len(),
            by_day_filled.len()
        );

        self.views = DerivedViews {
            filtered,
            by_day,
            by_day_filled,
            by_day_hour,
            by_day_hour_filled,
        };
    }
}
