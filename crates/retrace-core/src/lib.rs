//! Core engine for the retrace history visualizer.
//!
//! Turns the flat record stream fetched from the host browser's history
//! facility into calendar-bucketed views (by day, by day and hour) with
//! gap-filled ranges, text filtering and moment selection. Rendering and the
//! browser adapter itself live in the front-end crates.

pub mod grouping;
pub mod models;
pub mod provider;
pub mod search;
pub mod store;

pub use grouping::{DayBuckets, DayHourBuckets};
pub use models::{CalendarMode, HistoryRecord, MomentKey, ParseMomentKeyError};
pub use provider::{HistoryProvider, MemoryHistoryProvider, ProviderError};
pub use store::{HistoryStore, SelectionStore};
