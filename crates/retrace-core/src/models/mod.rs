pub mod calendar_mode;
pub mod moment;
pub mod record;

pub use calendar_mode::CalendarMode;
pub use moment::{MomentKey, ParseMomentKeyError};
pub use record::HistoryRecord;
