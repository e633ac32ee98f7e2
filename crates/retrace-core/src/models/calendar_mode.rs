use serde::{Deserialize, Serialize};

/// Granularity of the calendar views and of moment selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    #[default]
    Day,
    Hour,
}

impl CalendarMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}
