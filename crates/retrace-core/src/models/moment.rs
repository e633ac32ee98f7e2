//! Calendar moment identifiers.
//!
//! A moment is one selectable calendar bucket: a whole day or a single hour
//! of a day. The wire/UI encoding is `YYYY-MM-DD` for days and
//! `YYYY-MM-DDTHH` for hours; inside the engine the key is an explicit sum
//! type so nothing downstream re-parses strings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::CalendarMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MomentKey {
    Day(NaiveDate),
    /// Hour of a day, 0-23.
    Hour(NaiveDate, u32),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseMomentKeyError {
    #[error("invalid calendar date in moment key: {0:?}")]
    InvalidDate(String),
    #[error("invalid hour in moment key: {0:?}")]
    InvalidHour(String),
}

impl MomentKey {
    pub fn mode(&self) -> CalendarMode {
        match self {
            Self::Day(_) => CalendarMode::Day,
            Self::Hour(..) => CalendarMode::Hour,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Day(date) | Self::Hour(date, _) => *date,
        }
    }

    fn parts(&self) -> (NaiveDate, Option<u32>) {
        match self {
            Self::Day(date) => (*date, None),
            Self::Hour(date, hour) => (*date, Some(*hour)),
        }
    }
}

// Matches the lexicographic order of the string encodings: days sort by date,
// a day key sorts before that day's hour keys.
impl Ord for MomentKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parts().cmp(&other.parts())
    }
}

impl PartialOrd for MomentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MomentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Hour(date, hour) => write!(f, "{}T{:02}", date.format("%Y-%m-%d"), hour),
        }
    }
}

impl FromStr for MomentKey {
    type Err = ParseMomentKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_date = |text: &str| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| ParseMomentKeyError::InvalidDate(text.to_string()))
        };

        match s.split_once('T') {
            None => Ok(Self::Day(parse_date(s)?)),
            Some((day, hour)) => {
                let date = parse_date(day)?;
                if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseMomentKeyError::InvalidHour(hour.to_string()));
                }
                let hour_value: u32 = hour
                    .parse()
                    .map_err(|_| ParseMomentKeyError::InvalidHour(hour.to_string()))?;
                if hour_value > 23 {
                    return Err(ParseMomentKeyError::InvalidHour(hour.to_string()));
                }
                Ok(Self::Hour(date, hour_value))
            }
        }
    }
}

impl Serialize for MomentKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MomentKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
