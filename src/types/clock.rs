//! Wall-clock time of day and duration formatting
//!
//! Every timestamp in the simulation is a minute offset from midnight.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in a day; the latest representable clock time (`24:00`)
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes in one billable hour
pub const MINUTES_PER_HOUR: u64 = 60;

/// Time of day with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Create a clock time from a minute offset, `0..=1440`
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Create a clock time from hours and minutes
    pub fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        if minutes >= 60 {
            return None;
        }
        hours.checked_mul(60).and_then(|h| Self::from_minutes(h + minutes))
    }

    /// Parse a strict `HH:MM` string (`00:00` to `23:59`)
    pub fn parse(text: &str) -> Result<Self, String> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 5
            && bytes[2] == b':'
            && bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit());
        if !well_formed {
            return Err(format!("Invalid time of day: {:?} (expected HH:MM)", text));
        }

        let time = NaiveTime::parse_from_str(text, "%H:%M")
            .map_err(|e| format!("Invalid time of day: {:?} ({})", text, e))?;
        Ok(Self(time.hour() * 60 + time.minute()))
    }

    /// Minute offset from midnight
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Whole minutes elapsed since `earlier`, zero if `earlier` is later
    pub fn minutes_since(self, earlier: ClockTime) -> u64 {
        u64::from(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s == "24:00" {
            return Ok(Self(MINUTES_PER_DAY));
        }
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Format a duration in minutes as `HH:MM`; hours are not wrapped at 24
pub fn format_duration(minutes: u64) -> String {
    format!("{:02}:{:02}", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

/// Number of started hours in a duration, the unit of billing
pub fn billable_hours(minutes: u64) -> u64 {
    minutes.div_ceil(MINUTES_PER_HOUR)
}
