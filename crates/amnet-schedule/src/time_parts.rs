//! 12-hour clock string parsing.
//!
//! AM.net exports per-day times as free text such as `"8:00am"` or
//! `" 7:10 PM "`. This module turns them into a 24-hour `(hour, minute)` pair
//! and refuses anything it cannot read exactly.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2}):(\d{2})\s*([ap]m)\s*$").expect("time pattern is a valid regex")
});

/// A time of day in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeParts {
    /// 0..=23
    pub hour: u32,
    /// 0..=59
    pub minute: u32,
}

impl TimeParts {
    /// `None` when the fields were built by hand outside 0..=23 / 0..=59.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

impl fmt::Display for TimeParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeParts {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_time_parts(s)
    }
}

/// Parse a 12-hour clock string into a 24-hour [`TimeParts`].
///
/// Leading/trailing whitespace and a space before the meridiem are tolerated,
/// as is a single-digit hour. The meridiem is matched case-insensitively.
///
/// `12am` maps to hour 0, `12pm` to hour 12, and `1pm`..`11pm` add 12.
///
/// # Errors
/// Returns `ScheduleError::Parse` with the raw input when the string does not
/// have the `h:mm am|pm` shape, the hour is outside 1..=12, or the minute is
/// outside 0..=59.
pub fn parse_time_parts(raw: &str) -> Result<TimeParts> {
    let malformed = || ScheduleError::Parse(raw.to_string());

    let caps = TIME_PATTERN.captures(raw).ok_or_else(malformed)?;
    let hour: u32 = caps[1].parse().map_err(|_| malformed())?;
    let minute: u32 = caps[2].parse().map_err(|_| malformed())?;
    let is_pm = caps[3].eq_ignore_ascii_case("pm");

    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(malformed());
    }

    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    Ok(TimeParts { hour, minute })
}
