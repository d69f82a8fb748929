//! Calendar-date and time-zone handling at the input boundary.
//!
//! AM.net date fields sometimes arrive date-only and sometimes as a full
//! date-time. Only the calendar date is meaningful here; any time-of-day or
//! offset is dropped.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer};

use crate::error::{Result, ScheduleError};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a calendar date, discarding any time-of-day component.
///
/// Accepts `2017-05-15`, `2017-05-15T09:30:00`, `2017-05-15 09:30:00`, and
/// RFC 3339 (`2017-05-15T09:30:00-04:00`). For RFC 3339 input the date is the
/// one written in the string, not the UTC date.
///
/// # Errors
/// Returns `ScheduleError::InvalidDate` when none of the formats match.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    let s = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| ScheduleError::InvalidDate(raw.to_string()))
}

/// `date + days`, calendar-only.
///
/// # Errors
/// Returns `ScheduleError::Validation` if the result is past `NaiveDate::MAX`.
pub fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days)).ok_or_else(|| {
        ScheduleError::Validation(format!("{} + {} days is out of range", date, days))
    })
}

/// Look up an IANA zone identifier.
///
/// # Errors
/// Returns `ScheduleError::InvalidTimezone` if the identifier is unknown.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| ScheduleError::InvalidTimezone(timezone.to_string()))
}

/// serde `deserialize_with` adapter for [`parse_calendar_date`].
pub(crate) fn deserialize_calendar_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}
