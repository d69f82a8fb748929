//! Event day-range resolution -- turns a multi-day AM.net event record into
//! per-day start/end timestamps in a caller-supplied zone.
//!
//! The per-day clock times live in an explicit ordered `days` list rather than
//! `beginTimeDay1`/`endTimeDay1`/... fields; [`EventRecord::from_day_fields`]
//! bridges the flat shape.

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_days, deserialize_calendar_date, parse_timezone};
use crate::dst::{localize, LocalTimePolicy};
use crate::error::{Result, ScheduleError};
use crate::time_parts::parse_time_parts;

/// Most days an AM.net event record carries times for.
pub const MAX_EVENT_DAYS: usize = 3;

/// Raw clock strings for one event day, e.g. `"8:00am"` / `"7:10 pm"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDay {
    #[serde(default)]
    pub begin_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

impl EventDay {
    pub fn new(begin_time: &str, end_time: &str) -> Self {
        Self {
            begin_time: Some(begin_time.to_string()),
            end_time: Some(end_time.to_string()),
        }
    }

    fn is_populated(&self) -> bool {
        is_present(&self.begin_time)
    }

    fn is_blank(&self) -> bool {
        !is_present(&self.begin_time) && !is_present(&self.end_time)
    }
}

fn is_present(time: &Option<String>) -> bool {
    time.as_deref().is_some_and(|t| !t.trim().is_empty())
}

/// An event as exported by AM.net.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// First day of the event. Any time-of-day in the source is discarded.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub begin_date: NaiveDate,
    /// Last day of the event. Informational only; the day count comes from `days`.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub days: Vec<EventDay>,
}

impl EventRecord {
    /// Build a record from the legacy flat day-1/2/3 field layout.
    ///
    /// Trailing days with neither time are dropped. A trailing day with only an
    /// end time is kept so that [`EventRecord::populated_days`] rejects it.
    pub fn from_day_fields(
        begin_date: NaiveDate,
        end_date: NaiveDate,
        day_fields: [(Option<&str>, Option<&str>); MAX_EVENT_DAYS],
    ) -> Self {
        let mut days: Vec<EventDay> = day_fields
            .iter()
            .map(|(begin, end)| EventDay {
                begin_time: begin.map(str::to_string),
                end_time: end.map(str::to_string),
            })
            .collect();
        while days.last().is_some_and(EventDay::is_blank) {
            days.pop();
        }
        Self {
            begin_date,
            end_date,
            days,
        }
    }

    /// Inclusive number of calendar days from `begin_date` to `end_date`.
    /// Zero when `end_date` precedes `begin_date`.
    pub fn span_days(&self) -> i64 {
        ((self.end_date - self.begin_date).num_days() + 1).max(0)
    }

    /// The days that carry times, in order.
    ///
    /// # Errors
    /// Returns `ScheduleError::Validation` if day 1 has no begin time, a
    /// populated day follows an empty one, a day has an end time but no begin
    /// time, a populated day lacks an end time, or more than [`MAX_EVENT_DAYS`]
    /// days are populated.
    pub fn populated_days(&self) -> Result<&[EventDay]> {
        let count = self.days.iter().take_while(|d| d.is_populated()).count();

        if count == 0 {
            return Err(ScheduleError::Validation(
                "day 1 has no begin time".to_string(),
            ));
        }
        for (i, day) in self.days.iter().enumerate().skip(count) {
            if day.is_populated() {
                return Err(ScheduleError::Validation(format!(
                    "day {} has times but day {} does not",
                    i + 1,
                    count + 1
                )));
            }
            if !day.is_blank() {
                return Err(ScheduleError::Validation(format!(
                    "day {} has an end time but no begin time",
                    i + 1
                )));
            }
        }
        if count > MAX_EVENT_DAYS {
            return Err(ScheduleError::Validation(format!(
                "{} days have times; at most {} are supported",
                count, MAX_EVENT_DAYS
            )));
        }

        let days = &self.days[..count];
        for (i, day) in days.iter().enumerate() {
            if !is_present(&day.end_time) {
                return Err(ScheduleError::Validation(format!(
                    "day {} has a begin time but no end time",
                    i + 1
                )));
            }
        }
        Ok(days)
    }
}

/// One resolved event day.
///
/// No ordering between `start` and `end`, or between successive days, is
/// guaranteed: the source times are taken as given.
///
/// Serializes as `{"dayIndex", "start", "end"}` with RFC 3339 timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeRange {
    /// 1-based.
    pub day_index: usize,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Resolve every populated event day to a start/end pair in `timezone`,
/// using [`LocalTimePolicy::default`] for DST transitions.
///
/// See [`resolve_event_date_time_ranges_with_policy`].
pub fn resolve_event_date_time_ranges(
    event: &EventRecord,
    timezone: &str,
) -> Result<Vec<DateTimeRange>> {
    resolve_event_date_time_ranges_with_policy(event, timezone, LocalTimePolicy::default())
}

/// Resolve every populated event day to a start/end pair in `timezone`.
///
/// Day `d` (1-based) is `begin_date + (d - 1)` days at that day's parsed begin
/// and end times. The output has one range per populated day, in day order,
/// regardless of how many days `begin_date..=end_date` spans.
///
/// # Arguments
/// - `event` -- the AM.net event record
/// - `timezone` -- IANA timezone (e.g., "America/New_York")
/// - `policy` -- how to treat wall-clock times inside DST transitions
///
/// # Errors
/// Fails as a whole, with no partial result, on the first of:
/// `InvalidTimezone` for an unknown zone, `Validation` from
/// [`EventRecord::populated_days`], `Parse` for any malformed time string, or
/// a DST error under [`LocalTimePolicy::Reject`].
pub fn resolve_event_date_time_ranges_with_policy(
    event: &EventRecord,
    timezone: &str,
    policy: LocalTimePolicy,
) -> Result<Vec<DateTimeRange>> {
    let tz = parse_timezone(timezone)?;
    let days = event.populated_days()?;

    let mut ranges = Vec::with_capacity(days.len());
    for (offset, day) in days.iter().enumerate() {
        let date = add_days(event.begin_date, offset as u64)?;
        let start = resolve_clock_time(tz, date, day.begin_time.as_deref(), policy)?;
        let end = resolve_clock_time(tz, date, day.end_time.as_deref(), policy)?;
        ranges.push(DateTimeRange {
            day_index: offset + 1,
            start,
            end,
        });
    }

    let span = event.span_days();
    if span != ranges.len() as i64 {
        tracing::debug!(
            days = ranges.len(),
            span,
            begin_date = %event.begin_date,
            end_date = %event.end_date,
            "event day count differs from its date span"
        );
    } else {
        tracing::debug!(days = ranges.len(), timezone, "resolved event day ranges");
    }

    Ok(ranges)
}

fn resolve_clock_time(
    tz: Tz,
    date: NaiveDate,
    raw: Option<&str>,
    policy: LocalTimePolicy,
) -> Result<DateTime<Tz>> {
    let raw = raw.unwrap_or_default();
    let time = parse_time_parts(raw)?
        .to_naive_time()
        .ok_or_else(|| ScheduleError::Parse(raw.to_string()))?;
    localize(tz, date.and_time(time), policy)
}
