//! DST handling when pinning a wall-clock time to a zone.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Policy for wall-clock times that fall in a DST transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalTimePolicy {
    /// Move a time in the spring-forward gap forward by the gap length
    /// (2:30 AM becomes 3:30 AM); take the earlier instant of a repeated time.
    #[default]
    ShiftForward,
    /// Fail on either case.
    Reject,
}

/// Interpret `local` as wall-clock time in `tz`.
///
/// # Errors
/// Under [`LocalTimePolicy::Reject`], returns `NonexistentLocalTime` for a time
/// inside a DST gap and `AmbiguousLocalTime` for a time repeated by a fall-back
/// transition.
pub fn localize(tz: Tz, local: NaiveDateTime, policy: LocalTimePolicy) -> Result<DateTime<Tz>> {
    match (tz.from_local_datetime(&local), policy) {
        (LocalResult::Single(dt), _) => Ok(dt),
        (LocalResult::Ambiguous(earliest, _), LocalTimePolicy::ShiftForward) => Ok(earliest),
        (LocalResult::Ambiguous(_, _), LocalTimePolicy::Reject) => {
            Err(ScheduleError::AmbiguousLocalTime {
                local,
                timezone: tz.name().to_string(),
            })
        }
        (LocalResult::None, LocalTimePolicy::ShiftForward) => Ok(shift_past_gap(tz, local)),
        (LocalResult::None, LocalTimePolicy::Reject) => Err(ScheduleError::NonexistentLocalTime {
            local,
            timezone: tz.name().to_string(),
        }),
    }
}

/// Read `local` with the offset in force just before the gap, then view that
/// instant in `tz`. The result lands after the gap by the same distance.
fn shift_past_gap(tz: Tz, local: NaiveDateTime) -> DateTime<Tz> {
    // Transitions are never closer together than a day in the tz database.
    let before = local - Duration::days(1);
    let offset_seconds = tz.offset_from_utc_datetime(&before).fix().local_minus_utc();
    let utc = local - Duration::seconds(i64::from(offset_seconds));
    tz.from_utc_datetime(&utc)
}
