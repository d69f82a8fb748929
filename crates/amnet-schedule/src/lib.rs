//! # amnet-schedule
//!
//! Data-shaping helpers for AM.net membership records: multi-day event time
//! resolution, concurrent-session grouping keys, and phone number formatting.
//!
//! Everything here is a pure function of its inputs. Nothing is cached,
//! persisted, or shared between calls.
//!
//! ## Quick start
//!
//! ```rust
//! use amnet_schedule::{resolve_event_date_time_ranges, EventDay, EventRecord};
//! use chrono::NaiveDate;
//!
//! let event = EventRecord {
//!     begin_date: NaiveDate::from_ymd_opt(2017, 5, 15).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2017, 5, 16).unwrap(),
//!     days: vec![EventDay::new("8:00am", "7:10pm"), EventDay::new("7:00am", "4:30pm")],
//! };
//! let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
//! assert_eq!(ranges.len(), 2);
//! assert_eq!(ranges[0].start.to_rfc3339(), "2017-05-15T08:00:00-04:00");
//! ```
//!
//! ## Modules
//!
//! - [`time_parts`] -- `"7:10 pm"` → `(19, 10)`
//! - [`event`] -- event record → per-day zoned start/end ranges
//! - [`timeslot`] -- canonical keys for concurrently scheduled sessions
//! - [`phone`] -- NANP phone number validation and formatting
//! - [`calendar`] -- boundary date and zone parsing
//! - [`dst`] -- DST gap/overlap policy
//! - [`error`] -- Error types

pub mod calendar;
pub mod dst;
pub mod error;
pub mod event;
pub mod phone;
pub mod time_parts;
pub mod timeslot;

pub use dst::LocalTimePolicy;
pub use error::ScheduleError;
pub use event::{
    resolve_event_date_time_ranges, resolve_event_date_time_ranges_with_policy, DateTimeRange,
    EventDay, EventRecord, MAX_EVENT_DAYS,
};
pub use phone::{format_phone, parse_phone, PhoneNumber};
pub use time_parts::{parse_time_parts, TimeParts};
pub use timeslot::{compute_timeslot_key, group_by_timeslot, Session, TimeslotGroup};
