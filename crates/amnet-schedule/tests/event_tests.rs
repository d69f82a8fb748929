//! Tests for event day-range resolution.

use amnet_schedule::{
    resolve_event_date_time_ranges, resolve_event_date_time_ranges_with_policy, EventDay,
    EventRecord, LocalTimePolicy, ScheduleError,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn three_day_event() -> EventRecord {
    EventRecord {
        begin_date: date(2017, 5, 15),
        end_date: date(2017, 5, 17),
        days: vec![
            EventDay::new("8:00am", "7:10pm"),
            EventDay::new("7:00am", "4:30pm"),
            EventDay::new("6:00am", "3:30pm"),
        ],
    }
}

// ---------------------------------------------------------------------------
// Three-day conference in New York (EDT, UTC-4)
// ---------------------------------------------------------------------------

#[test]
fn three_day_event_resolves_each_day() {
    let ranges = resolve_event_date_time_ranges(&three_day_event(), "America/New_York")
        .expect("should resolve");

    assert_eq!(ranges.len(), 3);

    let rendered: Vec<(usize, String, String)> = ranges
        .iter()
        .map(|r| (r.day_index, r.start.to_rfc3339(), r.end.to_rfc3339()))
        .collect();

    assert_eq!(
        rendered,
        vec![
            (
                1,
                "2017-05-15T08:00:00-04:00".to_string(),
                "2017-05-15T19:10:00-04:00".to_string()
            ),
            (
                2,
                "2017-05-16T07:00:00-04:00".to_string(),
                "2017-05-16T16:30:00-04:00".to_string()
            ),
            (
                3,
                "2017-05-17T06:00:00-04:00".to_string(),
                "2017-05-17T15:30:00-04:00".to_string()
            ),
        ]
    );
}

#[test]
fn results_are_zoned_instants() {
    let ranges = resolve_event_date_time_ranges(&three_day_event(), "America/New_York").unwrap();
    // 08:00 EDT = 12:00 UTC
    assert_eq!(
        ranges[0].start.with_timezone(&Utc),
        Utc.with_ymd_and_hms(2017, 5, 15, 12, 0, 0).unwrap()
    );
}

#[test]
fn same_wall_clock_in_another_zone() {
    let ranges = resolve_event_date_time_ranges(&three_day_event(), "Europe/London").unwrap();
    assert_eq!(ranges[0].start.to_rfc3339(), "2017-05-15T08:00:00+01:00");
    assert_eq!(ranges[2].end.to_rfc3339(), "2017-05-17T15:30:00+01:00");
}

#[test]
fn ranges_serialize_as_rfc3339_with_day_index() {
    let ranges = resolve_event_date_time_ranges(&three_day_event(), "America/New_York").unwrap();
    let json = serde_json::to_value(&ranges).unwrap();

    assert_eq!(json[0]["dayIndex"], 1);
    assert_eq!(json[0]["start"], "2017-05-15T08:00:00-04:00");
    assert_eq!(json[0]["end"], "2017-05-15T19:10:00-04:00");
    assert_eq!(json[2]["dayIndex"], 3);
    assert_eq!(json[2]["end"], "2017-05-17T15:30:00-04:00");
}

#[test]
fn time_of_day_on_raw_dates_is_ignored() {
    let json = r#"{
        "beginDate": "2017-05-15T17:45:00",
        "endDate": "2017-05-17 23:59:59",
        "days": [
            {"beginTime": "8:00am", "endTime": "7:10pm"},
            {"beginTime": "7:00am", "endTime": "4:30pm"},
            {"beginTime": "6:00am", "endTime": "3:30pm"}
        ]
    }"#;
    let event: EventRecord = serde_json::from_str(json).expect("valid record");
    assert_eq!(event, three_day_event());

    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(ranges[0].start.to_rfc3339(), "2017-05-15T08:00:00-04:00");
}

// ---------------------------------------------------------------------------
// Day count
// ---------------------------------------------------------------------------

#[test]
fn day_count_follows_populated_days_not_date_span() {
    // Span says three days; only one has times.
    let event = EventRecord {
        days: vec![EventDay::new("9:00am", "5:00pm")],
        ..three_day_event()
    };
    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(ranges.len(), 1);

    // Span says one day; two have times.
    let event = EventRecord {
        begin_date: date(2017, 5, 15),
        end_date: date(2017, 5, 15),
        days: vec![
            EventDay::new("9:00am", "5:00pm"),
            EventDay::new("9:00am", "1:00pm"),
        ],
    };
    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[1].start.to_rfc3339(), "2017-05-16T09:00:00-04:00");
}

#[test]
fn trailing_blank_days_are_not_counted() {
    let event = EventRecord {
        days: vec![
            EventDay::new("9:00am", "5:00pm"),
            EventDay {
                begin_time: Some("  ".to_string()),
                end_time: None,
            },
            EventDay::default(),
        ],
        ..three_day_event()
    };
    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(ranges.len(), 1);
}

#[test]
fn legacy_flat_fields() {
    let event = EventRecord::from_day_fields(
        date(2017, 5, 15),
        date(2017, 5, 16),
        [
            (Some("8:00am"), Some("7:10pm")),
            (Some("7:00am"), Some("4:30pm")),
            (None, None),
        ],
    );
    assert_eq!(event.days.len(), 2);
    assert_eq!(event.span_days(), 2);

    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(ranges.len(), 2);
}

#[test]
fn days_cross_month_boundary() {
    let event = EventRecord {
        begin_date: date(2017, 5, 31),
        end_date: date(2017, 6, 1),
        days: vec![
            EventDay::new("9:00am", "5:00pm"),
            EventDay::new("9:00am", "12:00pm"),
        ],
    };
    let ranges = resolve_event_date_time_ranges(&event, "America/Chicago").unwrap();
    assert_eq!(ranges[1].start.to_rfc3339(), "2017-06-01T09:00:00-05:00");
    assert_eq!(ranges[1].end.to_rfc3339(), "2017-06-01T12:00:00-05:00");
}

// ---------------------------------------------------------------------------
// Permissiveness: no ordering checks
// ---------------------------------------------------------------------------

#[test]
fn end_before_start_is_passed_through() {
    let event = EventRecord {
        begin_date: date(2017, 5, 15),
        end_date: date(2017, 5, 15),
        days: vec![EventDay::new("5:00pm", "9:00am")],
    };
    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert!(ranges[0].end < ranges[0].start);
}

#[test]
fn end_date_before_begin_date_is_not_validated() {
    let event = EventRecord {
        begin_date: date(2017, 5, 15),
        end_date: date(2017, 5, 10),
        days: vec![EventDay::new("9:00am", "5:00pm")],
    };
    assert_eq!(event.span_days(), 0);
    assert_eq!(
        resolve_event_date_time_ranges(&event, "America/New_York")
            .unwrap()
            .len(),
        1
    );
}

// ---------------------------------------------------------------------------
// Failures are all-or-nothing
// ---------------------------------------------------------------------------

#[test]
fn malformed_time_on_any_day_fails_the_call() {
    let mut event = three_day_event();
    event.days[2].end_time = Some("3:30 in the afternoon".to_string());

    let err = resolve_event_date_time_ranges(&event, "America/New_York").unwrap_err();
    assert_eq!(
        err,
        ScheduleError::Parse("3:30 in the afternoon".to_string())
    );
}

#[test]
fn missing_day_one_is_a_validation_error() {
    let event = EventRecord {
        days: vec![],
        ..three_day_event()
    };
    assert!(matches!(
        resolve_event_date_time_ranges(&event, "America/New_York"),
        Err(ScheduleError::Validation(_))
    ));
}

#[test]
fn gap_between_days_is_a_validation_error() {
    let event = EventRecord {
        days: vec![
            EventDay::new("9:00am", "5:00pm"),
            EventDay::default(),
            EventDay::new("9:00am", "5:00pm"),
        ],
        ..three_day_event()
    };
    let err = resolve_event_date_time_ranges(&event, "America/New_York").unwrap_err();
    assert_eq!(
        err,
        ScheduleError::Validation("day 3 has times but day 2 does not".to_string())
    );
}

#[test]
fn begin_without_end_is_a_validation_error() {
    let event = EventRecord {
        days: vec![EventDay {
            begin_time: Some("9:00am".to_string()),
            end_time: None,
        }],
        ..three_day_event()
    };
    assert!(matches!(
        resolve_event_date_time_ranges(&event, "America/New_York"),
        Err(ScheduleError::Validation(_))
    ));
}

#[test]
fn trailing_end_without_begin_is_a_validation_error() {
    let event = EventRecord {
        days: vec![
            EventDay::new("8:00am", "5:00pm"),
            EventDay {
                begin_time: None,
                end_time: Some("4:30pm".to_string()),
            },
        ],
        ..three_day_event()
    };
    assert_eq!(
        resolve_event_date_time_ranges(&event, "America/New_York").unwrap_err(),
        ScheduleError::Validation("day 2 has an end time but no begin time".to_string())
    );
}

#[test]
fn legacy_fields_keep_a_day_with_only_an_end_time() {
    let event = EventRecord::from_day_fields(
        date(2017, 5, 15),
        date(2017, 5, 17),
        [
            (Some("8:00am"), Some("7:10pm")),
            (None, Some("4:30pm")),
            (None, None),
        ],
    );
    assert_eq!(event.days.len(), 2);
    assert!(matches!(
        resolve_event_date_time_ranges(&event, "America/New_York"),
        Err(ScheduleError::Validation(_))
    ));
}

#[test]
fn more_than_three_days_is_a_validation_error() {
    let event = EventRecord {
        days: vec![EventDay::new("9:00am", "5:00pm"); 4],
        ..three_day_event()
    };
    assert!(matches!(
        resolve_event_date_time_ranges(&event, "America/New_York"),
        Err(ScheduleError::Validation(_))
    ));
}

#[test]
fn unknown_timezone() {
    assert_eq!(
        resolve_event_date_time_ranges(&three_day_event(), "America/Atlantis").unwrap_err(),
        ScheduleError::InvalidTimezone("America/Atlantis".to_string())
    );
}

#[test]
fn bad_date_in_json_is_a_deserialization_error() {
    let json = r#"{"beginDate": "next tuesday", "endDate": "2017-05-15", "days": []}"#;
    let err = serde_json::from_str::<EventRecord>(json).unwrap_err();
    assert!(err.to_string().contains("next tuesday"));
}

// ---------------------------------------------------------------------------
// DST
// ---------------------------------------------------------------------------

#[test]
fn event_spanning_spring_forward_changes_offset() {
    let event = EventRecord {
        begin_date: date(2026, 3, 7),
        end_date: date(2026, 3, 8),
        days: vec![
            EventDay::new("9:00am", "5:00pm"),
            EventDay::new("9:00am", "5:00pm"),
        ],
    };
    let ranges = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(ranges[0].start.to_rfc3339(), "2026-03-07T09:00:00-05:00");
    assert_eq!(ranges[1].start.to_rfc3339(), "2026-03-08T09:00:00-04:00");
}

#[test]
fn time_in_dst_gap_follows_policy() {
    let event = EventRecord {
        begin_date: date(2026, 3, 8),
        end_date: date(2026, 3, 8),
        days: vec![EventDay::new("2:30am", "4:00am")],
    };

    let shifted = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(shifted[0].start.to_rfc3339(), "2026-03-08T03:30:00-04:00");

    let err = resolve_event_date_time_ranges_with_policy(
        &event,
        "America/New_York",
        LocalTimePolicy::Reject,
    )
    .unwrap_err();
    assert!(matches!(err, ScheduleError::NonexistentLocalTime { .. }));
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_are_identical() {
    let event = three_day_event();
    let a = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    let b = resolve_event_date_time_ranges(&event, "America/New_York").unwrap();
    assert_eq!(a, b);
}
