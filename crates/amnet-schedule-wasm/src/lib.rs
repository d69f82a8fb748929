//! WASM bindings for amnet-schedule.
//!
//! Exposes event day-range resolution, clock-string parsing, timeslot keys and
//! phone formatting to the site's JavaScript via `wasm-bindgen`. Structured
//! values cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p amnet-schedule-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/amnet-schedule-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/amnet_schedule_wasm.wasm
//! ```

use amnet_schedule::{EventRecord, ScheduleError, Session, TimeParts};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON helpers
// ---------------------------------------------------------------------------

fn to_js_error(e: ScheduleError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve an event record into per-day start/end timestamps.
///
/// `event_json` is an object with `beginDate`, `endDate` and a `days` array of
/// `{beginTime, endTime}` clock strings. Returns a JSON array of
/// `{dayIndex, start, end}` with RFC 3339 timestamps in `timezone`.
#[wasm_bindgen(js_name = "resolveEventDateTimeRanges")]
pub fn resolve_event_date_time_ranges(event_json: &str, timezone: &str) -> Result<String, JsValue> {
    let event: EventRecord = serde_json::from_str(event_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid event JSON: {}", e)))?;

    let ranges =
        amnet_schedule::resolve_event_date_time_ranges(&event, timezone).map_err(to_js_error)?;

    to_json(&ranges)
}

/// Parse a 12-hour clock string. Returns `{"hour": h, "minute": m}` as JSON.
#[wasm_bindgen(js_name = "parseTimeParts")]
pub fn parse_time_parts(raw: &str) -> Result<String, JsValue> {
    let parts: TimeParts = amnet_schedule::parse_time_parts(raw).map_err(to_js_error)?;
    to_json(&parts)
}

/// Compute the timeslot key for one `{code, concurrent}` session object.
#[wasm_bindgen(js_name = "computeTimeslotKey")]
pub fn compute_timeslot_key(session_json: &str) -> Result<String, JsValue> {
    let session: Session = serde_json::from_str(session_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid session JSON: {}", e)))?;
    amnet_schedule::compute_timeslot_key(&session).map_err(to_js_error)
}

/// Group a JSON array of sessions by timeslot key.
///
/// Returns a JSON array of `{key, sessions}` ordered by key.
#[wasm_bindgen(js_name = "groupByTimeslot")]
pub fn group_by_timeslot(sessions_json: &str) -> Result<String, JsValue> {
    let sessions: Vec<Session> = serde_json::from_str(sessions_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sessions JSON: {}", e)))?;
    let groups = amnet_schedule::group_by_timeslot(&sessions).map_err(to_js_error)?;
    to_json(&groups)
}

/// Format a phone number as `(AAA) EEE-NNNN[ xEXT]`.
#[wasm_bindgen(js_name = "formatPhone")]
pub fn format_phone(raw: &str) -> Result<String, JsValue> {
    amnet_schedule::format_phone(raw).map_err(to_js_error)
}
