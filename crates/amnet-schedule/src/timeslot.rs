//! Timeslot grouping keys for concurrently scheduled sessions.
//!
//! AM.net lists a session under one primary code and records the codes of
//! sessions running at the same time. The key is the sorted union of all of
//! them, so every session in a concurrent set yields the same key no matter
//! which code is primary.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

const KEY_SEPARATOR: &str = ":";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Primary session code. Required for keying.
    #[serde(default)]
    pub code: Option<String>,
    /// Codes of sessions scheduled in the same slot.
    #[serde(default)]
    pub concurrent: Vec<String>,
}

impl Session {
    pub fn new(code: &str, concurrent: &[&str]) -> Self {
        Self {
            code: Some(code.to_string()),
            concurrent: concurrent.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Sessions sharing one timeslot key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeslotGroup {
    pub key: String,
    /// In input order.
    pub sessions: Vec<Session>,
}

/// Compute the canonical timeslot key for a session.
///
/// The key is `{code} ∪ concurrent`, sorted ascending and joined by `:`.
/// Duplicate and blank concurrent codes are ignored; codes are trimmed.
///
/// # Errors
/// Returns `ScheduleError::Validation` when the primary code is missing or blank.
pub fn compute_timeslot_key(session: &Session) -> Result<String> {
    let primary = session
        .code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ScheduleError::Validation("session has no primary code".to_string()))?;

    let codes: BTreeSet<&str> = std::iter::once(primary)
        .chain(
            session
                .concurrent
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty()),
        )
        .collect();

    Ok(codes.into_iter().collect::<Vec<_>>().join(KEY_SEPARATOR))
}

/// Group sessions by timeslot key. Groups come back ordered by key.
///
/// # Errors
/// Fails on the first session without a primary code.
pub fn group_by_timeslot(sessions: &[Session]) -> Result<Vec<TimeslotGroup>> {
    let mut groups: BTreeMap<String, Vec<Session>> = BTreeMap::new();
    for session in sessions {
        let key = compute_timeslot_key(session)?;
        groups.entry(key).or_default().push(session.clone());
    }

    Ok(groups
        .into_iter()
        .map(|(key, sessions)| TimeslotGroup { key, sessions })
        .collect())
}
