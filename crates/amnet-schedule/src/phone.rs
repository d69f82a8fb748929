//! North American phone number validation and formatting.
//!
//! Member and firm records carry phone numbers typed by hand:
//! `555.123.4567`, `+1 (555) 123-4567 ext. 12`, `5551234567x9`. They are
//! normalized to ten NANP digits plus an optional extension.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

static EXTENSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s*(?:x|ext\.?|extension)\s*(\d{1,6})\s*$")
        .expect("extension pattern is a valid regex")
});

/// A validated NANP number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub area_code: String,
    pub exchange: String,
    pub line: String,
    pub extension: Option<String>,
}

impl PhoneNumber {
    /// `(AAA) EEE-NNNN`, with ` xNNN` appended when there is an extension.
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// `+1AAAEEENNNN`. The extension is dropped.
    pub fn to_e164(&self) -> String {
        format!("+1{}{}{}", self.area_code, self.exchange, self.line)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}-{}", self.area_code, self.exchange, self.line)?;
        if let Some(ext) = &self.extension {
            write!(f, " x{}", ext)?;
        }
        Ok(())
    }
}

/// Validate and split a phone number.
///
/// Separators `(`, `)`, `-`, `.`, `/` and whitespace are ignored. A leading
/// `+1` or `1` country code is accepted.
///
/// # Errors
/// Returns `ScheduleError::Validation` when any other character appears, the
/// digit count is not ten (after the country code), or the area code starts
/// with 0 or 1. The exchange is not checked, so `555-123-4567` is accepted.
pub fn parse_phone(raw: &str) -> Result<PhoneNumber> {
    let invalid = |reason: &str| ScheduleError::Validation(format!("phone number {:?}: {}", raw, reason));

    let (number, extension) = match EXTENSION_PATTERN.captures(raw) {
        Some(caps) => {
            let whole = caps.get(0).map_or(raw.len(), |m| m.start());
            (&raw[..whole], Some(caps[1].to_string()))
        }
        None => (raw, None),
    };

    let number = number.trim();
    let number = number.strip_prefix('+').unwrap_or(number);

    let mut digits = String::with_capacity(11);
    for c in number.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '(' | ')' | '-' | '.' | '/' => {}
            c if c.is_whitespace() => {}
            other => return Err(invalid(&format!("unexpected character {:?}", other))),
        }
    }

    let digits = match digits.len() {
        11 if digits.starts_with('1') => &digits[1..],
        10 => digits.as_str(),
        n => return Err(invalid(&format!("expected 10 digits, found {}", n))),
    };

    let (area_code, rest) = digits.split_at(3);
    let (exchange, line) = rest.split_at(3);

    if area_code.starts_with(['0', '1']) {
        return Err(invalid("area code cannot start with 0 or 1"));
    }

    Ok(PhoneNumber {
        area_code: area_code.to_string(),
        exchange: exchange.to_string(),
        line: line.to_string(),
        extension,
    })
}

/// Shorthand for `parse_phone(raw)?.format()`.
pub fn format_phone(raw: &str) -> Result<String> {
    parse_phone(raw).map(|p| p.format())
}
