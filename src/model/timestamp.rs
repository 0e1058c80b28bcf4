//! Start time parsing
//!
//! Schedule files carry start times as RFC 3339 strings, Unix milliseconds,
//! or naive local date-times as typed by front-desk staff.
//!
//! Digit-only text counts as milliseconds only from 11 digits up (after
//! March 1973). Shorter runs such as a compact `20261016` date are rejected
//! rather than read as an instant a few hours after the epoch.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Naive formats, interpreted in the host's local zone
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Fewest digits accepted as Unix milliseconds
const MIN_MILLIS_DIGITS: usize = 11;

fn parse_millis(raw: &str) -> Option<i64> {
    if raw.len() < MIN_MILLIS_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parse a start time string into an instant.
///
/// Returns `None` when no supported format matches.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(millis) = parse_millis(raw) {
        return DateTime::from_timestamp_millis(millis);
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            // Skipped wall-clock times (DST gaps) have no instant
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc));
        }
    }

    None
}
