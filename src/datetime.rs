//! Timestamp normalization for export lines.
//!
//! Export timestamps arrive in two raw shapes, routed by a cheap sniff of the
//! text:
//!
//! - Bracket-delimited (`[8/24/25, 2:30:45 PM]`): brackets are stripped and
//!   the remainder is tried against an ordered list of chrono formats. These
//!   exports are locale-dependent, so the list covers 12- and 24-hour clocks,
//!   optional seconds, slash and dot separators, and ISO.
//! - Slash-separated numeric (`24/08/25, 14:30`): day first, then month, then
//!   a 2-or-4-digit year; 2-digit years are widened by prefixing `20`.
//!
//! The bracket check runs first: bracketed timestamps usually contain slashes
//! too and must go to the flexible interpreter, not the day-first path.
//!
//! Normalization never fails. Anything unrecognized, including out-of-range
//! fields, falls back to the current local wall-clock time so that a bulk
//! import is never aborted by one odd line.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Formats tried, in order, for bracket-delimited timestamps.
///
/// US month-first shapes come first since the bracketed form is the common
/// iOS/US export; dotted and ISO shapes follow for other locales.
const FLEXIBLE_FORMATS: &[&str] = &[
    "%m/%d/%y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%y, %I:%M %p",
    "%m/%d/%Y, %I:%M %p",
    "%m/%d/%y, %H:%M:%S",
    "%m/%d/%Y, %H:%M:%S",
    "%m/%d/%y, %H:%M",
    "%m/%d/%Y, %H:%M",
    "%d.%m.%y, %H:%M:%S",
    "%d.%m.%Y, %H:%M:%S",
    "%d.%m.%y, %H:%M",
    "%d.%m.%Y, %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

/// Converts raw timestamp text into an absolute local time.
///
/// Returns the current wall-clock time when the text cannot be interpreted;
/// never panics and never surfaces an error.
///
/// # Example
///
/// ```
/// use chatsift::datetime::normalize_timestamp;
///
/// let ts = normalize_timestamp("[8/24/25, 2:30:45 PM]");
/// assert_eq!(ts.to_string(), "2025-08-24 14:30:45");
/// ```
pub fn normalize_timestamp(raw: &str) -> NaiveDateTime {
    try_parse_timestamp(raw).unwrap_or_else(|| Local::now().naive_local())
}

/// Best-effort timestamp parse, `None` on any failure.
///
/// Exposed for callers that want to distinguish a real export timestamp from
/// the fallback; [`normalize_timestamp`] is the usual entry point.
pub fn try_parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.contains('[') {
        parse_flexible(raw.trim_matches(['[', ']']).trim())
    } else if raw.contains('/') {
        parse_day_first(raw)
    } else {
        None
    }
}

/// Tries each known bracketed-export format in order.
fn parse_flexible(text: &str) -> Option<NaiveDateTime> {
    FLEXIBLE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// Parses `DD/MM/YY[YY], HH:MM` with the comma optional.
///
/// Fields are taken literally; out-of-range values (month 13, hour 25) are a
/// parse failure rather than a rollover.
fn parse_day_first(text: &str) -> Option<NaiveDateTime> {
    let (date_part, time_part) = text
        .split_once(',')
        .or_else(|| text.split_once(' '))
        .map(|(d, t)| (d.trim(), t.trim()))?;

    let mut fields = date_part.split('/');
    let day: u32 = fields.next()?.trim().parse().ok()?;
    let month: u32 = fields.next()?.trim().parse().ok()?;
    let year_text = fields.next()?.trim();
    if fields.next().is_some() {
        return None;
    }
    let year: i32 = if year_text.len() == 2 {
        format!("20{year_text}").parse().ok()?
    } else {
        year_text.parse().ok()?
    };

    let (hour_text, minute_text) = time_part.split_once(':')?;
    let hour: u32 = hour_text.trim().parse().ok()?;
    // Ignore trailing seconds if the export included them.
    let minute: u32 = minute_text
        .split(':')
        .next()?
        .trim()
        .parse()
        .ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}
