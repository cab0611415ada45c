use chrono::{NaiveDateTime, Timelike};

use crate::constants::{UNKNOWN_DURATION_VALUE, UNKNOWN_VALUE};
use crate::error::TimestampError;

const SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const MICROS_DIGITS: usize = 6;

/// Parses a build-server timestamp such as `2019-02-25T19:40:53.4822105Z`.
///
/// The fractional part may carry any number of digits; it is truncated (never
/// rounded) or right-padded to microsecond precision. The trailing `Z` is
/// optional.
pub fn parse_instant(value: Option<&str>) -> Result<NaiveDateTime, TimestampError> {
    let raw = value.ok_or(TimestampError::Missing)?;
    if raw.is_empty() {
        return Err(TimestampError::Missing);
    }

    let malformed = || TimestampError::Malformed(raw.to_string());

    if !raw.contains('T') {
        return Err(malformed());
    }

    let trimmed = raw.strip_suffix('Z').unwrap_or(raw);
    let (seconds_part, fraction) = trimmed.split_once('.').ok_or_else(malformed)?;

    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let micros_text: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(MICROS_DIGITS)
        .collect();
    let micros: u32 = micros_text.parse().map_err(|_| malformed())?;

    NaiveDateTime::parse_from_str(seconds_part, SECONDS_FORMAT)
        .ok()
        .and_then(|instant| instant.with_nanosecond(micros * 1_000))
        .ok_or_else(malformed)
}

/// Whole seconds elapsed between `start` and `finish`.
///
/// Returns [`UNKNOWN_DURATION_VALUE`] when either side is absent or cannot be
/// parsed. The sub-second remainder is truncated toward zero and a finish
/// earlier than the start yields a negative count.
pub fn duration_seconds(start: Option<&str>, finish: Option<&str>) -> i64 {
    match (parse_instant(start), parse_instant(finish)) {
        (Ok(start), Ok(finish)) => (finish - start).num_seconds(),
        _ => UNKNOWN_DURATION_VALUE,
    }
}

/// Calendar date (`YYYY-MM-DD`) portion of a start timestamp, or `N/A`.
pub fn calendar_date(start: Option<&str>) -> String {
    start
        .and_then(|value| value.split_once('T'))
        .map_or_else(|| UNKNOWN_VALUE.to_string(), |(date, _)| date.to_string())
}
