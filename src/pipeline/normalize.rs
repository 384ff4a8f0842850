//! Clock-time normalization.
//!
//! The upstream dataset stores clock times as strings: `HH:MM` on attendance
//! records and `HH:MM:SS` on permission records. This module parses both into
//! [`NaiveTime`] values comparable within one calendar day and converts spans
//! between them into exact fractional hours.
//!
//! Parsing is pure and failure is per-field: a [`ClockParseError`] is
//! returned to the caller, whose policy is to coerce the affected duration to
//! zero rather than abort the batch.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Clock format used by attendance entry/exit fields.
pub const ATTENDANCE_CLOCK_FORMAT: &str = "%H:%M";

/// Clock format used by permission start/end fields.
pub const PERMISSION_CLOCK_FORMAT: &str = "%H:%M:%S";

/// A clock-time string could not be parsed in either supported format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unparseable clock time '{value}'")]
pub struct ClockParseError {
    /// The raw string that failed to parse.
    pub value: String,
}

/// Parses a clock-time string into a time of day.
///
/// Accepts the `HH:MM:SS` permission format first, then the shorter `HH:MM`
/// attendance format.
///
/// # Examples
///
/// ```
/// use attendance_engine::pipeline::parse_clock;
/// use chrono::NaiveTime;
///
/// assert_eq!(
///     parse_clock("09:00").unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap()
/// );
/// assert_eq!(
///     parse_clock("10:30:00").unwrap(),
///     NaiveTime::from_hms_opt(10, 30, 0).unwrap()
/// );
/// assert!(parse_clock("25:99").is_err());
/// ```
pub fn parse_clock(value: &str) -> Result<NaiveTime, ClockParseError> {
    NaiveTime::parse_from_str(value, PERMISSION_CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, ATTENDANCE_CLOCK_FORMAT))
        .map_err(|_| ClockParseError {
            value: value.to_string(),
        })
}

/// Returns the signed span from `start` to `end` in fractional hours.
///
/// The result is exact under [`Decimal`] arithmetic (whole seconds divided
/// by 3600, so the permission format's seconds carry through) and negative
/// when `end` precedes `start`; clamping is the caller's policy, not this
/// function's.
///
/// # Example
///
/// ```
/// use attendance_engine::pipeline::{hours_between, parse_clock};
/// use rust_decimal::Decimal;
///
/// let entry = parse_clock("09:00").unwrap();
/// let exit = parse_clock("21:30").unwrap();
/// assert_eq!(hours_between(entry, exit), Decimal::new(125, 1)); // 12.5
/// ```
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    Decimal::new(seconds, 0) / Decimal::new(3600, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_attendance_format() {
        let time = parse_clock("17:45").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(17, 45, 0).unwrap());
    }

    #[test]
    fn test_parse_permission_format() {
        let time = parse_clock("11:30:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(11, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_midnight() {
        let time = parse_clock("00:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_clock("not-a-time").unwrap_err();
        assert_eq!(err.value, "not-a-time");
        assert_eq!(err.to_string(), "unparseable clock time 'not-a-time'");
    }

    #[test]
    fn test_parse_rejects_out_of_range_fields() {
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("12:61").is_err());
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn test_hours_between_whole_hours() {
        let start = parse_clock("09:00").unwrap();
        let end = parse_clock("17:00").unwrap();
        assert_eq!(hours_between(start, end), dec("8"));
    }

    #[test]
    fn test_hours_between_fractional() {
        let start = parse_clock("09:00").unwrap();
        let end = parse_clock("21:30").unwrap();
        assert_eq!(hours_between(start, end), dec("12.5"));
    }

    #[test]
    fn test_hours_between_is_signed() {
        let start = parse_clock("17:00").unwrap();
        let end = parse_clock("09:00").unwrap();
        assert_eq!(hours_between(start, end), dec("-8"));
    }

    #[test]
    fn test_hours_between_zero_span() {
        let t = parse_clock("09:00").unwrap();
        assert_eq!(hours_between(t, t), Decimal::ZERO);
    }

    #[test]
    fn test_permission_window_duration() {
        let start = parse_clock("10:00:00").unwrap();
        let end = parse_clock("11:30:00").unwrap();
        assert_eq!(hours_between(start, end), dec("1.5"));
    }

    #[test]
    fn test_seconds_carry_into_the_duration() {
        // 36 seconds is exactly 0.01 hours
        let start = parse_clock("10:00:00").unwrap();
        let end = parse_clock("10:00:36").unwrap();
        assert_eq!(hours_between(start, end), dec("0.01"));

        // A window starting mid-minute keeps its half minute
        let start = parse_clock("10:00:30").unwrap();
        let end = parse_clock("11:00:00").unwrap();
        assert_eq!(
            hours_between(start, end),
            Decimal::new(3570, 0) / Decimal::new(3600, 0)
        );
    }
}
