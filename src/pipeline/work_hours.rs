//! Work-hours calculation.
//!
//! Splits one attendance record's worked time against the configured daily
//! baseline into overtime (hours beyond the baseline) and delay (hours short
//! of it). Exactly one of the two is nonzero unless the record lands on the
//! baseline, in which case both are zero.
//!
//! Known limitation: exit is interpreted as same-day as entry. An exit before
//! entry is treated as a data-quality problem and clamps work hours to zero
//! rather than wrapping to the next day; overnight shifts are unsupported.

use rust_decimal::Decimal;

use crate::models::AttendanceRecord;

use super::normalize::{hours_between, parse_clock};

/// Default daily baseline in hours.
pub const DEFAULT_BASELINE_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The per-record split of worked time against the daily baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkHoursBreakdown {
    /// Hours between entry and exit, clamped at zero.
    pub work_hours: Decimal,
    /// Hours beyond the baseline.
    pub overtime: Decimal,
    /// Hours short of the baseline.
    pub delay: Decimal,
}

/// Splits a worked-hours total against the baseline.
///
/// # Examples
///
/// ```
/// use attendance_engine::pipeline::{split_against_baseline, DEFAULT_BASELINE_HOURS};
/// use rust_decimal::Decimal;
///
/// let split = split_against_baseline(Decimal::new(125, 1), DEFAULT_BASELINE_HOURS);
/// assert_eq!(split.overtime, Decimal::new(45, 1)); // 4.5
/// assert_eq!(split.delay, Decimal::ZERO);
/// ```
pub fn split_against_baseline(work_hours: Decimal, baseline: Decimal) -> WorkHoursBreakdown {
    let work_hours = work_hours.max(Decimal::ZERO);

    let overtime = (work_hours - baseline).max(Decimal::ZERO);
    let delay = (baseline - work_hours).max(Decimal::ZERO);

    WorkHoursBreakdown {
        work_hours,
        overtime,
        delay,
    }
}

/// Computes the work-hours breakdown for one attendance record.
///
/// Entry and exit are parsed as same-day `HH:MM` clocks. Either field failing
/// to parse, or an exit before entry, coerces work hours to zero (which in
/// turn reports a full-baseline delay); malformed records never abort the
/// batch.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
/// use attendance_engine::pipeline::{breakdown_for_record, DEFAULT_BASELINE_HOURS};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
///     department: "Sales".to_string(),
///     employee: "amira".to_string(),
///     entry: "09:00".to_string(),
///     exit: "17:00".to_string(),
/// };
///
/// let split = breakdown_for_record(&record, DEFAULT_BASELINE_HOURS);
/// assert_eq!(split.work_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime, Decimal::ZERO);
/// assert_eq!(split.delay, Decimal::ZERO);
/// ```
pub fn breakdown_for_record(record: &AttendanceRecord, baseline: Decimal) -> WorkHoursBreakdown {
    let work_hours = match (parse_clock(&record.entry), parse_clock(&record.exit)) {
        (Ok(entry), Ok(exit)) => hours_between(entry, exit),
        _ => Decimal::ZERO,
    };

    split_against_baseline(work_hours, baseline)
}
