//! Reconciliation-and-scoring pipeline for attendance records.
//!
//! This module contains the core batch transform: clock-time normalization,
//! work-hours calculation against the daily baseline, holiday exclusion,
//! permission adjustment, monthly aggregation, and tiered fine/bonus
//! classification. Data flows strictly left to right through those stages;
//! the whole run is pure, single-threaded, and proportional to input size.

mod aggregate;
mod exclusion;
mod incentive;
mod normalize;
mod permission;
mod work_hours;

pub use aggregate::aggregate_monthly;
pub use exclusion::{LeaveCalendar, is_excluded, is_weekend};
pub use incentive::{DEFAULT_TIERS, Tier, rate_for};
pub use normalize::{
    ATTENDANCE_CLOCK_FORMAT, ClockParseError, PERMISSION_CLOCK_FORMAT, hours_between, parse_clock,
};
pub use permission::{PermissionLedger, adjust_work_hours};
pub use work_hours::{
    DEFAULT_BASELINE_HOURS, WorkHoursBreakdown, breakdown_for_record, split_against_baseline,
};

use crate::config::PolicyConfig;
use crate::models::{
    AttendanceRecord, DerivedAttendanceRow, HolidayRecord, MonthlyAggregate, PermissionRecord,
};

/// The full output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PipelineReport {
    /// Every attendance record as a derived, flagged row, in input order.
    /// Rows flagged `on_leave` appear here but are excluded from `monthly`.
    pub rows: Vec<DerivedAttendanceRow>,
    /// One aggregate per (employee, department, month) with at least one
    /// surviving row, in deterministic key order.
    pub monthly: Vec<MonthlyAggregate>,
}

/// Derives one flagged row per attendance record.
///
/// Joins each record with its permission hours (missing key = zero) and the
/// expanded holiday calendar, and splits its worked time against the policy
/// baseline. Per-record parse failures are absorbed by coercing the affected
/// duration to zero; this function cannot fail.
pub fn derive_rows(
    attendance: &[AttendanceRecord],
    holidays: &[HolidayRecord],
    permissions: &[PermissionRecord],
    policy: &PolicyConfig,
) -> Vec<DerivedAttendanceRow> {
    let calendar = LeaveCalendar::from_records(holidays);
    let ledger = PermissionLedger::from_records(permissions);

    attendance
        .iter()
        .map(|record| {
            let split = breakdown_for_record(record, policy.baseline_hours);
            let permission_hours =
                ledger.hours_for(record.date, &record.department, &record.employee);

            DerivedAttendanceRow {
                date: record.date,
                department: record.department.clone(),
                employee: record.employee.clone(),
                work_hours: split.work_hours,
                overtime: split.overtime,
                delay: split.delay,
                adjusted_work_hours: adjust_work_hours(split.work_hours, permission_hours),
                on_leave: calendar.is_on_leave(&record.department, &record.employee, record.date),
                is_weekend: is_weekend(record.date),
            }
        })
        .collect()
}

/// Runs the full pipeline over one immutable snapshot of the three record
/// sets.
///
/// Empty attendance input yields an empty report. Running twice over the same
/// snapshot yields identical output.
///
/// # Example
///
/// ```
/// use attendance_engine::config::PolicyConfig;
/// use attendance_engine::models::AttendanceRecord;
/// use attendance_engine::pipeline::run_pipeline;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let attendance = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
///     department: "Sales".to_string(),
///     employee: "amira".to_string(),
///     entry: "09:00".to_string(),
///     exit: "21:30".to_string(),
/// }];
///
/// let report = run_pipeline(&attendance, &[], &[], &PolicyConfig::default());
/// assert_eq!(report.rows[0].overtime, Decimal::new(45, 1));
/// assert_eq!(report.monthly[0].bonus_rate, Decimal::new(2, 2));
/// ```
pub fn run_pipeline(
    attendance: &[AttendanceRecord],
    holidays: &[HolidayRecord],
    permissions: &[PermissionRecord],
    policy: &PolicyConfig,
) -> PipelineReport {
    let rows = derive_rows(attendance, holidays, permissions, policy);
    let monthly = aggregate_monthly(&rows, policy);

    PipelineReport { rows, monthly }
}
