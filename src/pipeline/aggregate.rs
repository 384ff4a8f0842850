//! Monthly aggregation.
//!
//! Groups surviving attendance rows by (employee, department, month), sums
//! the per-record delay and overtime, and classifies each group's totals
//! against the policy tier tables. The sums use the pre-adjustment delay and
//! overtime from the baseline split; adjusted work hours are reported only on
//! the daily rows and never re-derived at month level.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::config::PolicyConfig;
use crate::models::{DerivedAttendanceRow, Month, MonthlyAggregate};

use super::exclusion::is_excluded;
use super::incentive::rate_for;

/// Aggregates derived rows into one reporting row per (employee, department,
/// month).
///
/// Rows flagged `on_leave` are dropped before grouping; a group with no
/// surviving rows simply produces no output, never a zero-valued row. Output
/// ordering is deterministic: ascending by employee, then department, then
/// month.
///
/// # Example
///
/// ```
/// use attendance_engine::config::PolicyConfig;
/// use attendance_engine::models::DerivedAttendanceRow;
/// use attendance_engine::pipeline::aggregate_monthly;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let row = DerivedAttendanceRow {
///     date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
///     department: "Sales".to_string(),
///     employee: "amira".to_string(),
///     work_hours: Decimal::new(125, 1),
///     overtime: Decimal::new(45, 1),
///     delay: Decimal::ZERO,
///     adjusted_work_hours: Decimal::new(125, 1),
///     on_leave: false,
///     is_weekend: false,
/// };
///
/// let monthly = aggregate_monthly(&[row], &PolicyConfig::default());
/// assert_eq!(monthly.len(), 1);
/// assert_eq!(monthly[0].total_overtime, Decimal::new(45, 1));
/// assert_eq!(monthly[0].bonus_rate, Decimal::new(2, 2)); // 4.5 exceeds 3, not 10
/// ```
pub fn aggregate_monthly(
    rows: &[DerivedAttendanceRow],
    policy: &PolicyConfig,
) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<(String, String, Month), (Decimal, Decimal)> = BTreeMap::new();

    for row in rows.iter().filter(|row| !is_excluded(row)) {
        let key = (
            row.employee.clone(),
            row.department.clone(),
            Month::of(row.date),
        );
        let (total_delay, total_overtime) =
            groups.entry(key).or_insert((Decimal::ZERO, Decimal::ZERO));
        *total_delay += row.delay;
        *total_overtime += row.overtime;
    }

    groups
        .into_iter()
        .map(
            |((employee, department, month), (total_delay, total_overtime))| MonthlyAggregate {
                employee,
                department,
                month,
                total_delay,
                total_overtime,
                fine_rate: rate_for(total_delay, &policy.fine_tiers),
                bonus_rate: rate_for(total_overtime, &policy.bonus_tiers),
            },
        )
        .collect()
}
