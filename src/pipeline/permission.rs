//! Permission adjustment.
//!
//! Approved partial-day absences reduce a record's counted work hours without
//! penalty. The ledger replaces the legacy relational join with an explicit
//! map lookup keyed (date, department, employee): a missing key means zero
//! adjustment, and duplicate keys sum their durations, which is deterministic
//! and can never duplicate attendance rows the way the join could.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::PermissionRecord;

use super::normalize::{hours_between, parse_clock};

/// Permission hours keyed by (date, department, employee).
#[derive(Debug, Clone, Default)]
pub struct PermissionLedger {
    hours: HashMap<(NaiveDate, String, String), Decimal>,
}

impl PermissionLedger {
    /// Builds a ledger from raw permission records.
    ///
    /// Each record's duration is `end - start` in hours; a malformed clock
    /// string or an end before start truncates that record's duration to
    /// zero. Records sharing a key are summed.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::PermissionRecord;
    /// use attendance_engine::pipeline::PermissionLedger;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    /// let ledger = PermissionLedger::from_records(&[PermissionRecord {
    ///     date,
    ///     department: "Sales".to_string(),
    ///     employee: "amira".to_string(),
    ///     start: "10:00:00".to_string(),
    ///     end: "11:30:00".to_string(),
    /// }]);
    ///
    /// assert_eq!(ledger.hours_for(date, "Sales", "amira"), Decimal::new(15, 1)); // 1.5
    /// assert_eq!(ledger.hours_for(date, "Sales", "bassem"), Decimal::ZERO);
    /// ```
    pub fn from_records(records: &[PermissionRecord]) -> Self {
        let mut hours: HashMap<(NaiveDate, String, String), Decimal> = HashMap::new();

        for record in records {
            let duration = permission_hours(record);
            let key = (
                record.date,
                record.department.clone(),
                record.employee.clone(),
            );
            *hours.entry(key).or_insert(Decimal::ZERO) += duration;
        }

        Self { hours }
    }

    /// Returns the approved absence hours for a key, zero when absent.
    ///
    /// The zero here is missing-key semantics, not a recorded zero-duration
    /// permission.
    pub fn hours_for(&self, date: NaiveDate, department: &str, employee: &str) -> Decimal {
        self.hours
            .get(&(date, department.to_string(), employee.to_string()))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the number of distinct keys in the ledger.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Returns whether the ledger holds no permissions.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

/// Duration of one permission window in hours, truncated to zero when the
/// window is malformed or inverted.
fn permission_hours(record: &PermissionRecord) -> Decimal {
    match (parse_clock(&record.start), parse_clock(&record.end)) {
        (Ok(start), Ok(end)) => hours_between(start, end).max(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Subtracts permission hours from worked hours.
///
/// Deliberately unclamped: the adjusted value may go negative when the
/// approved absence exceeds the worked time, and propagates as-is.
pub fn adjust_work_hours(work_hours: Decimal, permission_hours: Decimal) -> Decimal {
    work_hours - permission_hours
}
