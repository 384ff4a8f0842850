//! Holiday exclusion and weekend detection.
//!
//! Approved holiday ranges expand into a per-(department, employee) calendar
//! of excluded dates. A derived row whose date appears in that calendar is
//! `on_leave` and never reaches aggregation.
//!
//! The legacy dataset applied two drops in sequence: first rows that were
//! `on_leave` AND fell on a weekend, then all remaining `on_leave` rows. The
//! first rule is strictly subsumed by the second, so the authoritative rule
//! here is the single unconditional drop; [`is_excluded`] encodes it and the
//! tests pin the net behavior across weekday and weekend leave days.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

use crate::models::{DerivedAttendanceRow, HolidayRecord};

/// A lookup of approved leave days keyed by department, employee, and date.
#[derive(Debug, Clone, Default)]
pub struct LeaveCalendar {
    days: HashSet<(String, String, NaiveDate)>,
}

impl LeaveCalendar {
    /// Builds a calendar by expanding every holiday range into its inclusive
    /// list of covered dates.
    ///
    /// A record whose `end` precedes its `start` covers nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::HolidayRecord;
    /// use attendance_engine::pipeline::LeaveCalendar;
    /// use chrono::NaiveDate;
    ///
    /// let calendar = LeaveCalendar::from_records(&[HolidayRecord {
    ///     department: "Sales".to_string(),
    ///     employee: "amira".to_string(),
    ///     start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    ///     end: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
    /// }]);
    ///
    /// assert!(calendar.is_on_leave("Sales", "amira", NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()));
    /// assert!(!calendar.is_on_leave("Sales", "amira", NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()));
    /// ```
    pub fn from_records(records: &[HolidayRecord]) -> Self {
        let mut days = HashSet::new();

        for record in records {
            for date in record
                .start
                .iter_days()
                .take_while(|date| *date <= record.end)
            {
                days.insert((record.department.clone(), record.employee.clone(), date));
            }
        }

        Self { days }
    }

    /// Returns whether the given employee/department is on approved leave on
    /// the given date.
    pub fn is_on_leave(&self, department: &str, employee: &str, date: NaiveDate) -> bool {
        self.days
            .contains(&(department.to_string(), employee.to_string(), date))
    }

    /// Returns the number of distinct leave days in the calendar.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns whether the calendar contains no leave days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Returns whether a date falls on Saturday or Sunday.
///
/// # Example
///
/// ```
/// use attendance_engine::pipeline::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-05-04 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()));
/// // 2024-05-06 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns whether a derived row is excluded from aggregation.
///
/// Every `on_leave` row is excluded regardless of weekend status; the
/// weekend flag is informational only.
pub fn is_excluded(row: &DerivedAttendanceRow) -> bool {
    row.on_leave
}
