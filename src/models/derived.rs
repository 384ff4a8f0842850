//! Pipeline output models.
//!
//! This module contains the per-day [`DerivedAttendanceRow`] produced by
//! joining attendance, holiday, and permission data, the monthly grouping key
//! [`Month`], and the final [`MonthlyAggregate`] reporting row.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A calendar month used as an aggregation key.
///
/// Serializes as `"YYYY-MM"` so downstream consumers get a single sortable
/// column rather than a nested struct.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Month;
/// use chrono::NaiveDate;
///
/// let month = Month::of(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
/// assert_eq!(month.to_string(), "2024-05");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl Month {
    /// Returns the month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| format!("invalid month '{s}', expected YYYY-MM"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid year in month '{s}'"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid month number in '{s}'"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("month number out of range in '{s}'"));
        }
        Ok(Self { year, month })
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// One attendance record after normalization, joining, and flagging.
///
/// Produced by joining one [`AttendanceRecord`](super::AttendanceRecord) with
/// at most one permission-hours value and a leave-membership flag derived
/// from the holiday ranges. Rows flagged `on_leave` are retained here for
/// per-day consumers (e.g. a charting layer) but never reach aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAttendanceRow {
    /// The calendar date of the row.
    pub date: NaiveDate,
    /// The department the employee belongs to.
    pub department: String,
    /// The employee identifier.
    pub employee: String,
    /// Hours between entry and exit (zero when clocks are malformed or
    /// exit precedes entry).
    pub work_hours: Decimal,
    /// Hours worked beyond the baseline.
    pub overtime: Decimal,
    /// Hours short of the baseline.
    pub delay: Decimal,
    /// Work hours minus approved permission hours; may be negative.
    pub adjusted_work_hours: Decimal,
    /// Whether the date falls inside an approved holiday range for this
    /// employee and department.
    pub on_leave: bool,
    /// Whether the date is a Saturday or Sunday.
    pub is_weekend: bool,
}

/// One reporting row per (employee, department, month) with at least one
/// surviving attendance record.
///
/// Field names on the wire match the upstream dataset's output columns:
/// `Employee`, `Department`, `Month`, `Delay`, `Overtime`, `Fine`, `Bonus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// The employee identifier.
    #[serde(rename = "Employee")]
    pub employee: String,
    /// The department the employee belongs to.
    #[serde(rename = "Department")]
    pub department: String,
    /// The calendar month this row aggregates.
    #[serde(rename = "Month")]
    pub month: Month,
    /// Sum of per-record delay hours across surviving rows.
    #[serde(rename = "Delay")]
    pub total_delay: Decimal,
    /// Sum of per-record overtime hours across surviving rows.
    #[serde(rename = "Overtime")]
    pub total_overtime: Decimal,
    /// Fine rate from the delay tier table.
    #[serde(rename = "Fine")]
    pub fine_rate: Decimal,
    /// Bonus rate from the overtime tier table.
    #[serde(rename = "Bonus")]
    pub bonus_rate: Decimal,
}
