//! Raw input record models.
//!
//! These structs mirror the upstream attendance dataset row-for-row,
//! including its PascalCase column names (`Date`, `Department`, `Employee`,
//! `Entry`, `Exit`, `Start`, `End`). Clock fields are kept as raw strings:
//! parsing happens inside the pipeline so that one malformed field can be
//! absorbed without dropping the whole batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single day's time-clock record for one employee.
///
/// `entry` and `exit` are raw `HH:MM` clock strings, interpreted within the
/// same calendar day (no overnight shifts).
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
///
/// let json = r#"{
///     "Date": "2024-05-06",
///     "Department": "Sales",
///     "Employee": "amira",
///     "Entry": "09:00",
///     "Exit": "17:00"
/// }"#;
/// let record: AttendanceRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.employee, "amira");
/// assert_eq!(record.entry, "09:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar date of the record.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// The department the employee belongs to.
    #[serde(rename = "Department")]
    pub department: String,
    /// The employee identifier.
    #[serde(rename = "Employee")]
    pub employee: String,
    /// Raw clock-in time (`HH:MM`).
    #[serde(rename = "Entry")]
    pub entry: String,
    /// Raw clock-out time (`HH:MM`), same day as entry.
    #[serde(rename = "Exit")]
    pub exit: String,
}

/// An approved leave interval for one employee.
///
/// The `[start, end]` range is inclusive on both ends; a single record
/// expands to one excluded calendar date per covered day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The department the employee belongs to.
    #[serde(rename = "Department")]
    pub department: String,
    /// The employee identifier.
    #[serde(rename = "Employee")]
    pub employee: String,
    /// First day of the leave interval (inclusive).
    #[serde(rename = "Start")]
    pub start: NaiveDate,
    /// Last day of the leave interval (inclusive).
    #[serde(rename = "End")]
    pub end: NaiveDate,
}

/// An approved partial-day absence for one employee.
///
/// `start` and `end` are raw `HH:MM:SS` clock strings; the absence duration
/// is `end - start` in hours, truncated to zero when the window is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRecord {
    /// The calendar date of the absence.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// The department the employee belongs to.
    #[serde(rename = "Department")]
    pub department: String,
    /// The employee identifier.
    #[serde(rename = "Employee")]
    pub employee: String,
    /// Raw absence start time (`HH:MM:SS`).
    #[serde(rename = "Start")]
    pub start: String,
    /// Raw absence end time (`HH:MM:SS`).
    #[serde(rename = "End")]
    pub end: String,
}
