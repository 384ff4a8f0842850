//! Request types for the Attendance Performance Engine API.
//!
//! This module defines the JSON request structure for the `/report` endpoint.
//! The three record arrays use the upstream dataset's PascalCase field names
//! (`Date`, `Department`, `Employee`, `Entry`, `Exit`, `Start`, `End`).

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, HolidayRecord, PermissionRecord};

/// Request body for the `/report` endpoint.
///
/// Carries one immutable snapshot of the three record sets for a single
/// pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Raw time-clock records.
    pub attendance: Vec<AttendanceRecord>,
    /// Approved leave intervals.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
    /// Approved partial-day absences.
    #[serde(default)]
    pub permissions: Vec<PermissionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_with_upstream_field_casing() {
        let json = r#"{
            "attendance": [
                {
                    "Date": "2024-05-06",
                    "Department": "Sales",
                    "Employee": "amira",
                    "Entry": "09:00",
                    "Exit": "17:00"
                }
            ],
            "holidays": [
                {
                    "Department": "Sales",
                    "Employee": "amira",
                    "Start": "2024-05-01",
                    "End": "2024-05-03"
                }
            ],
            "permissions": [
                {
                    "Date": "2024-05-06",
                    "Department": "Sales",
                    "Employee": "amira",
                    "Start": "10:00:00",
                    "End": "11:30:00"
                }
            ]
        }"#;

        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.attendance.len(), 1);
        assert_eq!(request.holidays.len(), 1);
        assert_eq!(request.permissions.len(), 1);
    }

    #[test]
    fn test_holidays_and_permissions_default_to_empty() {
        let json = r#"{ "attendance": [] }"#;
        let request: ReportRequest = serde_json::from_str(json).unwrap();
        assert!(request.attendance.is_empty());
        assert!(request.holidays.is_empty());
        assert!(request.permissions.is_empty());
    }
}
