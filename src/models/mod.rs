//! Core data models for the Attendance Performance Engine.
//!
//! This module contains the raw input records fetched from the storage layer
//! and the derived rows produced by the pipeline.

mod derived;
mod records;

pub use derived::{DerivedAttendanceRow, Month, MonthlyAggregate};
pub use records::{AttendanceRecord, HolidayRecord, PermissionRecord};
