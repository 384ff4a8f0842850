//! Record source seam.
//!
//! The engine treats record storage as a synchronous, read-only dependency
//! exposing three fetch operations. A failure here is the only condition that
//! aborts a whole pipeline invocation; everything downstream absorbs
//! per-record problems locally.

use crate::config::PolicyConfig;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, HolidayRecord, PermissionRecord};
use crate::pipeline::{PipelineReport, run_pipeline};

/// A read-only source of attendance, holiday, and permission records.
///
/// Implementations fetch a bounded snapshot per invocation; the engine never
/// writes back and holds no state between calls. Fetch failures surface as
/// [`EngineError::SourceUnavailable`](crate::error::EngineError::SourceUnavailable).
pub trait RecordSource {
    /// Fetches all attendance records in the snapshot.
    fn fetch_attendance(&self) -> EngineResult<Vec<AttendanceRecord>>;

    /// Fetches all holiday records in the snapshot.
    fn fetch_holidays(&self) -> EngineResult<Vec<HolidayRecord>>;

    /// Fetches all permission records in the snapshot.
    fn fetch_permissions(&self) -> EngineResult<Vec<PermissionRecord>>;
}

/// An in-memory record source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    /// Attendance records returned by [`RecordSource::fetch_attendance`].
    pub attendance: Vec<AttendanceRecord>,
    /// Holiday records returned by [`RecordSource::fetch_holidays`].
    pub holidays: Vec<HolidayRecord>,
    /// Permission records returned by [`RecordSource::fetch_permissions`].
    pub permissions: Vec<PermissionRecord>,
}

impl RecordSource for InMemorySource {
    fn fetch_attendance(&self) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self.attendance.clone())
    }

    fn fetch_holidays(&self) -> EngineResult<Vec<HolidayRecord>> {
        Ok(self.holidays.clone())
    }

    fn fetch_permissions(&self) -> EngineResult<Vec<PermissionRecord>> {
        Ok(self.permissions.clone())
    }
}

/// Fetches one snapshot from the source and runs the pipeline over it.
///
/// # Errors
///
/// Propagates any fetch failure from the source; the pipeline itself cannot
/// fail.
pub fn run_from_source<S: RecordSource>(
    source: &S,
    policy: &PolicyConfig,
) -> EngineResult<PipelineReport> {
    let attendance = source.fetch_attendance()?;
    let holidays = source.fetch_holidays()?;
    let permissions = source.fetch_permissions()?;

    Ok(run_pipeline(&attendance, &holidays, &permissions, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;

    struct FailingSource;

    impl RecordSource for FailingSource {
        fn fetch_attendance(&self) -> EngineResult<Vec<AttendanceRecord>> {
            Err(EngineError::SourceUnavailable {
                message: "connection refused".to_string(),
            })
        }

        fn fetch_holidays(&self) -> EngineResult<Vec<HolidayRecord>> {
            Ok(vec![])
        }

        fn fetch_permissions(&self) -> EngineResult<Vec<PermissionRecord>> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_in_memory_source_round_trips_records() {
        let source = InMemorySource {
            attendance: vec![AttendanceRecord {
                date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
                department: "Sales".to_string(),
                employee: "amira".to_string(),
                entry: "09:00".to_string(),
                exit: "17:00".to_string(),
            }],
            ..InMemorySource::default()
        };

        let report = run_from_source(&source, &PolicyConfig::default()).unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.monthly.len(), 1);
    }

    #[test]
    fn test_empty_source_yields_empty_report() {
        let report =
            run_from_source(&InMemorySource::default(), &PolicyConfig::default()).unwrap();
        assert!(report.rows.is_empty());
        assert!(report.monthly.is_empty());
    }

    #[test]
    fn test_source_failure_aborts_the_run() {
        let err = run_from_source(&FailingSource, &PolicyConfig::default()).unwrap_err();
        assert!(matches!(err, EngineError::SourceUnavailable { .. }));
    }
}
