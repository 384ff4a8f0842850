//! Performance benchmarks for the Attendance Performance Engine.
//!
//! This benchmark suite checks that the pipeline stays a cheap, single-pass
//! batch transform:
//! - Single record through the pipeline: < 100μs mean
//! - One employee-month (~22 records): < 1ms mean
//! - A department-year (hundreds of records with holidays/permissions): < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::config::PolicyConfig;
use attendance_engine::models::{AttendanceRecord, HolidayRecord, PermissionRecord};
use attendance_engine::pipeline::run_pipeline;

use chrono::NaiveDate;

/// Generates one attendance record per weekday starting from a fixed Monday.
fn create_attendance(count: usize, employee: &str) -> Vec<AttendanceRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(); // Monday

    (0..count)
        .map(|i| {
            // Vary exits so overtime, baseline, and delay days all appear
            let exit = match i % 3 {
                0 => "17:00",
                1 => "19:30",
                _ => "15:00",
            };
            AttendanceRecord {
                date: start + chrono::Days::new(i as u64),
                department: "Sales".to_string(),
                employee: employee.to_string(),
                entry: "09:00".to_string(),
                exit: exit.to_string(),
            }
        })
        .collect()
}

fn create_holidays(employee: &str) -> Vec<HolidayRecord> {
    vec![HolidayRecord {
        department: "Sales".to_string(),
        employee: employee.to_string(),
        start: NaiveDate::from_ymd_opt(2024, 5, 13).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
    }]
}

fn create_permissions(employee: &str) -> Vec<PermissionRecord> {
    vec![PermissionRecord {
        date: NaiveDate::from_ymd_opt(2024, 5, 8).unwrap(),
        department: "Sales".to_string(),
        employee: employee.to_string(),
        start: "10:00:00".to_string(),
        end: "11:30:00".to_string(),
    }]
}

fn bench_single_record(c: &mut Criterion) {
    let policy = PolicyConfig::default();
    let attendance = create_attendance(1, "emp_001");

    c.bench_function("pipeline_single_record", |b| {
        b.iter(|| {
            black_box(run_pipeline(
                black_box(&attendance),
                black_box(&[]),
                black_box(&[]),
                black_box(&policy),
            ))
        })
    });
}

fn bench_employee_month(c: &mut Criterion) {
    let policy = PolicyConfig::default();
    let attendance = create_attendance(22, "emp_001");
    let holidays = create_holidays("emp_001");
    let permissions = create_permissions("emp_001");

    c.bench_function("pipeline_employee_month", |b| {
        b.iter(|| {
            black_box(run_pipeline(
                black_box(&attendance),
                black_box(&holidays),
                black_box(&permissions),
                black_box(&policy),
            ))
        })
    });
}

fn bench_department_scaling(c: &mut Criterion) {
    let policy = PolicyConfig::default();
    let mut group = c.benchmark_group("pipeline_department");

    for employee_count in [10usize, 50, 100] {
        let mut attendance = Vec::new();
        let mut holidays = Vec::new();
        let mut permissions = Vec::new();
        for i in 0..employee_count {
            let employee = format!("emp_{i:03}");
            attendance.extend(create_attendance(22, &employee));
            holidays.extend(create_holidays(&employee));
            permissions.extend(create_permissions(&employee));
        }

        group.throughput(Throughput::Elements(attendance.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employee_count,
            |b, _| {
                b.iter(|| {
                    black_box(run_pipeline(
                        black_box(&attendance),
                        black_box(&holidays),
                        black_box(&permissions),
                        black_box(&policy),
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_record,
    bench_employee_month,
    bench_department_scaling
);
criterion_main!(benches);
