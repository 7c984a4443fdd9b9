use serde_json::json;
use spatter_gen::commands::{
    execute_check, execute_plan, render_report, render_summary, validate_args, CheckArgs, PlanArgs,
};
use spatter_gen::output::read_schedule;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_trace(contents: &serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_validate_args_valid() {
    let args = PlanArgs {
        trace_path: PathBuf::from("kernels.json"),
        num_lanes: 4,
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_empty_trace() {
    let args = PlanArgs {
        num_lanes: 4,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_lanes() {
    let args = PlanArgs {
        trace_path: PathBuf::from("kernels.json"),
        num_lanes: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_zero_element_size() {
    let args = PlanArgs {
        trace_path: PathBuf::from("kernels.json"),
        value_size: 0,
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_blank_clock() {
    let args = PlanArgs {
        trace_path: PathBuf::from("kernels.json"),
        clock: Some("  ".to_string()),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_plan_writes_schedule() {
    let trace = write_trace(&json!([
        {"kernel": "gather", "pattern": [0, 1, 2, 3, 4, 5, 6, 7]},
        {"kernel": "scatter", "count": 4, "pattern": [1, 3, 5, 7]}
    ]));
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("schedule.json");

    let args = PlanArgs {
        trace_path: trace.path().to_path_buf(),
        num_lanes: 4,
        clock: Some("2GHz".to_string()),
        output_json: output.clone(),
        ..Default::default()
    };
    execute_plan(args).unwrap();

    let schedule = read_schedule(&output).unwrap();
    assert_eq!(schedule.kernels_scheduled, 2);
    assert_eq!(schedule.config.clock.as_deref(), Some("2GHz"));
    assert_eq!(schedule.lanes.len(), 4);
    assert!(schedule.lanes.iter().all(|l| l.calls.len() == 2));
    assert_eq!(schedule.lanes[3].calls[1].count, 4);

    let summary = render_summary(&schedule);
    assert!(summary.contains("Kernels: 2 scheduled, 0 skipped, 2 total"));
}

#[test]
fn test_plan_fails_when_kernel_too_short() {
    let trace = write_trace(&json!([{"kernel": "gather", "pattern": [0, 1]}]));
    let out_dir = tempfile::tempdir().unwrap();

    let args = PlanArgs {
        trace_path: trace.path().to_path_buf(),
        num_lanes: 3,
        output_json: out_dir.path().join("schedule.json"),
        ..Default::default()
    };

    assert!(execute_plan(args).is_err());
    assert!(!out_dir.path().join("schedule.json").exists());
}

#[test]
fn test_check_reports_invalid_and_unpartitionable() {
    let trace = write_trace(&json!([
        {"kernel": "gather", "pattern": [0, 1, 2, 3]},
        {"kernel": "scatter"},
        {"kernel": "gather", "pattern": [0]}
    ]));

    let report = execute_check(&CheckArgs {
        trace_path: trace.path().to_path_buf(),
        num_lanes: Some(2),
    })
    .unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 2);
    assert_eq!(report.invalid.len(), 1);
    assert_eq!(report.invalid[0].0, 1);
    assert_eq!(report.unpartitionable.len(), 1);
    assert_eq!(report.unpartitionable[0].0, 2);
    assert!(!report.is_schedulable());
}

#[test]
fn test_check_without_lanes_does_not_claim_schedulable() {
    let trace = write_trace(&json!([
        {"kernel": "gather", "pattern": [0, 1, 2, 3]},
        {"kernel": "scatter", "pattern": [5]}
    ]));

    let report = execute_check(&CheckArgs {
        trace_path: trace.path().to_path_buf(),
        num_lanes: None,
    })
    .unwrap();

    assert_eq!(report.valid, 2);
    assert!(!report.is_schedulable());

    let text = render_report(&report);
    assert!(!text.contains("can be scheduled"));
    assert!(text.contains("2 records parse"));
}

#[test]
fn test_check_all_invalid_is_not_schedulable() {
    let trace = write_trace(&json!([{"pattern": [1]}, {"kernel": "gather"}]));

    let report = execute_check(&CheckArgs {
        trace_path: trace.path().to_path_buf(),
        num_lanes: Some(1),
    })
    .unwrap();

    assert_eq!(report.invalid.len(), 2);
    assert!(!report.is_schedulable());

    let text = render_report(&report);
    assert!(!text.contains("can be scheduled"));
    assert!(text.contains("No valid kernels to schedule"));
}

#[test]
fn test_check_with_lanes_reports_schedulable() {
    let trace = write_trace(&json!([{"kernel": "gather", "pattern": [0, 1, 2, 3]}]));

    let report = execute_check(&CheckArgs {
        trace_path: trace.path().to_path_buf(),
        num_lanes: Some(4),
    })
    .unwrap();

    assert!(report.is_schedulable());
    assert!(render_report(&report).contains("✓ Trace can be scheduled across 4 lanes"));
}
