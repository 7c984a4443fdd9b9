//! Check command implementation.
//!
//! Validates every record of a trace file without scheduling anything, and
//! optionally checks that each valid kernel can be split across a lane count.

use super::models::CheckArgs;
use crate::parser::{load_trace_records, parse_kernel_value};
use crate::partition::partition_trace;
use anyhow::{Context, Result};
use log::info;

/// Outcome of checking a trace file
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub total: usize,
    /// Lane count partitioning was checked against, if any
    pub lanes: Option<usize>,
    pub valid: usize,
    /// (record index, error message)
    pub invalid: Vec<(usize, String)>,
    /// (record index, error message) for kernels that cannot be partitioned
    pub unpartitionable: Vec<(usize, String)>,
}

impl CheckReport {
    /// True when partitioning was checked and every valid kernel fits the lanes
    pub fn is_schedulable(&self) -> bool {
        self.lanes.is_some() && self.valid > 0 && self.unpartitionable.is_empty()
    }
}

/// Execute the check command
///
/// **Public** - main entry point called from main.rs
pub fn execute_check(args: &CheckArgs) -> Result<CheckReport> {
    let records = load_trace_records(&args.trace_path).context("Failed to load trace file")?;

    let mut report = CheckReport {
        total: records.len(),
        lanes: args.num_lanes,
        ..Default::default()
    };

    for (index, record) in records.iter().enumerate() {
        match parse_kernel_value(record) {
            Ok(spec) => {
                report.valid += 1;
                if let Some(lanes) = args.num_lanes {
                    if let Err(e) = partition_trace(&spec.trace, lanes) {
                        report.unpartitionable.push((index, e.to_string()));
                    }
                }
            }
            Err(e) => report.invalid.push((index, e.to_string())),
        }
    }

    info!(
        "Checked {} records: {} valid, {} invalid",
        report.total,
        report.valid,
        report.invalid.len()
    );

    Ok(report)
}

/// Print a check report to stdout
pub fn print_report(report: &CheckReport) {
    print!("{}", render_report(report));
}

/// Render a check report as text
///
/// **Public** - used by print_report and tests
pub fn render_report(report: &CheckReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Records: {}\n", report.total));
    out.push_str(&format!("  Valid:   {}\n", report.valid));
    out.push_str(&format!("  Invalid: {}\n", report.invalid.len()));

    for (index, error) in &report.invalid {
        out.push_str(&format!("  ✗ kernel {}: {}\n", index, error));
    }
    for (index, error) in &report.unpartitionable {
        out.push_str(&format!("  ✗ kernel {} cannot be partitioned: {}\n", index, error));
    }

    match report.lanes {
        Some(lanes) if report.is_schedulable() => {
            out.push_str(&format!("✓ Trace can be scheduled across {} lanes\n", lanes));
        }
        Some(_) if report.valid == 0 => out.push_str("✗ No valid kernels to schedule\n"),
        Some(_) => {}
        None if report.valid > 0 => out.push_str(&format!(
            "✓ {} records parse (pass --lanes to check partitioning)\n",
            report.valid
        )),
        None => out.push_str("✗ No valid kernels in trace\n"),
    }

    out
}
