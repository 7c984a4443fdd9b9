//! Plan command implementation.
//!
//! The plan command:
//! 1. Loads and ingests the trace across the requested lanes
//! 2. Starts traffic into recording generators
//! 3. Builds the schedule
//! 4. Writes the schedule JSON

use super::models::PlanArgs;
use crate::generator::{RecordingGenerator, TraceOrchestrator};
use crate::output::{to_schedule, write_schedule, Schedule};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the plan command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Trace file missing or malformed
/// * A kernel shorter than the lane count
/// * File write errors
pub fn execute_plan(args: PlanArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = args.to_config();

    info!("Planning trace: {}", args.trace_path.display());
    info!("Lanes: {}", args.num_lanes);

    // Step 1: Ingest
    info!("Step 1/4: Ingesting kernel records...");
    let mut orchestrator =
        TraceOrchestrator::from_trace_file(&config, &args.trace_path, RecordingGenerator::new)
        .context("Failed to set up lanes from trace")?;

    for skipped in orchestrator.skipped() {
        debug!("Skipped kernel {}: {}", skipped.index, skipped.error);
    }

    // Step 2: Start traffic
    info!("Step 2/4: Starting traffic...");
    let issued = orchestrator
        .start_traffic()
        .context("Failed to start traffic")?;
    debug!("Issued {} kernel registrations", issued);

    // Step 3: Build schedule
    info!("Step 3/4: Building schedule...");
    let trace_file = args.trace_path.display().to_string();
    let schedule = to_schedule(&trace_file, &config, orchestrator);

    // Step 4: Write output
    info!("Step 4/4: Writing schedule...");
    write_schedule(&schedule, &args.output_json).context("Failed to write schedule JSON")?;

    if args.print_summary {
        println!("{}", render_summary(&schedule));
    }

    info!("Plan complete in {:.2?}", start_time.elapsed());

    Ok(())
}

/// Validate plan arguments before execution
///
/// **Public** - called from main.rs before execute_plan
pub fn validate_args(args: &PlanArgs) -> Result<()> {
    if args.trace_path.as_os_str().is_empty() {
        bail!("Trace path cannot be empty");
    }

    if args.num_lanes == 0 {
        bail!("Lane count must be at least 1");
    }

    if args.index_size == 0 || args.value_size == 0 {
        bail!("Element sizes must be non-zero");
    }

    if let Some(clock) = &args.clock {
        if clock.trim().is_empty() {
            bail!("Clock override cannot be empty");
        }
    }

    Ok(())
}

/// Render a per-lane text summary of a schedule
///
/// **Public** - used by the plan command and tests
pub fn render_summary(schedule: &Schedule) -> String {
    let mut out = String::new();

    out.push_str(&format!("Trace: {}\n", schedule.trace_file));
    out.push_str(&format!(
        "Kernels: {} scheduled, {} skipped, {} total\n",
        schedule.kernels_scheduled,
        schedule.skipped.len(),
        schedule.kernels_total
    ));

    for entry in &schedule.skipped {
        out.push_str(&format!("  skipped #{}: {}\n", entry.index, entry.error));
    }

    for lane in &schedule.lanes {
        let indices: usize = lane.calls.iter().map(|c| c.trace.len()).sum();
        out.push_str(&format!(
            "Lane {:>3}: {} kernels, {} indices\n",
            lane.lane,
            lane.calls.len(),
            indices
        ));
    }

    out
}
