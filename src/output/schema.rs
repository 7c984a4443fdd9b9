//! Output JSON schema for exported schedules.
//!
//! A schedule lists, per lane, every registration call the lane's generator
//! received when traffic started. Schema is versioned to allow future
//! evolution.

use crate::generator::{LaneSetup, RecordedCall, RecordingGenerator, TraceOrchestrator};
use crate::utils::config::{OrchestratorConfig, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};

/// Top-level schedule structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the schedule was built from
    pub trace_file: String,

    /// Lane, addressing and generator parameters
    pub config: OrchestratorConfig,

    /// Number of records in the trace file
    pub kernels_total: usize,

    /// Number of records queued on the lanes
    pub kernels_scheduled: usize,

    /// Records rejected during ingestion
    pub skipped: Vec<SkippedEntry>,

    /// Registration calls, one entry per lane in lane order
    pub lanes: Vec<LaneSchedule>,

    /// Timestamp when the schedule was generated
    pub generated_at: String,
}

/// A rejected record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub index: usize,
    pub error: String,
}

/// Calls received by one lane's generator, in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneSchedule {
    pub lane: usize,
    /// Configuration the lane's generator was built with
    pub setup: LaneSetup,
    pub calls: Vec<RecordedCall>,
}

impl Schedule {
    /// Total number of registration calls across all lanes
    pub fn total_calls(&self) -> usize {
        self.lanes.iter().map(|l| l.calls.len()).sum()
    }
}

/// Convert a started orchestrator into the output schedule format
///
/// **Public** - used by commands to create final output
pub fn to_schedule(
    trace_file: &str,
    config: &OrchestratorConfig,
    orchestrator: TraceOrchestrator<RecordingGenerator>,
) -> Schedule {
    use chrono::Utc;

    let skipped = orchestrator
        .skipped()
        .iter()
        .map(|s| SkippedEntry {
            index: s.index,
            error: s.error.to_string(),
        })
        .collect();
    let kernels_total = orchestrator.records().len();
    let kernels_scheduled = orchestrator.kernels_scheduled();

    let lanes = orchestrator
        .into_generators()
        .into_iter()
        .map(|generator| {
            let (setup, calls) = generator.into_parts();
            LaneSchedule {
                lane: setup.lane,
                setup,
                calls,
            }
        })
        .collect();

    Schedule {
        version: SCHEMA_VERSION.to_string(),
        trace_file: trace_file.to_string(),
        config: config.clone(),
        kernels_total,
        kernels_scheduled,
        skipped,
        lanes,
        generated_at: Utc::now().to_rfc3339(),
    }
}
