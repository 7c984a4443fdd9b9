//! Trace orchestration and the address generator boundary.
//!
//! This module handles:
//! - Building the fixed set of lanes
//! - Ingesting the trace file into per-lane kernel queues
//! - Starting traffic on every lane's generator

pub mod model;
pub mod orchestrator;

pub use model::{AddressGenerator, LaneSetup, RecordedCall, RecordingGenerator};
pub use orchestrator::{Phase, SkippedKernel, TraceOrchestrator};
