//! Trace ingestion across a fixed set of lanes.
//!
//! The orchestrator has two phases. During setup it builds one
//! [`LaneAggregator`] per lane, loads the trace file, and for every kernel
//! record parses it, partitions its trace and queues one descriptor on each
//! lane. [`TraceOrchestrator::start_traffic`] moves it to the running phase,
//! where every lane hands its queue to its generator. There is no way back.
//!
//! A malformed record is logged and skipped. A record whose trace is
//! shorter than the lane count aborts construction.

use crate::aggregator::LaneAggregator;
use crate::generator::model::{AddressGenerator, LaneSetup};
use crate::kernel::KernelDescriptor;
use crate::parser::{load_trace_records, parse_kernel_value};
use crate::partition::partition_trace;
use crate::utils::config::OrchestratorConfig;
use crate::utils::error::{KernelError, OrchestratorError};
use log::{debug, info, warn};
use std::path::Path;

/// Orchestrator lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Kernels are being queued
    Setup,
    /// Kernels have been handed to the generators
    Running,
}

/// A kernel record rejected during ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedKernel {
    /// Position of the record in the trace file
    pub index: usize,
    pub error: KernelError,
}

/// Owns every lane and drives trace ingestion
#[derive(Debug)]
pub struct TraceOrchestrator<G> {
    lanes: Vec<LaneAggregator<G>>,
    clock: Option<String>,
    /// Raw records, kept for diagnostics
    records: Vec<serde_json::Value>,
    skipped: Vec<SkippedKernel>,
    kernels_scheduled: usize,
    phase: Phase,
}

impl<G: AddressGenerator> TraceOrchestrator<G> {
    /// Build the lanes and ingest a trace file
    ///
    /// **Public** - main entry point for setup
    ///
    /// `make_generator` is called once per lane, in lane order, with that
    /// lane's [`LaneSetup`] (hardware block, addressing and clock override).
    ///
    /// # Errors
    /// * `OrchestratorError::NoLanes` - `config.num_lanes` is 0
    /// * `OrchestratorError::TraceRead` / `TraceJson` / `InvalidFormat` - bad trace file
    /// * `OrchestratorError::Partition` - a kernel cannot be split across the lanes
    pub fn from_trace_file<F>(
        config: &OrchestratorConfig,
        trace_path: impl AsRef<Path>,
        make_generator: F,
    ) -> Result<Self, OrchestratorError>
    where
        F: FnMut(&LaneSetup) -> G,
    {
        if config.num_lanes == 0 {
            return Err(OrchestratorError::NoLanes);
        }
        let records = load_trace_records(trace_path)?;
        Self::from_records(config, records, make_generator)
    }

    /// Build the lanes and ingest already-loaded records
    ///
    /// **Public** - used when the trace is not on disk
    pub fn from_records<F>(
        config: &OrchestratorConfig,
        records: Vec<serde_json::Value>,
        mut make_generator: F,
    ) -> Result<Self, OrchestratorError>
    where
        F: FnMut(&LaneSetup) -> G,
    {
        if config.num_lanes == 0 {
            return Err(OrchestratorError::NoLanes);
        }

        let mut lanes: Vec<LaneAggregator<G>> = (0..config.num_lanes)
            .map(|lane| {
                let setup = LaneSetup {
                    lane,
                    generator: config.generator,
                    addressing: config.addressing,
                    clock: config.clock.clone(),
                };
                let generator = make_generator(&setup);
                LaneAggregator::new(setup, generator)
            })
            .collect();

        if let Some(clock) = &config.clock {
            info!("Using generator clock override: {}", clock);
        }

        let mut skipped = Vec::new();
        let mut kernels_scheduled = 0;

        for (index, record) in records.iter().enumerate() {
            let spec = match parse_kernel_value(record) {
                Ok(spec) => spec,
                Err(error) => {
                    warn!("Error parsing kernel {}: {}", index, error);
                    skipped.push(SkippedKernel { index, error });
                    continue;
                }
            };

            let chunks = partition_trace(&spec.trace, lanes.len())
                .map_err(|source| OrchestratorError::Partition { index, source })?;

            for (lane, chunk) in lanes.iter_mut().zip(chunks) {
                lane.add_kernel(KernelDescriptor::new(
                    index,
                    &spec,
                    chunk.to_vec(),
                    config.addressing,
                ));
            }
            kernels_scheduled += 1;
        }

        info!(
            "Scheduled {} of {} kernels across {} lanes ({} skipped)",
            kernels_scheduled,
            records.len(),
            lanes.len(),
            skipped.len()
        );

        Ok(Self {
            lanes,
            clock: config.clock.clone(),
            records,
            skipped,
            kernels_scheduled,
            phase: Phase::Setup,
        })
    }

    /// Hand every lane's queue to its generator, in lane order
    ///
    /// # Returns
    /// Total number of registration calls issued
    ///
    /// # Errors
    /// * `OrchestratorError::AlreadyRunning` - traffic was already started
    pub fn start_traffic(&mut self) -> Result<usize, OrchestratorError> {
        if self.phase == Phase::Running {
            return Err(OrchestratorError::AlreadyRunning);
        }
        self.phase = Phase::Running;

        let mut issued = 0;
        for lane in &mut self.lanes {
            let calls = lane.start_traffic();
            debug!("Lane {} registered {} kernels", lane.lane(), calls);
            issued += calls;
        }

        info!("Traffic started: {} kernel registrations issued", issued);
        Ok(issued)
    }
}

impl<G> TraceOrchestrator<G> {
    pub fn lanes(&self) -> &[LaneAggregator<G>] {
        &self.lanes
    }

    pub fn num_lanes(&self) -> usize {
        self.lanes.len()
    }

    pub fn clock(&self) -> Option<&str> {
        self.clock.as_deref()
    }

    /// Raw trace records as loaded from the file
    pub fn records(&self) -> &[serde_json::Value] {
        &self.records
    }

    /// Records rejected during ingestion, in file order
    pub fn skipped(&self) -> &[SkippedKernel] {
        &self.skipped
    }

    /// Number of records that were queued on the lanes
    pub fn kernels_scheduled(&self) -> usize {
        self.kernels_scheduled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Consume the orchestrator, returning each lane's generator in lane order
    pub fn into_generators(self) -> Vec<G> {
        self.lanes
            .into_iter()
            .map(LaneAggregator::into_generator)
            .collect()
    }
}
