//! Spatter Gen
//!
//! Ingests gather/scatter kernel traces and splits each kernel across a
//! fixed number of lanes, producing per-lane kernel descriptors for an
//! address-generation model.
//!
//! ## Getting Started
//!
//! ```bash
//! spatter-gen plan --trace kernels.json --lanes 4 --summary
//! spatter-gen --help
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! let config = OrchestratorConfig::new(4).with_clock("4GHz");
//! let mut orchestrator =
//!     TraceOrchestrator::from_trace_file(&config, "kernels.json", RecordingGenerator::new)?;
//! orchestrator.start_traffic()?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod generator;
pub mod kernel;
pub mod output;
pub mod parser;
pub mod partition;
pub mod utils;

pub use aggregator::LaneAggregator;
pub use generator::{AddressGenerator, RecordingGenerator, TraceOrchestrator};
pub use kernel::KernelDescriptor;
pub use parser::{KernelSpec, KernelType};
pub use utils::config::OrchestratorConfig;
