//! Configuration and constants for trace ingestion and lane setup.

use serde::{Deserialize, Serialize};

/// Current schedule output schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Addressing defaults (4-byte indices, 8-byte values, values placed at 16 GiB)
pub const DEFAULT_BASE_INDEX_ADDR: u64 = 0;
pub const DEFAULT_BASE_VALUE_ADDR: u64 = 0x4_0000_0000;
pub const DEFAULT_INDEX_SIZE: u32 = 4;
pub const DEFAULT_VALUE_SIZE: u32 = 8;

// Kernel record defaults
pub const DEFAULT_KERNEL_DELTA: i64 = 0;
pub const DEFAULT_KERNEL_COUNT: u64 = 1;

/// Number of trace entries shown when a descriptor is displayed
pub const TRACE_PREVIEW_LEN: usize = 8;

/// Hardware-facing parameters of one lane's address generator.
///
/// These are opaque to ingestion: they are handed to the generator model
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub int_regfile_size: u32,
    pub fp_regfile_size: u32,
    /// Cycles to generate one request
    pub request_gen_latency: u32,
    /// Requests generated per cycle
    pub request_gen_bandwidth: u32,
    pub request_buffer_size: u32,
    /// Requests sent to memory per cycle
    pub send_bandwidth: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            int_regfile_size: 384,
            fp_regfile_size: 224,
            request_gen_latency: 3,
            request_gen_bandwidth: 4,
            request_buffer_size: 32,
            send_bandwidth: 2,
        }
    }
}

/// Addressing parameters shared by every lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressConfig {
    pub base_index_addr: u64,
    pub base_value_addr: u64,
    /// Size of one index element in bytes
    pub index_size: u32,
    /// Size of one value element in bytes
    pub value_size: u32,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            base_index_addr: DEFAULT_BASE_INDEX_ADDR,
            base_value_addr: DEFAULT_BASE_VALUE_ADDR,
            index_size: DEFAULT_INDEX_SIZE,
            value_size: DEFAULT_VALUE_SIZE,
        }
    }
}

/// Construction parameters for a [`crate::generator::TraceOrchestrator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Number of lanes; fixed for the orchestrator's lifetime
    pub num_lanes: usize,

    pub addressing: AddressConfig,

    pub generator: GeneratorConfig,

    /// Clock frequency override for the generators (e.g. "4GHz")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<String>,
}

impl OrchestratorConfig {
    /// Config with default addressing and hardware parameters
    pub fn new(num_lanes: usize) -> Self {
        Self {
            num_lanes,
            addressing: AddressConfig::default(),
            generator: GeneratorConfig::default(),
            clock: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Into<String>) -> Self {
        self.clock = Some(clock.into());
        self
    }

    pub fn with_addressing(mut self, addressing: AddressConfig) -> Self {
        self.addressing = addressing;
        self
    }
}
