use crate::utils::config::{
    AddressConfig, GeneratorConfig, OrchestratorConfig, DEFAULT_BASE_INDEX_ADDR,
    DEFAULT_BASE_VALUE_ADDR, DEFAULT_INDEX_SIZE, DEFAULT_VALUE_SIZE,
};
use std::path::PathBuf;

/// Arguments for the plan command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct PlanArgs {
    /// Trace file with kernel records
    pub trace_path: PathBuf,

    /// Number of lanes to split each kernel across
    pub num_lanes: usize,

    /// Base address of the index array
    pub base_index_addr: u64,

    /// Base address of the value array
    pub base_value_addr: u64,

    /// Index element size in bytes
    pub index_size: u32,

    /// Value element size in bytes
    pub value_size: u32,

    /// Optional generator clock override (e.g. "4GHz")
    pub clock: Option<String>,

    /// Output path for the JSON schedule
    pub output_json: PathBuf,

    /// Print per-lane summary to stdout
    pub print_summary: bool,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            trace_path: PathBuf::new(),
            num_lanes: 1,
            base_index_addr: DEFAULT_BASE_INDEX_ADDR,
            base_value_addr: DEFAULT_BASE_VALUE_ADDR,
            index_size: DEFAULT_INDEX_SIZE,
            value_size: DEFAULT_VALUE_SIZE,
            clock: None,
            output_json: PathBuf::from("schedule.json"),
            print_summary: false,
        }
    }
}

impl PlanArgs {
    /// Orchestrator configuration described by these arguments
    pub fn to_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            num_lanes: self.num_lanes,
            addressing: AddressConfig {
                base_index_addr: self.base_index_addr,
                base_value_addr: self.base_value_addr,
                index_size: self.index_size,
                value_size: self.value_size,
            },
            generator: GeneratorConfig::default(),
            clock: self.clock.clone(),
        }
    }
}

/// Arguments for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Trace file with kernel records
    pub trace_path: PathBuf,

    /// Lane count to check partitioning against (optional)
    pub num_lanes: Option<usize>,
}
