//! Trace file parsing and kernel record validation.
//!
//! This module handles:
//! - Loading the JSON trace file
//! - Validating individual kernel records
//! - Defining the kernel schema

pub mod kernel;
pub mod schema;
pub mod trace_file;

// Re-export main types
pub use kernel::{parse_kernel, parse_kernel_value};
pub use schema::{KernelSpec, KernelType, RawKernel};
pub use trace_file::{load_trace_records, parse_trace_records};
