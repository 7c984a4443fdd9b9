//! Per-lane kernel descriptors.
//!
//! A descriptor is one lane's share of one kernel: the kernel's metadata,
//! the lane's slice of the trace, and the addressing it runs against.

use crate::parser::schema::{KernelSpec, KernelType};
use crate::utils::config::{AddressConfig, TRACE_PREVIEW_LEN};
use std::fmt;

/// Positional arguments of the generator's kernel registration call:
/// `(id, delta, count, type_code, trace)`
pub type KernelCallArgs<'a> = (usize, i64, u64, u8, &'a [u64]);

/// Immutable description of one lane's share of a kernel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelDescriptor {
    id: usize,
    delta: i64,
    count: u64,
    kernel_type: KernelType,
    trace: Vec<u64>,
    addressing: AddressConfig,
}

impl KernelDescriptor {
    /// Create a descriptor from a validated kernel and one lane's trace chunk
    ///
    /// `id` is the kernel's position in the trace file and is shared by
    /// every lane's descriptor for that kernel.
    pub fn new(id: usize, spec: &KernelSpec, trace: Vec<u64>, addressing: AddressConfig) -> Self {
        debug_assert!(!trace.is_empty(), "lane trace chunk must not be empty");
        Self {
            id,
            delta: spec.delta,
            count: spec.count,
            kernel_type: spec.kernel_type,
            trace,
            addressing,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn delta(&self) -> i64 {
        self.delta
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn kernel_type(&self) -> KernelType {
        self.kernel_type
    }

    pub fn trace(&self) -> &[u64] {
        &self.trace
    }

    pub fn base_index_addr(&self) -> u64 {
        self.addressing.base_index_addr
    }

    pub fn base_value_addr(&self) -> u64 {
        self.addressing.base_value_addr
    }

    pub fn index_size(&self) -> u32 {
        self.addressing.index_size
    }

    pub fn value_size(&self) -> u32 {
        self.addressing.value_size
    }

    /// Arguments in the order the generator's registration entry point takes them
    pub fn call_args(&self) -> KernelCallArgs<'_> {
        (
            self.id,
            self.delta,
            self.count,
            self.kernel_type.code(),
            &self.trace,
        )
    }
}

impl fmt::Display for KernelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.trace.len().min(TRACE_PREVIEW_LEN);
        write!(
            f,
            "KernelDescriptor(id={}, delta={}, count={}, type={}, trace[:{}]={:?}",
            self.id,
            self.delta,
            self.count,
            self.kernel_type,
            shown,
            &self.trace[..shown]
        )?;
        if self.trace.len() > shown {
            write!(f, " +{} more", self.trace.len() - shown)?;
        }
        f.write_str(")")
    }
}
