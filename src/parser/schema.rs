//! Kernel record schema definitions.
//!
//! A trace file is a JSON array of kernel records. Records arrive as
//! [`RawKernel`] (every field optional, exactly as written in the file)
//! and leave the parser as a validated [`KernelSpec`].

use crate::utils::error::KernelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gather/scatter operation performed by a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelType {
    /// Sparse reads
    Gather,
    /// Sparse writes
    Scatter,
}

impl KernelType {
    /// Stable numeric encoding understood by the address generator
    pub fn code(self) -> u8 {
        match self {
            Self::Gather => 0,
            Self::Scatter => 1,
        }
    }

    /// Inverse of [`KernelType::code`]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Gather),
            1 => Some(Self::Scatter),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gather => "gather",
            Self::Scatter => "scatter",
        }
    }
}

impl std::str::FromStr for KernelType {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gather" => Ok(Self::Gather),
            "scatter" => Ok(Self::Scatter),
            _ => Err(KernelError::UnknownOperationType(s.to_string())),
        }
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kernel record as it appears in the trace file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKernel {
    /// Stride applied per repetition
    #[serde(default)]
    pub delta: Option<i64>,

    /// Number of repetitions of the pattern
    #[serde(default)]
    pub count: Option<i64>,

    /// Operation type ("gather" / "scatter", any case)
    #[serde(default)]
    pub kernel: Option<String>,

    /// Index trace
    #[serde(default)]
    pub pattern: Option<Vec<u64>>,
}

/// Validated kernel definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelSpec {
    pub delta: i64,
    /// Always at least 1
    pub count: u64,
    pub kernel_type: KernelType,
    /// Never empty
    pub trace: Vec<u64>,
}
