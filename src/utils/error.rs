//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors in a single kernel record. Ingestion skips the record and continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("Keyword 'kernel' not found")]
    MissingOperationType,

    #[error("Unknown kernel type '{0}' (expected gather or scatter)")]
    UnknownOperationType(String),

    #[error("Empty 'pattern' found")]
    EmptyPattern,

    #[error("Invalid 'count' {0}: must be at least 1")]
    InvalidCount(i64),

    #[error("Malformed kernel record: {0}")]
    MalformedRecord(String),
}

/// Errors while splitting a trace across lanes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Lane count must be positive")]
    ZeroLanes,

    #[error("Cannot split {len} trace elements across {lanes} lanes")]
    TooFine { len: usize, lanes: usize },

    #[error("Partition lost elements: {partitioned} of {len} assigned")]
    Mismatch { len: usize, partitioned: usize },
}

/// Fatal errors while building or running a trace orchestrator
#[derive(Error, Debug)]
pub enum OrchestratorError {
    #[error("Lane count must be positive")]
    NoLanes,

    #[error("Failed to read trace file {path}: {source}")]
    TraceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trace file is not valid JSON: {0}")]
    TraceJson(#[from] serde_json::Error),

    #[error("Invalid trace format: {0}")]
    InvalidFormat(String),

    #[error("Failed to partition kernel {index}: {source}")]
    Partition {
        index: usize,
        #[source]
        source: PartitionError,
    },

    #[error("Traffic has already been started")]
    AlreadyRunning,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
