//! Trace file loading.
//!
//! A trace file is a JSON array of kernel records. The file as a whole must
//! be well formed; individual records are validated later, one at a time.

use crate::utils::error::OrchestratorError;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Read a trace file into its raw records
///
/// **Public** - main entry point for trace loading
///
/// # Errors
/// * `OrchestratorError::TraceRead` - file missing or unreadable
/// * `OrchestratorError::TraceJson` - not valid JSON
/// * `OrchestratorError::InvalidFormat` - top level is not an array
pub fn load_trace_records(
    path: impl AsRef<Path>,
) -> Result<Vec<serde_json::Value>, OrchestratorError> {
    let path = path.as_ref();

    info!("Loading trace file: {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| OrchestratorError::TraceRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_trace_records(&contents)
}

/// Parse trace file contents into raw records
///
/// **Public** - used by tests and in-memory callers
pub fn parse_trace_records(contents: &str) -> Result<Vec<serde_json::Value>, OrchestratorError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;

    match value {
        serde_json::Value::Array(records) => {
            debug!("Trace contains {} kernel records", records.len());
            Ok(records)
        }
        _ => Err(OrchestratorError::InvalidFormat(
            "Trace must be a JSON array of kernel records".to_string(),
        )),
    }
}
