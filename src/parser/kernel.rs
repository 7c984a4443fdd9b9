//! Kernel record validation.
//!
//! Turns one raw record into a [`KernelSpec`] or a [`KernelError`].
//! Parsing never touches shared state, so a failed record leaves nothing
//! behind.

use super::schema::{KernelSpec, KernelType, RawKernel};
use crate::utils::config::{DEFAULT_KERNEL_COUNT, DEFAULT_KERNEL_DELTA};
use crate::utils::error::KernelError;
use log::debug;

/// Validate a deserialized kernel record
///
/// **Public** - main entry point for kernel parsing
///
/// # Errors
/// * `KernelError::MissingOperationType` - no `kernel` field
/// * `KernelError::UnknownOperationType` - `kernel` is not gather/scatter
/// * `KernelError::EmptyPattern` - `pattern` missing or empty
/// * `KernelError::InvalidCount` - `count` below 1
pub fn parse_kernel(raw: &RawKernel) -> Result<KernelSpec, KernelError> {
    let delta = raw.delta.unwrap_or(DEFAULT_KERNEL_DELTA);

    let kernel_type: KernelType = raw
        .kernel
        .as_deref()
        .ok_or(KernelError::MissingOperationType)?
        .parse()?;

    let trace = match &raw.pattern {
        Some(pattern) if !pattern.is_empty() => pattern.clone(),
        _ => return Err(KernelError::EmptyPattern),
    };

    let count = match raw.count {
        None => DEFAULT_KERNEL_COUNT,
        Some(c) if c >= 1 => c as u64,
        Some(c) => return Err(KernelError::InvalidCount(c)),
    };

    debug!(
        "Parsed {} kernel: delta={}, count={}, {} indices",
        kernel_type,
        delta,
        count,
        trace.len()
    );

    Ok(KernelSpec {
        delta,
        count,
        kernel_type,
        trace,
    })
}

/// Validate a kernel record straight from JSON
///
/// **Public** - used by the orchestrator for each element of the trace file
///
/// # Errors
/// * `KernelError::MalformedRecord` - not an object, or a field has the wrong type
/// * Any error from [`parse_kernel`]
pub fn parse_kernel_value(value: &serde_json::Value) -> Result<KernelSpec, KernelError> {
    if !value.is_object() {
        return Err(KernelError::MalformedRecord(format!(
            "expected an object, found {}",
            json_kind(value)
        )));
    }

    let raw: RawKernel = serde_json::from_value(value.clone())
        .map_err(|e| KernelError::MalformedRecord(e.to_string()))?;

    parse_kernel(&raw)
}

/// Short name of a JSON value's type for diagnostics
///
/// **Private** - internal utility
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
