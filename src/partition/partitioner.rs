//! Split one index trace into contiguous per-lane chunks.
//!
//! Every lane receives `len / lanes` consecutive elements, and the
//! `len % lanes` leftover elements are appended to the last lane.
//! Concatenating the chunks in lane order gives back the original trace.
//!
//! Example: 130 indices over 4 lanes → 32, 32, 32, 34.

use crate::utils::error::PartitionError;
use log::debug;

/// Partition a trace across `lanes` lanes
///
/// **Public** - main entry point for partitioning
///
/// # Returns
/// Exactly `lanes` non-empty slices borrowed from `trace`, in lane order
///
/// # Errors
/// * `PartitionError::ZeroLanes` - `lanes` is 0
/// * `PartitionError::TooFine` - more lanes than trace elements
/// * `PartitionError::Mismatch` - chunk lengths do not add up to the trace
pub fn partition_trace<T>(trace: &[T], lanes: usize) -> Result<Vec<&[T]>, PartitionError> {
    if lanes == 0 {
        return Err(PartitionError::ZeroLanes);
    }
    if lanes > trace.len() {
        return Err(PartitionError::TooFine {
            len: trace.len(),
            lanes,
        });
    }

    let bounds = chunk_bounds(trace.len(), lanes);
    let chunks: Vec<&[T]> = bounds.iter().map(|&(start, end)| &trace[start..end]).collect();

    let partitioned: usize = chunks.iter().map(|c| c.len()).sum();
    if partitioned != trace.len() || chunks.len() != lanes {
        return Err(PartitionError::Mismatch {
            len: trace.len(),
            partitioned,
        });
    }

    debug!(
        "Partitioned {} indices across {} lanes (chunk {}, last lane {})",
        trace.len(),
        lanes,
        bounds[0].1 - bounds[0].0,
        chunks[lanes - 1].len()
    );

    Ok(chunks)
}

/// Half-open `[start, end)` ranges for each lane
///
/// **Private** - callers must have checked `1 <= lanes <= len`
fn chunk_bounds(len: usize, lanes: usize) -> Vec<(usize, usize)> {
    let chunk = len / lanes;

    (0..lanes)
        .map(|lane| {
            let start = lane * chunk;
            let end = if lane + 1 == lanes { len } else { start + chunk };
            (start, end)
        })
        .collect()
}
