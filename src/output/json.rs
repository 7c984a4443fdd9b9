//! JSON schedule output writer.
//!
//! Writes Schedule structs to JSON files with proper formatting.

use super::schema::Schedule;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a schedule to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let schedule = to_schedule("trace.json", &config, orchestrator);
/// write_schedule(&schedule, "schedule.json")?;
/// ```
pub fn write_schedule(
    schedule: &Schedule,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing schedule to: {}", output_path.display());

    super::validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, schedule).map_err(OutputError::SerializationFailed)?;

    info!(
        "Schedule written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a schedule from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_schedule(input_path: impl AsRef<Path>) -> Result<Schedule, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading schedule from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let schedule: Schedule =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Schedule loaded: version {}, {} lanes",
        schedule.version,
        schedule.lanes.len()
    );

    Ok(schedule)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
