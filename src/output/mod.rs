//! Output writers for schedule data.
//!
//! This module handles:
//! - Converting a started orchestrator into a schedule
//! - Writing and reading schedule JSON files

pub mod json;
pub mod schema;

// Re-export main functions
pub use json::{read_schedule, write_schedule};
pub use schema::{to_schedule, LaneSchedule, Schedule, SkippedEntry};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
