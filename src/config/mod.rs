//! Job file loading and parsing.
//!
//! This module loads a job document from disk and parses it into validated,
//! type-safe structures.
//!
//! # Example Job File
//!
//! ```json
//! {
//!   "title": "Drawer 3",
//!   "layout": "AVERY_5260",
//!   "options": { "draw_outlines": false },
//!   "labels": [
//!     { "kind": "resistor", "value_ohms": 4700 },
//!     { "kind": "diode", "part_number": "1N4148", "package": "DO-35",
//!       "spec": { "vr": "100V", "if": "200mA" } }
//!   ]
//! }
//! ```

mod settings;

pub use settings::{JobConfig, LayoutSelector, LoggingConfig, RenderOptions};

use std::path::Path;

use crate::error::ConfigError;

/// Loads and parses a job file.
///
/// # Errors
///
/// Returns an error if:
/// - The job file cannot be found
/// - The file cannot be read
/// - The JSON is malformed
/// - The layout is unknown or does not fit its page
pub fn load_job(path: &Path) -> Result<JobConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_job(&contents, path)
}

/// Parses job JSON read from `origin`.
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] for malformed JSON and the
/// validation errors of [`JobConfig::validate`].
pub fn parse_job(contents: &str, origin: &Path) -> Result<JobConfig, ConfigError> {
    let job: JobConfig = serde_json::from_str(contents).map_err(|e| ConfigError::ParseError {
        path: origin.to_path_buf(),
        source: e,
    })?;

    job.validate()?;

    Ok(job)
}
