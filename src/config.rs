//! Record file location
//!
//! Resolution order: an explicit --record flag, the GOALTRACK_RECORD
//! environment variable, then the platform data directory
//! (e.g. ~/.local/share/goaltrack/record.json on Linux).

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

const RECORD_ENV: &str = "GOALTRACK_RECORD";
const RECORD_FILE: &str = "record.json";

/// Resolve the record file path
pub fn record_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if let Some(path) = env::var_os(RECORD_ENV) {
        return Ok(PathBuf::from(path));
    }

    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("goaltrack").join(RECORD_FILE))
}
