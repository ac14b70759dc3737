//! Record persistence
//!
//! The record is one JSON document, read fully into memory and rewritten
//! fully on every mutation. Writes go through a temp file in the record's
//! directory followed by a rename, so an interrupted write leaves the
//! previous record intact.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::goal::Record;

/// Read and parse the record file
pub fn load(path: &Path) -> Result<Record> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse: {}", path.display()))
}

/// Read the record file, treating a missing or unreadable file as an
/// empty record
///
/// Only `add-goal` bootstraps the record this way; every other command
/// treats a read failure as an error.
pub fn load_or_default(path: &Path) -> Record {
    load(path).unwrap_or_default()
}

/// Serialize the record and atomically replace the file
pub fn save(path: &Path, record: &Record) -> Result<()> {
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let content = serde_json::to_string(record).context("Failed to serialize record")?;

    let mut tmp = match parent {
        Some(dir) => NamedTempFile::new_in(dir),
        None => NamedTempFile::new_in("."),
    }
    .context("Failed to create temporary record file")?;

    tmp.write_all(content.as_bytes())
        .context("Failed to write record")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write: {}", path.display()))?;

    Ok(())
}
