//! add-goal command - Create a new goal

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::record::{store, Goal};

/// Execute the add-goal command
///
/// The only command that bootstraps the record: a missing or unreadable
/// file is treated as "no goals yet" rather than an error.
pub fn execute(record_path: &Path, name: &str, description: &str) -> Result<()> {
    let mut record = store::load_or_default(record_path);
    record.data.push(Goal::new(name, description));
    store::save(record_path, &record)?;

    println!("Goal added: {}", name.green());
    Ok(())
}
