//! remove-goal command - Remove a goal and everything attached to it

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::record::{store, RecordError};

/// Execute the remove-goal command
pub fn execute(record_path: &Path, goal_id: &str) -> Result<()> {
    let mut record = store::load(record_path)?;

    let Some(index) = record.find_index(goal_id) else {
        return Err(RecordError::GoalNotFound(goal_id.to_string()).into());
    };

    let removed = record.data.remove(index);
    store::save(record_path, &record)?;

    println!("Goal removed: {}", removed.name.red());
    Ok(())
}
