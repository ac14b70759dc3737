//! remove-resource command - Detach a resource from a goal

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::record::{store, RecordError};

/// Execute the remove-resource command
///
/// The resource id is 1-based; id 0 and anything past the end of the
/// goal's resource list are reported as not found, with no write.
pub fn execute(record_path: &Path, goal_id: &str, resource_id: usize) -> Result<()> {
    let mut record = store::load(record_path)?;

    let Some(goal) = record.find_mut(goal_id) else {
        return Err(RecordError::GoalNotFound(goal_id.to_string()).into());
    };

    let index = resource_id
        .checked_sub(1)
        .filter(|&i| i < goal.resources.len())
        .ok_or_else(|| RecordError::ResourceNotFound {
            goal: goal.name.clone(),
            id: resource_id,
        })?;

    let removed = goal.resources.remove(index);
    store::save(record_path, &record)?;

    println!("Resource removed: {}", removed.red());
    Ok(())
}
