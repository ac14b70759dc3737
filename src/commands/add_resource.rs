//! add-resource command - Attach a resource string to a goal

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use crate::record::{store, RecordError};

/// Execute the add-resource command
pub fn execute(record_path: &Path, goal_id: &str, resource: &str) -> Result<()> {
    let mut record = store::load(record_path)?;

    let Some(goal) = record.find_mut(goal_id) else {
        return Err(RecordError::GoalNotFound(goal_id.to_string()).into());
    };

    goal.resources.push(resource.to_string());
    let name = goal.name.clone();
    store::save(record_path, &record)?;

    println!("Resource added to {}: {}", name.green(), resource);
    Ok(())
}
