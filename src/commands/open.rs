//! open command - Launch a goal's resource in the default browser

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::path::Path;

use crate::record::{store, RecordError};

/// Execute the open command
///
/// Resolution happens before the browser is touched: an unresolved goal
/// or an empty resource slot never launches anything. The resource
/// string is handed to the platform opener as-is, never to a shell.
pub fn execute(record_path: &Path, goal_id: &str, resource_id: usize) -> Result<()> {
    let record = store::load(record_path)?;

    let Some(goal) = record.find(goal_id) else {
        return Err(RecordError::GoalNotFound(goal_id.to_string()).into());
    };

    let resource = resource_id
        .checked_sub(1)
        .and_then(|i| goal.resources.get(i))
        .ok_or_else(|| RecordError::ResourceNotFound {
            goal: goal.name.clone(),
            id: resource_id,
        })?;

    webbrowser::open(resource).with_context(|| format!("Failed to open: {}", resource))?;

    println!("Opening {}", resource.blue());
    Ok(())
}
