//! list command - Show every goal and its resources

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use crate::record::store;

/// Execute the list command and return formatted output
pub fn execute(record_path: &Path) -> Result<String> {
    let record = store::load(record_path)?;

    if record.data.is_empty() {
        return Ok("No goals recorded yet.".to_string());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Goal"),
        Cell::new("Description"),
        Cell::new("Resources"),
    ]);

    let mut resource_count = 0;
    for (i, goal) in record.data.iter().enumerate() {
        let resources = goal
            .resources
            .iter()
            .enumerate()
            .map(|(j, resource)| format!("{}. {}", j + 1, resource))
            .collect::<Vec<_>>()
            .join("\n");
        resource_count += goal.resources.len();

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&goal.name),
            Cell::new(&goal.description),
            Cell::new(resources),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\n{} goal(s), {} resource(s)",
        record.data.len(),
        resource_count
    ));

    Ok(output)
}
