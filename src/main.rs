//! goaltrack: track personal goals and the resources attached to them
//!
//! Goals live in a single JSON record on disk. Every command loads the
//! record, applies one change (or prints it), and writes it back whole.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod record;

#[derive(Parser)]
#[command(name = "goaltrack")]
#[command(about = "Track personal goals and their resources", long_about = None)]
#[command(version)]
struct Cli {
    /// Record file to operate on (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "FILE")]
    record: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new goal
    AddGoal {
        /// Goal name
        name: String,

        /// What reaching the goal means
        description: String,
    },

    /// Remove a goal and everything attached to it
    RemoveGoal {
        /// Goal number (1-based) or name
        goal: String,
    },

    /// Attach a resource (URL or path) to a goal
    AddResource {
        /// Goal number (1-based) or name
        goal: String,

        /// Resource to attach
        resource: String,
    },

    /// Detach a resource from a goal
    RemoveResource {
        /// Goal number (1-based) or name
        goal: String,

        /// Resource number (1-based)
        resource_id: usize,
    },

    /// Open a goal's resource in the default browser
    Open {
        /// Goal number (1-based) or name
        goal: String,

        /// Resource number (1-based)
        resource_id: usize,
    },

    /// List all goals and their resources (the default)
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let record_path = config::record_path(cli.record)?;

    match cli.command {
        Some(Commands::AddGoal { name, description }) => {
            commands::add_goal::execute(&record_path, &name, &description)?;
        }

        Some(Commands::RemoveGoal { goal }) => {
            commands::remove_goal::execute(&record_path, &goal)?;
        }

        Some(Commands::AddResource { goal, resource }) => {
            commands::add_resource::execute(&record_path, &goal, &resource)?;
        }

        Some(Commands::RemoveResource { goal, resource_id }) => {
            commands::remove_resource::execute(&record_path, &goal, resource_id)?;
        }

        Some(Commands::Open { goal, resource_id }) => {
            commands::open::execute(&record_path, &goal, resource_id)?;
        }

        Some(Commands::List) | None => {
            let output = commands::list::execute(&record_path)?;
            println!("{}", output);
        }
    }

    Ok(())
}
