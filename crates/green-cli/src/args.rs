use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GardenCommands, PlantCommands, PlantingCommands, ResetArgs, TaskCommands};

/// Garden assistant: record what you plant and get told when to water,
/// check for pests and harvest.
///
/// Run without a command to see what is due today.
#[derive(Parser)]
#[command(version, about, name = "green")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/green/green.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Whose gardens to work with
    #[arg(long, global = true, env = "GREEN_USER", default_value = green_core::DEFAULT_USER)]
    pub user: String,

    /// JSON plant catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Treat this day (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage gardens and their areas
    #[command(alias = "g")]
    Garden {
        #[command(subcommand)]
        command: GardenCommands,
    },
    /// Browse the plant catalog
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Record and manage plantings
    #[command(alias = "p")]
    Planting {
        #[command(subcommand)]
        command: PlantingCommands,
    },
    /// List and complete care tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Delete every garden, planting and task of the current user
    Reset(ResetArgs),
}
