use clap::{Parser, Subcommand};

/// Calorie Tracker: keep a running list of meals and their calories.
#[derive(Parser, Debug)]
#[command(name = "calorie_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the storage JSON file.
    #[arg(short, long, default_value = "calorie_storage.json")]
    pub file: String,

    /// Name shown at the top of the page.
    #[arg(short, long, default_value = "Calorie Tracker")]
    pub name: String,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive session: add, edit, delete and clear items.
    #[default]
    Run,

    /// Show the current items and total.
    List,

    /// Add a single item.
    Add {
        /// Meal name.
        name: String,

        /// Calorie count.
        calories: String,
    },

    /// Remove every item.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}
