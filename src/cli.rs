use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fitfocus",
    version,
    about = "Log meals and workouts in plain words, track the day against your goals"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config, store and goals
    Init {
        /// Skip interactive setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// Log a meal or workout described in free text
    Log {
        /// e.g. "Ate a salad and 300kcal of salmon" or "yoga for 40 mins"
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Show today's timeline, newest first
    Show,

    /// Daily totals measured against goals
    Status,

    /// Correct a numeric field of a record
    Edit {
        /// Record id or unique id prefix
        id: String,
        /// calories, protein, carbs, fats, duration or nutrient_score
        field: String,
        /// New value; non-numeric input is ignored
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Delete a record
    Delete {
        /// Record id or unique id prefix
        id: String,
    },

    /// Show or edit daily goals and profile
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Tab-separated daily summary
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Copy to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Show current goals
    Show,
    /// Set a goal or profile value
    Set {
        /// calories, protein, weight, height, age or gender
        key: String,
        value: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (advice.source, advice.messages, log.level)
        key: String,
        /// Config value
        value: String,
    },
}
