//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Availability and dashboard engine for a personal assistant.
///
/// Reads calendar, mail and task snapshots exported by the assistant
/// service and answers "when am I free?" and "what does today look like?".
#[derive(Debug, Parser)]
#[command(name = "ea", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as of this instant instead of the wall clock
    /// (ISO 8601, "2 hours ago", or "in 3 days").
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List bookable free slots.
    Slots {
        /// Snapshot file, or `-` for stdin.
        snapshot: PathBuf,

        /// Slot length in minutes.
        #[arg(long, default_value_t = 60)]
        duration: i64,

        /// Number of days to search, starting today.
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Classify a calendar entry title as a task or a meeting.
    Classify {
        /// Entry title.
        title: String,

        /// Number of attendees on the entry.
        #[arg(long, default_value_t = 0)]
        attendees: u32,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show dashboard stats, meetings and calendar tasks.
    Dashboard {
        /// Snapshot file, or `-` for stdin.
        snapshot: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Suggest prompts for the current time of day.
    Suggest {
        /// Snapshot file, or `-` for stdin.
        snapshot: PathBuf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
