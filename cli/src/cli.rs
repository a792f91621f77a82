use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "event-calendar", about = "Build and inspect day-organized event calendars")]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a scenario file and print the resulting calendar
    Show {
        /// Scenario JSON file
        scenario: PathBuf,
        /// Print the calendar header (name, days, total events)
        #[arg(long)]
        summary: bool,
        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Apply a scenario file and verify the calendar's invariants
    Check {
        /// Scenario JSON file
        scenario: PathBuf,
    },
}
