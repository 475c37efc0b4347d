//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Annotation interaction time estimator.
///
/// Reads client logs of mouse press and release events and reports how long
/// the user actively worked on each file.
#[derive(Debug, Parser)]
#[command(name = "itime", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report interaction time for every file in a client log.
    Report {
        /// Path to the client log.
        log: PathBuf,

        /// Output as JSON instead of a text report.
        #[arg(long)]
        json: bool,

        /// Leave files without measurable interaction out of the report.
        #[arg(long)]
        hide_zero: bool,
    },

    /// Print the parsed events of a client log as JSONL.
    Events {
        /// Path to the client log.
        log: PathBuf,
    },
}
