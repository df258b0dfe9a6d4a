//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - generate: build a fresh schedule from chapters and an exam date
//! - list: show the saved schedule
//! - done: mark a chapter's next pending block completed
//! - clear/remove/export: schedule maintenance and calendar export

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cramr - a study timetable planner
#[derive(Parser, Debug)]
#[command(name = "cramr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh schedule, replacing the saved one
    Generate {
        /// Chapter titles (or use --chapters-file)
        chapters: Vec<String>,

        /// File with one chapter title per line
        #[arg(long)]
        chapters_file: Option<PathBuf>,

        /// Exam date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Exam time (HH:MM, 24h); config default when omitted
        #[arg(short, long)]
        time: Option<String>,

        /// Study block length in minutes
        #[arg(long)]
        block_minutes: Option<u32>,

        /// Base blocks per day before ramping
        #[arg(long)]
        daily_limit: Option<u32>,

        /// Break between blocks in minutes
        #[arg(long)]
        break_minutes: Option<u32>,

        /// Session density ramp toward the exam (0.0-1.0)
        #[arg(long)]
        ramp_factor: Option<f64>,

        /// Hour each day's first slot starts (0-23)
        #[arg(long)]
        day_start_hour: Option<u32>,

        /// Seed for reproducible difficulty/length estimation
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the saved schedule
    List {
        /// Filter by mode (study, revision)
        #[arg(short, long)]
        mode: Option<String>,

        /// Show only blocks not yet completed
        #[arg(short, long)]
        pending: bool,
    },

    /// Mark a chapter's next pending block completed
    Done {
        /// Chapter title to mark
        chapter: String,
    },

    /// Reset all completed flags
    Clear,

    /// Remove one block by chapter and start time
    Remove {
        /// Chapter title of the block
        chapter: String,

        /// Block start time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        at: String,
    },

    /// Export the saved schedule as an .ics calendar
    Export {
        /// Output path; config default when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
