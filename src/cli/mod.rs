//! CLI module for cramr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for schedule generation,
//! inspection, completion marking, and calendar export.

pub mod commands;

pub use commands::Cli;
