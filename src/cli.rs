// src/cli.rs
//! CLI argument parser for log-scout.

#![deny(missing_docs)]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Detect service log files and generate acquisition config.
#[derive(Parser, Debug)]
#[command(
    name = "log-scout",
    version,
    about = "Detect service log files and generate acquisition config",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Set verbosity level: -v=1, -v=2
    #[arg(
        short = 'v',
        long = "verbose",
        value_name = "LEVEL",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=2),
        global = true
    )]
    pub verbose: u8,

    /// Silence all output (overrides -v).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands supported by the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project configuration.
    Init {
        /// Directory where configuration should live (defaults to pwd).
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite existing configuration if present.
        #[arg(long)]
        force: bool,
    },

    /// Probe the host for catalog log files and report findings (no output file).
    Detect {
        /// Service catalog to load. Overrides `.log-scout.toml`.
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Probe the host and append acquisition records to the output file.
    Generate {
        /// Service catalog to load. Overrides `.log-scout.toml`.
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Acquisition file to append to. Overrides `.log-scout.toml`.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
