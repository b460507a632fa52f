//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// netcheck: bring-up diagnostic harness
///
/// Verifies the wired link, prints the adapter inventory, proves
/// connectivity with one HTTP round-trip, and probes removable storage.
#[derive(Debug, Parser)]
#[command(name = "netcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Echo endpoint URL for the connectivity round-trip
    #[arg(long)]
    pub url: Option<String>,

    /// Total request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Skip the HTTP round-trip (adapter report only)
    #[arg(long = "skip-fetch")]
    pub skip_fetch: bool,

    /// Marker file name written to the first removable volume
    #[arg(long = "marker-file", value_name = "NAME")]
    pub marker_file: Option<String>,

    /// Storage poll interval in seconds
    #[arg(long = "poll-interval")]
    pub poll_interval: Option<u64>,

    /// Keep running after the diagnostics, reporting storage events
    #[arg(long)]
    pub watch: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for netcheck
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "netcheck.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
