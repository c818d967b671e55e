// src/cli.rs

//! Command-line surface for `automgr`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Log verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Manage local installs of automation runner applications.
#[derive(Debug, Parser)]
#[command(name = "automgr", version, about)]
pub struct CliArgs {
    /// Logical name of the instance to operate on.
    pub name: String,

    /// Explicit install root, bypassing discovery.
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Manager configuration file.
    #[arg(long, default_value = "Automgr.toml")]
    pub config: PathBuf,

    /// Log verbosity (falls back to `AUTOMGR_LOG`, then "info").
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Append log lines to this file in addition to stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: InstanceCommand,
}

#[derive(Debug, Subcommand)]
pub enum InstanceCommand {
    /// Snapshot the instance's config file into the backup directory.
    Export {
        /// Print the parsed document instead of writing a snapshot.
        #[arg(long)]
        no_file: bool,

        /// Explicit snapshot target path.
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Merge a previously exported document back into the config file.
    Import {
        /// Source document to import.
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Use the most recent snapshot from the backup directory.
        #[arg(long)]
        latest_backup: bool,

        /// Deep keys to copy from the source (repeatable, comma-splittable).
        #[arg(short, long)]
        key: Vec<String>,
    },

    /// Run the instance's executable under a lifetime budget.
    Auto {
        /// Lifetime budget: seconds, "2h30m", "next midnight", or "HH:MM".
        #[arg(short, long)]
        lifetime: String,

        /// Collect and echo the process output.
        #[arg(short, long)]
        capture_output: bool,
    },

    /// Apply k/e/y=value assignments to a JSON config file.
    Patch {
        /// File to patch, relative to the instance root (defaults to the
        /// canonical config file).
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Fail when an addressed key does not already exist.
        #[arg(short, long)]
        must_have_key: bool,

        /// Assignments in the form k/e/y=value.
        parts: Vec<String>,
    },

    /// Open the instance root in the system file manager.
    Op,

    /// List snapshots newest-first; optionally rotate old ones away.
    Backups {
        /// Keep only the N most recent snapshots, deleting the rest.
        #[arg(long)]
        keep: Option<usize>,
    },
}
