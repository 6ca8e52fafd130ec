//! CLI argument parsing for lockstamp.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lockstamp: cross-process file locks with commit stamps.
///
/// Every command goes through the same advisory locks a library caller uses:
/// - Data files are read under a shared lock and written under an exclusive one
/// - Each data file is paired with a sentinel holding the last commit stamp
/// - Readers compare stamps to decide whether a cached copy is stale
#[derive(Parser, Debug)]
#[command(name = "lockstamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for lockstamp.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a file's content under a shared lock.
    Cat(CatArgs),

    /// Replace a file's content with stdin under an exclusive lock.
    ///
    /// After the payload is written and the lock released, the paired
    /// sentinel is stamped so readers see the commit.
    Put(PutArgs),

    /// Write a fresh stamp into a sentinel file.
    Stamp(StampArgs),

    /// Check whether a sentinel was stamped since a known stamp.
    ///
    /// Prints the current stamp. Exits 0 when not modified, 5 when modified.
    Check(CheckArgs),

    /// Show a data file, its sentinel and the sentinel's stamp.
    Inspect(InspectArgs),

    /// Remove a data file and its sentinel.
    Rm(RmArgs),
}

/// Arguments for the `cat` command.
#[derive(Parser, Debug)]
pub struct CatArgs {
    /// Data file to read.
    pub file: PathBuf,
}

/// Arguments for the `put` command.
#[derive(Parser, Debug)]
pub struct PutArgs {
    /// Data file to replace.
    pub file: PathBuf,

    /// Pause between writing the two halves of the payload while the lock is held.
    #[arg(long, default_value_t = 0)]
    pub pause_ms: u64,
}

/// Arguments for the `stamp` command.
#[derive(Parser, Debug)]
pub struct StampArgs {
    /// Sentinel file to stamp.
    pub sentinel: PathBuf,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Sentinel file to check.
    pub sentinel: PathBuf,

    /// Stamp accepted earlier. Without it the sentinel always counts as modified.
    #[arg(long)]
    pub since: Option<String>,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Data file to inspect.
    pub file: PathBuf,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rm` command.
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Data file to remove.
    pub file: PathBuf,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
