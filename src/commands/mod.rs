//! Command implementations for lockstamp.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler returns the process exit code on success.

mod cat;
mod check;
mod inspect;
mod put;
mod rm;
mod stamp;

use crate::cli::Command;
use lockstamp::{Config, Result};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<i32> {
    match command {
        Command::Cat(args) => cat::cmd_cat(args),
        Command::Put(args) => put::cmd_put(args, config),
        Command::Stamp(args) => stamp::cmd_stamp(args, config),
        Command::Check(args) => check::cmd_check(args),
        Command::Inspect(args) => inspect::cmd_inspect(args, config),
        Command::Rm(args) => rm::cmd_rm(args, config),
    }
}
