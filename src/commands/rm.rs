//! Implementation of the `lockstamp rm` command.

use crate::cli::RmArgs;
use lockstamp::exit_codes;
use lockstamp::{Config, FileLock, LockstampError, Result};

/// Execute the `lockstamp rm` command.
///
/// The sentinel is removed before the data file.
pub fn cmd_rm(args: RmArgs, config: &Config) -> Result<i32> {
    let data = FileLock::new(&args.file);
    if !data.exists() {
        return Err(LockstampError::UserError(format!(
            "file '{}' does not exist",
            args.file.display()
        )));
    }

    let sentinel = FileLock::new(config.sentinel_for(&args.file));
    if sentinel.exists() {
        sentinel.remove()?;
        println!("Removed {}", sentinel.path().display());
    }

    data.remove()?;
    println!("Removed {}", data.path().display());

    Ok(exit_codes::SUCCESS)
}
