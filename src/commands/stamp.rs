//! Implementation of the `lockstamp stamp` command.

use crate::cli::StampArgs;
use lockstamp::exit_codes;
use lockstamp::{Config, Result, TimestampGuard};

/// Execute the `lockstamp stamp` command.
pub fn cmd_stamp(args: StampArgs, config: &Config) -> Result<i32> {
    let stamp = TimestampGuard::new(&args.sentinel)
        .with_sync(config.sync_on_write)
        .write()?;

    println!("{}", stamp);
    Ok(exit_codes::SUCCESS)
}
