//! Implementation of the `lockstamp check` command.

use crate::cli::CheckArgs;
use lockstamp::exit_codes;
use lockstamp::{Result, Stamp, TimestampGuard};

/// Execute the `lockstamp check` command.
///
/// Prints the sentinel's current stamp so a caller can pass it back as
/// `--since` next time.
pub fn cmd_check(args: CheckArgs) -> Result<i32> {
    let mut guard = TimestampGuard::new(&args.sentinel);
    if let Some(since) = args.since {
        guard = guard.with_accepted(Stamp::from(since));
    }

    let modified = guard.was_modified()?;
    if let Some(observed) = guard.observed() {
        println!("{}", observed);
    }

    if modified {
        Ok(exit_codes::MODIFIED)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}
