//! Implementation of the `lockstamp put` command.

use crate::cli::PutArgs;
use lockstamp::exit_codes;
use lockstamp::{Config, FileLock, LockstampError, Result, TimestampGuard};
use std::io::{self, Read, Write};
use std::thread;
use std::time::Duration;

/// Execute the `lockstamp put` command.
///
/// Reads the payload from stdin before locking, replaces the data file under
/// an exclusive lock, then stamps the paired sentinel.
pub fn cmd_put(args: PutArgs, config: &Config) -> Result<i32> {
    let mut payload = Vec::new();
    io::stdin()
        .read_to_end(&mut payload)
        .map_err(|e| LockstampError::UserError(format!("failed to read stdin: {}", e)))?;

    let mut lock = FileLock::new(&args.file);
    {
        let mut guard = lock.write()?;
        let (head, tail) = payload.split_at(payload.len() / 2);

        guard.truncate()?;
        guard
            .write_all(head)
            .map_err(|e| LockstampError::io(&args.file, e))?;

        if args.pause_ms > 0 {
            tracing::debug!(pause_ms = args.pause_ms, "pausing mid-write");
            thread::sleep(Duration::from_millis(args.pause_ms));
        }

        guard
            .write_all(tail)
            .map_err(|e| LockstampError::io(&args.file, e))?;
        if config.sync_on_write {
            guard.sync()?;
        }
    }

    let sentinel = config.sentinel_for(&args.file);
    let stamp = TimestampGuard::new(&sentinel)
        .with_sync(config.sync_on_write)
        .write()?;

    tracing::info!(
        file = %args.file.display(),
        bytes = payload.len(),
        stamp = %stamp,
        "committed payload"
    );
    println!("{}", stamp);

    Ok(exit_codes::SUCCESS)
}
