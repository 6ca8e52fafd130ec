//! Implementation of the `lockstamp cat` command.

use crate::cli::CatArgs;
use lockstamp::exit_codes;
use lockstamp::{FileLock, LockstampError, Result};
use std::io::{self, Write};

/// Execute the `lockstamp cat` command.
///
/// The content is read in full under the shared lock and written to stdout
/// after the lock is released.
pub fn cmd_cat(args: CatArgs) -> Result<i32> {
    let mut lock = FileLock::new(&args.file);
    let content = lock.read()?.read_all()?;

    emit(io::stdout().lock(), &content)?;
    Ok(exit_codes::SUCCESS)
}

fn emit(mut out: impl Write, content: &[u8]) -> Result<()> {
    out.write_all(content)
        .and_then(|_| out.flush())
        .map_err(|e| LockstampError::io("<stdout>", e))
}
