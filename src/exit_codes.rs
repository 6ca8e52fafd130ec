//! Exit code constants for the lockstamp CLI.
//!
//! - 0: Success (for `check`: not modified)
//! - 1: User error (bad args, invalid state)
//! - 2: I/O failure on a locked file
//! - 3: Configuration error
//! - 4: Lock acquisition failure (open or OS lock call)
//! - 5: `check` found the sentinel modified

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an operation invalid in the current lock state.
pub const USER_ERROR: i32 = 1;

/// I/O failure while reading, writing or removing a file.
pub const IO_FAILURE: i32 = 2;

/// Configuration file could not be loaded or failed validation.
pub const CONFIG_ERROR: i32 = 3;

/// Lock acquisition failure: the handle could not be opened or locked.
pub const LOCK_FAILURE: i32 = 4;

/// The sentinel carries a stamp newer than the one the caller accepted.
pub const MODIFIED: i32 = 5;
