//! Locking subsystem for lockstamp.
//!
//! This module implements a reentrant shared/exclusive lock scoped to one file:
//! - Shared acquisitions open the file read-only and take an OS shared lock
//! - Exclusive acquisitions create the file if needed and take an OS exclusive lock
//! - A shared holder can upgrade in place; releasing the upgrade downgrades back
//!
//! # OS Locks
//!
//! Locking goes through `fs2` (`flock` on Unix, `LockFileEx` on Windows). The
//! locks are advisory: they only exclude other users of the same facility on
//! the same file. All acquisitions block without a timeout.
//!
//! Upgrades and downgrades change the mode on the held handle. Neither is
//! atomic: between dropping one mode and taking the other, another process
//! may lock the file.
//!
//! # Ownership
//!
//! Counters live in the [`FileLock`] instance and every mutating call takes
//! `&mut self`, so an instance is driven by one owner at a time. Share access
//! across threads by wrapping the instance in a mutex.
//!
//! # RAII Guards
//!
//! [`FileLock::read`] and [`FileLock::write`] return guards that release the
//! acquisition when dropped. The counted `acquire_*`/`release_*` calls remain
//! available for callers that manage pairing themselves.

mod file_lock;
mod guard;
mod types;


// Re-export public API
pub use file_lock::FileLock;
pub use guard::{ReadGuard, WriteGuard};
pub use types::LockState;
