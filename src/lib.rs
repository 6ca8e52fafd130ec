//! Lockstamp: reentrant, upgradeable file locks for cooperating processes.
//!
//! A [`FileLock`] serializes access to one on-disk file across processes that
//! share nothing but the filesystem. A [`TimestampGuard`] layers a commit
//! stamp protocol on top, letting a cache holder cheaply ask whether anyone
//! has committed since it last loaded.
//!
//! ```no_run
//! use lockstamp::{FileLock, TimestampGuard};
//!
//! let mut table = FileLock::new("users.tbl");
//! let mut stamp = TimestampGuard::new("users.tbl.stamp");
//!
//! {
//!     let mut guard = table.write()?;
//!     guard.replace(b"alice\nbob\n")?;
//! }
//! stamp.write()?;
//!
//! if stamp.was_modified()? {
//!     let content = table.read()?.read_all()?;
//!     stamp.accept();
//!     # let _ = content;
//! }
//! # Ok::<(), lockstamp::LockstampError>(())
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod locks;
pub mod timestamp;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use error::{LockstampError, Result};
pub use locks::{FileLock, LockState, ReadGuard, WriteGuard};
pub use timestamp::{STAMP_LEN, Stamp, TimestampGuard};
