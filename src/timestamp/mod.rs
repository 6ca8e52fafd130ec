//! Commit stamps for cache invalidation across processes.
//!
//! A [`TimestampGuard`] owns a [`FileLock`](crate::locks::FileLock) over a
//! small sentinel file. Writers replace the sentinel with a fresh [`Stamp`]
//! after committing; readers compare the sentinel against the stamp they last
//! accepted to decide whether their cached view is stale.
//!
//! # Sentinel Format
//!
//! Bytes `[0, 20)` hold the ASCII stamp. Writing truncates the whole file, so
//! the sentinel must not hold payload data.

mod guard;
mod stamp;


pub use guard::TimestampGuard;
pub use stamp::{STAMP_LEN, Stamp};
