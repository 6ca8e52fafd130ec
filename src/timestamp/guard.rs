//! Stamp protocol on top of a [`FileLock`].

use super::stamp::Stamp;
use crate::error::{LockstampError, Result};
use crate::locks::FileLock;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

/// Detects commits made by other processes through a dedicated sentinel file.
///
/// A writer calls [`write`](Self::write) after committing a change; the new
/// stamp replaces the whole sentinel. A cache holder calls
/// [`was_modified`](Self::was_modified) before trusting its in-memory state and
/// [`accept`](Self::accept) once it has reloaded.
///
/// The accepted/observed pair starts unset, becomes valid through `accept` or a
/// successful `write`, and is cleared by `reset`. Observing never changes the
/// accepted stamp.
#[derive(Debug)]
pub struct TimestampGuard {
    lock: FileLock,
    accepted: Option<Stamp>,
    observed: Option<Stamp>,
    sync_on_write: bool,
}

impl TimestampGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            lock: FileLock::new(path),
            accepted: None,
            observed: None,
            sync_on_write: true,
        }
    }

    /// Start from a stamp accepted earlier, e.g. by a previous process.
    pub fn with_accepted(mut self, stamp: Stamp) -> Self {
        self.accepted = Some(stamp);
        self
    }

    /// Whether `write` fsyncs the sentinel before releasing the lock.
    pub fn with_sync(mut self, sync_on_write: bool) -> Self {
        self.sync_on_write = sync_on_write;
        self
    }

    pub fn path(&self) -> &Path {
        self.lock.path()
    }

    pub fn lock(&self) -> &FileLock {
        &self.lock
    }

    pub fn lock_mut(&mut self) -> &mut FileLock {
        &mut self.lock
    }

    pub fn accepted(&self) -> Option<&Stamp> {
        self.accepted.as_ref()
    }

    pub fn observed(&self) -> Option<&Stamp> {
        self.observed.as_ref()
    }

    /// Trust the most recently observed stamp.
    pub fn accept(&mut self) {
        self.accepted = self.observed.clone();
    }

    /// Forget both stamps so the next check reports a modification.
    pub fn reset(&mut self) {
        self.accepted = None;
        self.observed = None;
    }

    /// Read the sentinel under a shared lock and record it as observed.
    pub fn current_stamp(&mut self) -> Result<Stamp> {
        let stamp = {
            let mut guard = self.lock.read()?;
            guard
                .seek(SeekFrom::Start(0))
                .and_then(|_| Stamp::read_from(&mut guard))
                .map_err(|e| LockstampError::io(guard.path(), e))?
        };

        self.observed = Some(stamp.clone());
        Ok(stamp)
    }

    /// True when nothing is accepted yet or the sentinel carries a newer stamp.
    pub fn was_modified(&mut self) -> Result<bool> {
        let observed = self.current_stamp()?;
        Ok(match &self.accepted {
            None => true,
            Some(accepted) => *accepted < observed,
        })
    }

    /// True when nothing is accepted yet or the sentinel is not newer.
    ///
    /// This re-reads the sentinel rather than negating a previous
    /// `was_modified`, so a commit landing between the two calls can make both
    /// return `true`.
    pub fn was_not_modified(&mut self) -> Result<bool> {
        let observed = self.current_stamp()?;
        Ok(match &self.accepted {
            None => true,
            Some(accepted) => *accepted >= observed,
        })
    }

    /// Replace the sentinel content with a fresh stamp under an exclusive lock.
    ///
    /// The new stamp becomes both observed and accepted.
    pub fn write(&mut self) -> Result<Stamp> {
        let stamp = {
            let mut guard = self.lock.write()?;
            // Taken under the lock so stamps follow the order writers commit in
            let stamp = Stamp::now();
            guard.replace(stamp.as_bytes())?;
            if self.sync_on_write {
                guard.sync()?;
            }
            stamp
        };

        tracing::debug!(path = %self.lock.path().display(), stamp = %stamp, "wrote stamp");
        self.observed = Some(stamp.clone());
        self.accepted = Some(stamp.clone());
        Ok(stamp)
    }
}
