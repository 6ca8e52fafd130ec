//! Counted shared/exclusive locking over a single file handle.

use super::guard::{ReadGuard, WriteGuard};
use super::types::LockState;
use crate::error::{LockstampError, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// A reentrant, upgradeable advisory lock bound to one file path.
///
/// The handle is opened lazily by the first acquisition and closed exactly
/// when the state returns to [`LockState::Unlocked`]. Shared acquisitions open
/// the file read-only; exclusive acquisitions from the unlocked state create
/// the file if needed and open it read/write. An upgrade keeps the handle that
/// was opened for the shared lock and only changes the OS lock mode.
///
/// Reentrancy is tracked per instance. Two instances for the same path in one
/// process block each other through the OS lock exactly like two processes.
/// Mutual exclusion only holds against other users of the same advisory
/// locking facility.
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
    handle: Option<File>,
    state: LockState,
}

impl FileLock {
    /// Create a lock for `path`. No file is touched until the first acquire.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handle: None,
            state: LockState::Unlocked,
        }
    }

    /// Get the path this lock is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The open handle, present exactly while a lock is held.
    pub fn handle(&self) -> Option<&File> {
        self.handle.as_ref()
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// Filesystem existence check, independent of lock state.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the file.
    ///
    /// Fails with [`LockstampError::InvalidState`] while this instance holds a
    /// handle. Other instances and other processes are not consulted. A file
    /// that is already gone counts as removed.
    pub fn remove(&self) -> Result<()> {
        if self.handle.is_some() {
            return Err(LockstampError::InvalidState {
                path: self.path.clone(),
                reason: format!("cannot remove while {}", self.state),
            });
        }

        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "removed file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(LockstampError::io(&self.path, e)),
        }
    }

    /// Take a shared lock, blocking until the OS grants it.
    ///
    /// If any lock is already held by this instance only the shared count is
    /// bumped; no OS call is made.
    pub fn acquire_read(&mut self) -> Result<()> {
        match self.state {
            LockState::Shared { count } => {
                self.state = LockState::Shared {
                    count: count.saturating_add(1),
                };
            }
            LockState::Exclusive {
                count,
                pending_shared,
            } => {
                self.state = LockState::Exclusive {
                    count,
                    pending_shared: pending_shared.saturating_add(1),
                };
            }
            LockState::Unlocked => {
                let file = File::open(&self.path).map_err(|source| {
                    LockstampError::OpenFailure {
                        path: self.path.clone(),
                        source,
                    }
                })?;
                FileExt::lock_shared(&file).map_err(|source| LockstampError::LockFailed {
                    path: self.path.clone(),
                    source,
                })?;

                self.handle = Some(file);
                self.state = LockState::Shared {
                    count: NonZeroUsize::MIN,
                };
                tracing::debug!(path = %self.path.display(), "acquired shared lock");
            }
        }

        Ok(())
    }

    /// Take an exclusive lock, blocking until the OS grants it.
    ///
    /// From the shared state this upgrades in place on the same handle. The
    /// upgrade is not atomic: the shared lock is dropped before the exclusive
    /// one is granted (by `flock` itself on Unix, explicitly on Windows), so
    /// another writer may slip in between.
    ///
    /// If the upgrade fails the shared lock is taken again and the state stays
    /// shared. If even that fails the handle is closed and the instance is
    /// left unlocked, dropping the outstanding shared acquisitions.
    pub fn acquire_write(&mut self) -> Result<()> {
        match self.state {
            LockState::Exclusive {
                count,
                pending_shared,
            } => {
                self.state = LockState::Exclusive {
                    count: count.saturating_add(1),
                    pending_shared,
                };
            }
            LockState::Shared { count } => {
                let file = self.held_file().map_err(|source| LockstampError::LockFailed {
                    path: self.path.clone(),
                    source,
                })?;
                if let Err(source) = relock(file, true) {
                    self.restore_shared(count);
                    return Err(LockstampError::LockFailed {
                        path: self.path.clone(),
                        source,
                    });
                }

                self.state = LockState::Exclusive {
                    count: NonZeroUsize::MIN,
                    pending_shared: count.get(),
                };
                tracing::debug!(
                    path = %self.path.display(),
                    pending_shared = count.get(),
                    "upgraded to exclusive lock"
                );
            }
            LockState::Unlocked => {
                let file = OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(&self.path)
                    .map_err(|source| LockstampError::OpenFailure {
                        path: self.path.clone(),
                        source,
                    })?;
                FileExt::lock_exclusive(&file).map_err(|source| LockstampError::LockFailed {
                    path: self.path.clone(),
                    source,
                })?;

                self.handle = Some(file);
                self.state = LockState::Exclusive {
                    count: NonZeroUsize::MIN,
                    pending_shared: 0,
                };
                tracing::debug!(path = %self.path.display(), "acquired exclusive lock");
            }
        }

        Ok(())
    }

    /// Release one shared acquisition.
    ///
    /// Never fails. Releasing while unlocked is a no-op. While exclusive the
    /// pending shared count drops but the exclusive lock stays.
    pub fn release_read(&mut self) {
        match self.state {
            LockState::Unlocked => {}
            LockState::Shared { count } => match NonZeroUsize::new(count.get() - 1) {
                Some(count) => self.state = LockState::Shared { count },
                None => self.close(),
            },
            LockState::Exclusive {
                count,
                pending_shared,
            } => {
                self.state = LockState::Exclusive {
                    count,
                    pending_shared: pending_shared.saturating_sub(1),
                };
            }
        }
    }

    /// Release one exclusive acquisition.
    ///
    /// Never fails and is a no-op unless exclusive. When the last exclusive
    /// acquisition goes away the lock is downgraded to shared if shared
    /// acquisitions are still outstanding, otherwise released and closed.
    pub fn release_write(&mut self) {
        let LockState::Exclusive {
            count,
            pending_shared,
        } = self.state
        else {
            return;
        };

        if let Some(count) = NonZeroUsize::new(count.get() - 1) {
            self.state = LockState::Exclusive {
                count,
                pending_shared,
            };
            return;
        }

        match NonZeroUsize::new(pending_shared) {
            Some(shared) => {
                if let Some(file) = &self.handle
                    && let Err(e) = relock(file, false)
                {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "failed to downgrade lock to shared"
                    );
                }
                self.state = LockState::Shared { count: shared };
                tracing::debug!(
                    path = %self.path.display(),
                    count = shared.get(),
                    "downgraded to shared lock"
                );
            }
            None => self.close(),
        }
    }

    /// Scoped shared acquisition, released when the guard drops.
    pub fn read(&mut self) -> Result<ReadGuard<'_>> {
        self.acquire_read()?;
        Ok(ReadGuard::new(self))
    }

    /// Scoped exclusive acquisition, released when the guard drops.
    pub fn write(&mut self) -> Result<WriteGuard<'_>> {
        self.acquire_write()?;
        Ok(WriteGuard::new(self))
    }

    /// Take the shared lock back after a failed upgrade.
    pub(super) fn restore_shared(&mut self, count: NonZeroUsize) {
        let restored = match self.held_file() {
            Ok(file) => FileExt::lock_shared(file),
            Err(e) => Err(e),
        };

        match restored {
            Ok(()) => self.state = LockState::Shared { count },
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    dropped_shared = count.get(),
                    "failed to restore shared lock after failed upgrade"
                );
                self.close();
            }
        }
    }

    pub(crate) fn held_file(&self) -> io::Result<&File> {
        self.handle.as_ref().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotConnected,
                format!("no lock held on '{}'", self.path.display()),
            )
        })
    }

    /// Unlock and close the handle, returning to `Unlocked`.
    fn close(&mut self) {
        if let Some(file) = self.handle.take()
            && let Err(e) = FileExt::unlock(&file)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to unlock file");
        }
        self.state = LockState::Unlocked;
        tracing::debug!(path = %self.path.display(), "released lock");
    }
}

/// Switch the OS lock mode held on `file`.
///
/// `flock` converts an existing lock. `LockFileEx` stacks a second lock on
/// the range instead and an exclusive request waits on the handle's own shared
/// lock, so on Windows the held lock is released first.
fn relock(file: &File, exclusive: bool) -> io::Result<()> {
    #[cfg(windows)]
    FileExt::unlock(file)?;

    if exclusive {
        FileExt::lock_exclusive(file)
    } else {
        FileExt::lock_shared(file)
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if self.handle.is_some() {
            tracing::warn!(
                path = %self.path.display(),
                state = %self.state,
                "lock dropped while held; releasing"
            );
            self.close();
        }
    }
}
