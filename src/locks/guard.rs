//! RAII guards for scoped lock acquisition.
//!
//! A guard releases exactly the acquisition that created it when dropped, on
//! every exit path. Guards nest: calling [`ReadGuard::nested_write`] upgrades the
//! lock for the lifetime of the returned guard and dropping it downgrades back
//! to shared.

use super::file_lock::FileLock;
use super::types::LockState;
use crate::error::{LockstampError, Result};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Guard for one shared acquisition.
#[derive(Debug)]
pub struct ReadGuard<'a> {
    lock: &'a mut FileLock,
}

impl<'a> ReadGuard<'a> {
    pub(super) fn new(lock: &'a mut FileLock) -> Self {
        Self { lock }
    }

    pub fn path(&self) -> &Path {
        self.lock.path()
    }

    pub fn state(&self) -> LockState {
        self.lock.state()
    }

    /// The open handle backing this lock.
    pub fn file(&self) -> io::Result<&File> {
        self.lock.held_file()
    }

    /// Take another shared acquisition on the same instance.
    pub fn nested_read(&mut self) -> Result<ReadGuard<'_>> {
        self.lock.read()
    }

    /// Upgrade to exclusive for the lifetime of the returned guard.
    pub fn nested_write(&mut self) -> Result<WriteGuard<'_>> {
        self.lock.write()
    }

    /// Read the whole file from the start.
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        self.seek(SeekFrom::Start(0))
            .and_then(|_| self.read_to_end(&mut content))
            .map_err(|e| LockstampError::io(self.lock.path(), e))?;
        Ok(content)
    }
}

impl Read for ReadGuard<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut file = self.lock.held_file()?;
        file.read(buf)
    }
}

impl Seek for ReadGuard<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let mut file = self.lock.held_file()?;
        file.seek(pos)
    }
}

impl Drop for ReadGuard<'_> {
    fn drop(&mut self) {
        self.lock.release_read();
    }
}

/// Guard for one exclusive acquisition.
#[derive(Debug)]
pub struct WriteGuard<'a> {
    lock: &'a mut FileLock,
}

impl<'a> WriteGuard<'a> {
    pub(super) fn new(lock: &'a mut FileLock) -> Self {
        Self { lock }
    }

    pub fn path(&self) -> &Path {
        self.lock.path()
    }

    pub fn state(&self) -> LockState {
        self.lock.state()
    }

    /// The open handle backing this lock.
    pub fn file(&self) -> io::Result<&File> {
        self.lock.held_file()
    }

    /// Take a shared acquisition while exclusive; it stays pending until released.
    pub fn nested_read(&mut self) -> Result<ReadGuard<'_>> {
        self.lock.read()
    }

    /// Take another exclusive acquisition on the same instance.
    pub fn nested_write(&mut self) -> Result<WriteGuard<'_>> {
        self.lock.write()
    }

    /// Truncate the file to zero length and rewind.
    pub fn truncate(&mut self) -> Result<()> {
        self.lock
            .held_file()
            .and_then(|mut file| {
                file.set_len(0)?;
                file.seek(SeekFrom::Start(0)).map(|_| ())
            })
            .map_err(|e| LockstampError::io(self.lock.path(), e))
    }

    /// Replace the whole file content with `content`.
    pub fn replace(&mut self, content: &[u8]) -> Result<()> {
        self.truncate()?;
        self.write_all(content)
            .map_err(|e| LockstampError::io(self.lock.path(), e))
    }

    /// Flush file data and metadata to disk.
    pub fn sync(&self) -> Result<()> {
        self.lock
            .held_file()
            .and_then(|file| file.sync_all())
            .map_err(|e| LockstampError::io(self.lock.path(), e))
    }
}

impl Read for WriteGuard<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut file = self.lock.held_file()?;
        file.read(buf)
    }
}

impl Write for WriteGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self.lock.held_file()?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self.lock.held_file()?;
        file.flush()
    }
}

impl Seek for WriteGuard<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let mut file = self.lock.held_file()?;
        file.seek(pos)
    }
}

impl Drop for WriteGuard<'_> {
    fn drop(&mut self) {
        self.lock.release_write();
    }
}
