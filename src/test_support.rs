use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temp directory holding one file with the given content.
pub(crate) fn temp_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

fn second_handle(path: &Path) -> File {
    OpenOptions::new()
        .read(true)
        .open(path)
        .unwrap_or_else(|e| panic!("failed to open second handle for {}: {}", path.display(), e))
}

/// Whether some other handle holds any lock that excludes a writer.
pub(crate) fn blocks_writers(path: &Path) -> bool {
    let other = second_handle(path);
    match FileExt::try_lock_exclusive(&other) {
        Ok(()) => {
            FileExt::unlock(&other).unwrap();
            false
        }
        Err(_) => true,
    }
}

/// Whether some other handle holds an exclusive lock.
pub(crate) fn blocks_readers(path: &Path) -> bool {
    let other = second_handle(path);
    match FileExt::try_lock_shared(&other) {
        Ok(()) => {
            FileExt::unlock(&other).unwrap();
            false
        }
        Err(_) => true,
    }
}
