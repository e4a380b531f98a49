//! Atomic replace-on-write for small mutable files (refs, HEAD, index)
//!
//! Writers first take an exclusive lock on a `<file>.lock` sidecar so that two
//! processes never interleave updates, then write the new content to a temp
//! file next to the target and rename it into place. A crash at any point
//! leaves either the previous or the new content on disk.

use crate::errors::{IoContext, RepositoryResult};
use fake::rand;
use file_guard::Lock;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const LOCK_EXTENSION: &str = "lock";

/// Exclusive lock on the sidecar of a mutable repository file
pub struct Lockfile {
    target: PathBuf,
    lock_path: PathBuf,
}

impl Lockfile {
    pub fn new(target: &Path) -> Self {
        let mut lock_path = target.as_os_str().to_owned();
        lock_path.push(".");
        lock_path.push(LOCK_EXTENSION);

        Lockfile {
            target: target.to_path_buf(),
            lock_path: PathBuf::from(lock_path),
        }
    }

    /// Replace the target's content with `content`
    pub fn write(&self, content: &[u8]) -> RepositoryResult<()> {
        self.with_lock(|| {
            let temp_path = self.temp_path();

            let mut temp_file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&temp_path)
                .io_context(|| format!("failed to create temp file {:?}", temp_path))?;
            temp_file
                .write_all(content)
                .io_context(|| format!("failed to write temp file {:?}", temp_path))?;
            temp_file
                .sync_all()
                .io_context(|| format!("failed to flush temp file {:?}", temp_path))?;

            std::fs::rename(&temp_path, &self.target)
                .io_context(|| format!("failed to replace {:?}", self.target))
        })
    }

    /// Delete the target if it exists
    pub fn remove(&self) -> RepositoryResult<()> {
        self.with_lock(|| match std::fs::remove_file(&self.target) {
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            result => result.io_context(|| format!("failed to remove {:?}", self.target)),
        })
    }

    fn with_lock<T>(&self, action: impl FnOnce() -> RepositoryResult<T>) -> RepositoryResult<T> {
        if let Some(parent) = self.target.parent() {
            std::fs::create_dir_all(parent)
                .io_context(|| format!("failed to create parent directories of {:?}", self.target))?;
        }

        let mut lock_file = Self::open_lock_file(&self.lock_path)?;
        let _lock = file_guard::lock(&mut lock_file, Lock::Exclusive, 0, 1)
            .io_context(|| format!("failed to lock {:?}", self.lock_path))?;

        action()
    }

    fn open_lock_file(lock_path: &Path) -> RepositoryResult<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)
            .io_context(|| format!("failed to open lock file {:?}", lock_path))
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp_path = self.target.as_os_str().to_owned();
        temp_path.push(format!(".tmp-{}", rand::random::<u32>()));
        PathBuf::from(temp_path)
    }
}

/// Whether a directory entry is lock or temp bookkeeping rather than real content
pub fn is_bookkeeping_file(file_name: &str) -> bool {
    file_name.ends_with(".lock") || file_name.contains(".tmp-")
}
