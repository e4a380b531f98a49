//! Staging index
//!
//! The index tracks which file contents should go into the next commit. It is a
//! plain mapping from path to blob ID: staging a path again replaces the
//! previous entry. The index is created lazily on the first `add` and removed
//! once a commit has consumed it.
//!
//! ## Index File Format
//!
//! One line per entry, sorted by path:
//!
//! ```text
//! <path> <blob-sha>
//! ```
//!
//! Lines are split at the last space, so paths may contain spaces.

use crate::areas::lockfile::Lockfile;
use crate::artifacts::objects::commit::{Snapshot, path_to_string};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Staging index
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.minibit/index`)
    path: Box<Path>,
    /// Staged files mapped by path
    entries: Snapshot,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Snapshot::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &ObjectId)> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Load the index from disk
    ///
    /// A missing index file means nothing is staged.
    pub fn rehydrate(&mut self) -> RepositoryResult<()> {
        self.entries.clear();
        self.changed = false;

        let content = match std::fs::read_to_string(&self.path) {
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            result => {
                result.io_context(|| format!("failed to read index file at {:?}", self.path))?
            }
        };

        for line in content.lines().filter(|line| !line.is_empty()) {
            let (path, oid) = line.rsplit_once(' ').ok_or_else(|| RepositoryError::Io {
                context: format!("failed to parse index file at {:?}", self.path),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("malformed index line '{line}'"),
                ),
            })?;

            self.entries
                .insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
        }

        debug!(entries = self.entries.len(), "loaded index");
        Ok(())
    }

    /// Stage `oid` as the content of `path`, replacing any earlier entry
    pub fn add(&mut self, path: PathBuf, oid: ObjectId) {
        if self.entry_by_path(&path) != Some(&oid) {
            self.entries.insert(path, oid);
            self.changed = true;
        }
    }

    /// Hand the staged entries over and leave the index empty
    pub fn take_snapshot(&mut self) -> RepositoryResult<Snapshot> {
        if self.entries.is_empty() {
            return Err(RepositoryError::NothingStaged);
        }

        self.changed = true;
        Ok(std::mem::take(&mut self.entries))
    }

    pub fn write_updates(&mut self) -> RepositoryResult<()> {
        if !self.changed {
            return Ok(());
        }

        if self.entries.is_empty() {
            return self.discard();
        }

        let content = self
            .entries
            .iter()
            .map(|(path, oid)| format!("{} {}\n", path_to_string(path), oid))
            .collect::<String>();
        Lockfile::new(&self.path).write(content.as_bytes())?;
        self.changed = false;

        debug!(entries = self.entries.len(), "wrote index");
        Ok(())
    }

    /// Drop every entry and remove the index file
    pub fn discard(&mut self) -> RepositoryResult<()> {
        self.entries.clear();
        Lockfile::new(&self.path).remove()?;
        self.changed = false;

        debug!("discarded index");
        Ok(())
    }
}
