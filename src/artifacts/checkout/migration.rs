//! Checkout migration
//!
//! A migration is the list of file operations that moves the working tree from
//! one snapshot to another:
//!
//! 1. Remove every path tracked by the old snapshot and absent from the new one
//! 2. Write every path of the new snapshot, so edits to tracked files are undone
//!
//! Blob contents are loaded while planning, so applying a migration only
//! touches the work tree.

use crate::areas::workspace::WorkTree;
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Type of file system action required for checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create or overwrite a file with the given content
    Write { path: PathBuf, content: Bytes },
    /// Delete a file no longer tracked
    Remove { path: PathBuf },
}

impl Action {
    pub fn path(&self) -> &Path {
        match self {
            Action::Write { path, .. } | Action::Remove { path } => path,
        }
    }
}

/// Planned working tree changes between two snapshots
#[derive(Debug, Default)]
pub struct Migration {
    actions: Vec<Action>,
}

impl Migration {
    /// Plan the changes from `from` to `to`
    ///
    /// `load_blob` returns the content of a blob referenced by `to`.
    pub fn plan<F>(from: &Snapshot, to: &Snapshot, load_blob: F) -> RepositoryResult<Self>
    where
        F: Fn(&ObjectId) -> RepositoryResult<Bytes>,
    {
        let removals = from
            .keys()
            .filter(|path| !to.contains_key(*path))
            .map(|path| Action::Remove { path: path.clone() });

        let mut actions = removals.collect::<Vec<_>>();
        for (path, oid) in to {
            actions.push(Action::Write {
                path: path.clone(),
                content: load_blob(oid)?,
            });
        }

        Ok(Migration { actions })
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    // Removals come first so a file and a directory of the same name can swap places
    pub fn apply(&self, worktree: &mut impl WorkTree) -> RepositoryResult<()> {
        for action in &self.actions {
            match action {
                Action::Remove { path } => worktree.remove(path)?,
                Action::Write { path, content } => worktree.write(path, content)?,
            }
        }

        debug!(actions = self.actions.len(), "applied migration");
        Ok(())
    }
}
