use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::objects::commit::{Commit, Snapshot};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::HashSet;
use tracing::debug;

const MAX_PARENTS: usize = 2;

impl<W: WorkTree> Repository<W> {
    /// Store a commit object without moving any ref
    ///
    /// Parents must be distinct stored commits, at most two of them; a root
    /// commit has none.
    pub fn create_commit(
        &self,
        parents: Vec<ObjectId>,
        snapshot: Snapshot,
        message: &str,
    ) -> RepositoryResult<(ObjectId, Commit)> {
        self.check_parents(&parents)?;

        let timestamp = self.config().commit_timestamp();
        let commit = Commit::new(parents, snapshot, timestamp, message.to_string());
        let commit_id = self.database().store(&commit)?;

        debug!(
            oid = %commit_id,
            parents = commit.parents().len(),
            files = commit.snapshot().len(),
            "created commit"
        );
        Ok((commit_id, commit))
    }

    fn check_parents(&self, parents: &[ObjectId]) -> RepositoryResult<()> {
        let invalid = |commit: &ObjectId, reason: &str| RepositoryError::CorruptHistory {
            commit: commit.to_string(),
            reason: reason.to_string(),
        };

        if let Some(extra) = parents.get(MAX_PARENTS) {
            return Err(invalid(extra, "a commit has at most two parents"));
        }

        let mut seen = HashSet::new();
        for parent in parents {
            if !seen.insert(parent) {
                return Err(invalid(parent, "duplicate parent"));
            }
            if !self.database().is_commit(parent)? {
                return Err(invalid(parent, "parent is not a stored commit"));
            }
        }

        Ok(())
    }
}
