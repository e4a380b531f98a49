use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::HashSet;

/// Lazy first-parent walk over the commit graph
///
/// Yields each commit together with its ID, newest first, and stops after the
/// root commit. Once an error has been yielded the walk is over.
pub struct RevList<'r> {
    database: &'r Database,
    current_commit_oid: Option<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl<'r> RevList<'r> {
    pub fn new(database: &'r Database, start: Option<ObjectId>) -> Self {
        RevList {
            database,
            current_commit_oid: start,
            visited: HashSet::new(),
        }
    }

    fn corrupt(&mut self, commit_oid: &ObjectId, reason: &str) -> RepositoryError {
        self.current_commit_oid = None;
        RepositoryError::CorruptHistory {
            commit: commit_oid.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = RepositoryResult<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        if !self.visited.insert(commit_oid.clone()) {
            return Some(Err(self.corrupt(&commit_oid, "commit reached twice")));
        }
        if !self.database.contains(&commit_oid) {
            return Some(Err(self.corrupt(&commit_oid, "commit is missing")));
        }

        match self.database.load_commit(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(error) => Some(Err(error)),
        }
    }
}
