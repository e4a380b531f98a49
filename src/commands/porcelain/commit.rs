use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use std::io::Write;
use tracing::info;

impl<W: WorkTree> Repository<W> {
    /// Commit the staged files on top of HEAD
    ///
    /// The new snapshot is HEAD's snapshot with the staged entries laid over
    /// it. The commit object is stored before the ref moves, and the index is
    /// cleared only once the ref points at the new commit.
    pub fn commit(&mut self, message: &str) -> RepositoryResult<ObjectId> {
        let mut index = self.index();
        // Load the index file from the disk
        index.rehydrate()?;
        let staged = index.take_snapshot()?;

        let parent = self.head_commit()?;
        let is_root = parent.is_none();
        let (parents, mut snapshot) = match parent {
            Some((parent_oid, parent_commit)) => {
                (vec![parent_oid], parent_commit.into_snapshot())
            }
            None => (Vec::new(), Default::default()),
        };
        snapshot.extend(staged);

        let (commit_id, commit) = self.create_commit(parents, snapshot, message.trim())?;
        self.refs().update_head(&commit_id)?;
        index.write_updates()?;
        drop(index);

        info!(oid = %commit_id, root = is_root, "committed");

        let head = match self.refs().current_branch()? {
            Some(branch) => branch.to_string(),
            None => "detached HEAD".to_string(),
        };
        let root_marker = if is_root { " (root-commit)" } else { "" };
        writeln!(
            self.writer(),
            "[{head}{root_marker} {}] {}",
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
