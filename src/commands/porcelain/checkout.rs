use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::branch::branch_name::{BranchName, Head};
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::io::Write;
use tracing::info;

const DETACHMENT_NOTICE: &str = r#"
You are in 'detached HEAD' state. You can look around and make experimental
commits; they are not kept on any branch unless you create one with:

    minibit branch <new-branch-name>
"#;

impl<W: WorkTree> Repository<W> {
    /// Switch HEAD to a branch or a commit and materialize its snapshot
    ///
    /// A branch name wins over a commit digest; a digest (or an unambiguous
    /// prefix of one) detaches HEAD.
    pub fn checkout(&mut self, target: &str) -> RepositoryResult<Head> {
        let (new_head, target_oid) = self.resolve_checkout_target(target)?;
        let target_commit = self.load_commit_checked(&target_oid)?;
        let current_snapshot = self.head_snapshot()?;
        let was_detached = self.refs().read_head()?.is_detached();

        let migration = Migration::plan(&current_snapshot, target_commit.snapshot(), |oid| {
            self.database().load_blob(oid)
        })?;
        migration.apply(&mut *self.worktree_mut())?;
        self.refs().set_head(&new_head)?;

        info!(target, changes = migration.actions().len(), "checked out");

        match &new_head {
            Head::Symbolic(branch) => {
                writeln!(self.writer(), "Switched to branch '{branch}'")?;
            }
            Head::Detached(oid) => {
                if !was_detached {
                    writeln!(self.writer(), "Note: checking out '{target}'.{DETACHMENT_NOTICE}")?;
                }
                writeln!(
                    self.writer(),
                    "HEAD is now at {} {}",
                    oid.to_short_oid(),
                    target_commit.short_message()
                )?;
            }
        }

        Ok(new_head)
    }

    fn resolve_checkout_target(&self, target: &str) -> RepositoryResult<(Head, ObjectId)> {
        if let Ok(branch) = BranchName::try_parse(target.to_string())
            && let Some(oid) = self.refs().read_ref(&branch)?
        {
            return Ok((Head::Symbolic(branch), oid));
        }

        match self.resolve_object_id(target) {
            Ok(oid) if self.database().is_commit(&oid)? => Ok((Head::Detached(oid.clone()), oid)),
            Ok(_) => Err(RepositoryError::UnknownTarget(target.to_string())),
            Err(error) if error.is_not_found() => {
                Err(RepositoryError::UnknownTarget(target.to_string()))
            }
            Err(error) => Err(error),
        }
    }
}
