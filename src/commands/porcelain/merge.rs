use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::merge_plan::{MergePlan, conflict_artifacts};
use crate::artifacts::objects::commit::{Snapshot, path_to_string};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::io::Write;
use tracing::{info, warn};

/// How a merge that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The other branch already points at HEAD's commit
    AlreadyUpToDate,
    /// A two-parent commit was created
    Merged(ObjectId),
}

impl<W: WorkTree> Repository<W> {
    /// Merge the tip of `branch` into the current HEAD
    ///
    /// Paths changed on both sides stop the merge: both versions are written
    /// next to the path as `<path>.current` and `<path>.other`, no commit is
    /// made and `MergeConflict` lists the paths. Staging a resolution and
    /// running the merge again completes it. When a conflict file would land
    /// on a tracked path nothing is written and `ConflictArtifactTracked` is
    /// returned instead.
    pub fn merge(&mut self, branch: &str) -> RepositoryResult<MergeOutcome> {
        let (head_oid, head_commit) = self
            .head_commit()?
            .ok_or(RepositoryError::NoCommitsYet)?;

        let branch_name = BranchName::try_parse(branch.to_string())
            .map_err(|_| RepositoryError::BranchNotFound(branch.to_string()))?;
        let merge_oid = self
            .refs()
            .read_ref(&branch_name)?
            .ok_or_else(|| RepositoryError::BranchNotFound(branch.to_string()))?;

        if merge_oid == head_oid {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(MergeOutcome::AlreadyUpToDate);
        }
        let merge_commit = self.load_commit_checked(&merge_oid)?;

        let mut index = self.index();
        index.rehydrate()?;
        let staged: Snapshot = index
            .entries()
            .map(|(path, oid)| (path.clone(), oid.clone()))
            .collect();

        let plan = MergePlan::compute(head_commit.snapshot(), merge_commit.snapshot())
            .with_resolutions(&staged);

        if plan.has_conflicts() {
            drop(index);
            if let Some((path, artifact)) = plan.artifact_clash(&staged) {
                warn!(
                    path = %path.display(),
                    artifact = %artifact.display(),
                    "conflict file is tracked"
                );
                return Err(RepositoryError::ConflictArtifactTracked { path, artifact });
            }
            return Err(self.report_conflicts(&plan)?);
        }

        let mut snapshot = plan.snapshot().unwrap_or_default();
        snapshot.extend(staged);

        let message = format!("Merged branch {branch_name}");
        let (commit_id, merged_commit) =
            self.create_commit(vec![head_oid, merge_oid], snapshot, &message)?;
        self.refs().update_head(&commit_id)?;
        index.discard()?;
        drop(index);

        let migration = Migration::plan(head_commit.snapshot(), merged_commit.snapshot(), |oid| {
            self.database().load_blob(oid)
        })?;
        migration.apply(&mut *self.worktree_mut())?;

        for path in plan.resolved_paths() {
            let (current, other) = conflict_artifacts(path);
            let mut worktree = self.worktree_mut();
            for artifact in [current, other] {
                if !merged_commit.snapshot().contains_key(&artifact) {
                    worktree.remove(&artifact)?;
                }
            }
        }

        info!(branch = %branch_name, oid = %commit_id, "merged");
        writeln!(self.writer(), "{message}")?;

        Ok(MergeOutcome::Merged(commit_id))
    }

    // Write both sides of every conflicted path and build the error to return
    fn report_conflicts(&self, plan: &MergePlan) -> RepositoryResult<RepositoryError> {
        let mut paths = Vec::new();

        for (path, ours, theirs) in plan.conflicts() {
            let (current, other) = conflict_artifacts(path);
            let our_content = self.database().load_blob(ours)?;
            let their_content = self.database().load_blob(theirs)?;

            let mut worktree = self.worktree_mut();
            worktree.write(&current, &our_content)?;
            worktree.write(&other, &their_content)?;
            drop(worktree);

            warn!(path = %path.display(), "merge conflict");
            writeln!(self.writer(), "CONFLICT: both modified {}", path_to_string(path))?;
            paths.push(path.clone());
        }

        writeln!(
            self.writer(),
            "Automatic merge failed; fix conflicts, stage the result and merge again."
        )?;

        Ok(RepositoryError::MergeConflict { paths })
    }
}
