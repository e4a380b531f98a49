use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::branch::branch_name::{BranchName, Head};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use colored::Colorize;
use std::io::Write;
use tracing::info;

impl<W: WorkTree> Repository<W> {
    /// Point a new branch at the current HEAD commit
    pub fn create_branch(&mut self, branch_name: &str) -> RepositoryResult<ObjectId> {
        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let source_oid = self
            .refs()
            .head_oid()?
            .ok_or(RepositoryError::NoCommitsYet)?;

        self.refs().create_branch(&branch_name, &source_oid)?;
        info!(branch = %branch_name, oid = %source_oid, "created branch");

        writeln!(
            self.writer(),
            "Created branch {} at {}",
            branch_name,
            source_oid.to_short_oid()
        )?;

        Ok(source_oid)
    }

    /// Print every branch, marking the one HEAD tracks
    pub fn list_branches(&self) -> RepositoryResult<Vec<BranchName>> {
        let head = self.refs().read_head()?;
        let branches = self.refs().list_branches()?;

        if let Head::Detached(oid) = &head {
            writeln!(
                self.writer(),
                "* {}",
                format!("(HEAD detached at {})", oid.to_short_oid()).green()
            )?;
        }
        for branch in &branches {
            if head.branch() == Some(branch) {
                writeln!(self.writer(), "* {}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "  {}", branch)?;
            }
        }

        Ok(branches)
    }
}
