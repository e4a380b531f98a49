use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::branch::branch_name::{BranchName, Head};
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use colored::Colorize;
use std::collections::HashMap;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub abbrev_commit: bool,
}

impl<W: WorkTree> Repository<W> {
    /// First-parent history starting at HEAD, newest first
    pub fn ancestors(&self) -> RepositoryResult<RevList<'_>> {
        Ok(RevList::new(self.database(), self.refs().head_oid()?))
    }

    pub fn log(&self, opts: &LogOptions) -> RepositoryResult<Vec<ObjectId>> {
        let head = self.refs().read_head()?;
        if self.refs().head_oid()?.is_none() {
            return Err(RepositoryError::NoCommitsYet);
        }
        let reverse_refs = self.refs().reverse_refs()?;

        let mut shown = Vec::new();
        for entry in self.ancestors()? {
            let (commit_oid, commit) = entry?;
            let decoration = Self::commit_decoration(&commit_oid, &head, &reverse_refs);

            if opts.oneline {
                self.show_commit_oneline(&commit_oid, &commit, &decoration)?;
            } else {
                if !shown.is_empty() {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&commit_oid, &commit, &decoration, opts.abbrev_commit)?;
            }

            shown.push(commit_oid);
        }

        Ok(shown)
    }

    fn show_commit_medium(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
        abbrev_commit: bool,
    ) -> RepositoryResult<()> {
        let commit_id = if abbrev_commit {
            commit_oid.to_short_oid()
        } else {
            commit_oid.to_string()
        };

        writeln!(
            self.writer(),
            "{}{}",
            format!("commit {commit_id}").yellow(),
            decoration
        )?;
        if commit.is_merge() {
            let parents = commit
                .parents()
                .iter()
                .map(ObjectId::to_short_oid)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer(), "Merge: {parents}")?;
        }
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> RepositoryResult<()> {
        writeln!(
            self.writer(),
            "{}{} {}",
            commit_oid.to_short_oid().yellow(),
            decoration,
            commit.short_message()
        )?;

        Ok(())
    }

    // " (HEAD -> master, feature)" for the commit HEAD's branch points at
    fn commit_decoration(
        commit_oid: &ObjectId,
        head: &Head,
        reverse_refs: &HashMap<ObjectId, Vec<BranchName>>,
    ) -> String {
        let branches = reverse_refs.get(commit_oid).cloned().unwrap_or_default();
        let mut names = Vec::new();

        if let Head::Detached(head_oid) = head
            && head_oid == commit_oid
        {
            names.push("HEAD".cyan().bold().to_string());
        }

        let current = head.branch();
        if let Some(current) = current
            && branches.contains(current)
        {
            names.push(format!(
                "{} -> {}",
                "HEAD".cyan().bold(),
                current.as_ref().green().bold()
            ));
        }
        names.extend(
            branches
                .iter()
                .filter(|branch| Some(*branch) != current)
                .map(|branch| branch.as_ref().green().bold().to_string()),
        );

        if names.is_empty() {
            return String::new();
        }
        format!(" ({})", names.join(", "))
    }
}
