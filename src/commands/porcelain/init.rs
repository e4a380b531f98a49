use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::branch::branch_name::{BranchName, Head};
use crate::errors::{IoContext, RepositoryResult};
use std::fs;
use std::io::Write;
use tracing::info;

impl<W: WorkTree> Repository<W> {
    /// Create the metadata directory layout
    ///
    /// Running it again on an existing repository keeps HEAD and every ref.
    pub fn init(&mut self) -> RepositoryResult<()> {
        let reinitialized = self.is_initialized();

        fs::create_dir_all(self.database().objects_path())
            .io_context(|| "failed to create objects directory".to_string())?;
        fs::create_dir_all(self.refs().heads_path())
            .io_context(|| "failed to create refs/heads directory".to_string())?;

        if !reinitialized {
            // the default branch stays unborn until the first commit
            self.refs()
                .set_head(&Head::Symbolic(BranchName::default_branch()))?;
        }

        info!(path = %self.path().display(), reinitialized, "initialized repository");

        let prefix = if reinitialized {
            "Reinitialized existing"
        } else {
            "Initialized empty"
        };
        writeln!(
            self.writer(),
            "{prefix} minibit repository in {}",
            self.metadata_path().display()
        )?;

        Ok(())
    }
}
