use crate::areas::repository::Repository;
use crate::areas::workspace::{WorkTree, normalize_path, validate_path};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::path_to_string;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

impl<W: WorkTree> Repository<W> {
    /// Stage files (or every file below a directory) for the next commit
    ///
    /// Paths are relative to the repository root. Every path is resolved
    /// before anything is staged, so one missing file leaves the index as it was.
    pub fn add(&mut self, paths: &[PathBuf]) -> RepositoryResult<Vec<(PathBuf, ObjectId)>> {
        let mut files = Vec::new();
        for path in paths {
            let path = normalize_path(path)?;
            for file in self.worktree().files_under(&path)? {
                files.push(validate_path(&file)?);
            }
        }
        files.sort();
        files.dedup();

        let mut index = self.index();
        // Load the index file from the disk
        index.rehydrate()?;

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            let content = self.worktree().read(&file)?;
            let blob_id = self.database().store(&Blob::new(content))?;

            debug!(path = %file.display(), oid = %blob_id, "staged file");
            index.add(file.clone(), blob_id.clone());
            staged.push((file, blob_id));
        }

        index.write_updates()?;
        drop(index);

        for (file, blob_id) in &staged {
            writeln!(
                self.writer(),
                "Staged {} with hash {}",
                path_to_string(file),
                blob_id
            )?;
        }

        Ok(staged)
    }
}
