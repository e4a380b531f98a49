//! Repository error types
//!
//! Every fallible core operation returns a [`RepositoryResult`]. The variants map
//! one-to-one onto the outcomes a caller is expected to react to (a missing file,
//! an unborn branch, a merge conflict, ...). Plain I/O failures are wrapped in
//! [`RepositoryError::Io`] together with a short description of what was being done.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for repository operations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// the command was run outside an initialized repository
    #[error("not a minibit repository (or any parent up to mount point): {0}")]
    NotARepository(PathBuf),

    /// the file to stage does not exist in the working tree
    #[error("pathspec '{0}' did not match any files")]
    FileNotFound(PathBuf),

    /// the path cannot be tracked (absolute, escapes the root, ...)
    #[error("invalid path '{path}': {reason}")]
    InvalidPath { path: PathBuf, reason: &'static str },

    /// commit requested with an empty index
    #[error("nothing to commit, the index is empty")]
    NothingStaged,

    /// checkout target is neither a branch nor a stored commit
    #[error("pathspec '{0}' did not match any branch or commit")]
    UnknownTarget(String),

    /// merge target branch does not exist
    #[error("branch '{0}' not found")]
    BranchNotFound(String),

    /// both sides changed the same paths
    #[error("merge conflict in {}", display_paths(.paths))]
    MergeConflict { paths: Vec<PathBuf> },

    /// a conflict file would overwrite a tracked path
    #[error(
        "cannot write conflict file '{}': the path is tracked, stage a resolution for '{}' and merge again",
        .artifact.display(),
        .path.display()
    )]
    ConflictArtifactTracked { path: PathBuf, artifact: PathBuf },

    /// a parent link points at a missing or already visited commit
    #[error("corrupt history at commit {commit}: {reason}")]
    CorruptHistory { commit: String, reason: String },

    /// diff/cat-file on a digest that names no stored blob
    #[error("invalid object name '{0}'")]
    InvalidDigest(String),

    /// object absent from the database
    #[error("object {0} not found")]
    NotFound(String),

    /// stored object could not be parsed
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: String, reason: String },

    /// branch already exists
    #[error("a branch named '{0}' already exists")]
    BranchExists(String),

    /// branch name rejected by ref-name rules
    #[error("'{0}' is not a valid branch name")]
    InvalidBranchName(String),

    /// HEAD does not point at a commit yet
    #[error("HEAD does not point at a commit yet, make a commit first")]
    NoCommitsYet,

    /// I/O failure (filesystem level)
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl RepositoryError {
    /// check if this error indicates the resource doesn't exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::FileNotFound(_)
                | RepositoryError::UnknownTarget(_)
                | RepositoryError::BranchNotFound(_)
                | RepositoryError::InvalidDigest(_)
                | RepositoryError::NotFound(_)
        )
    }

    /// check if this error is a conflict
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RepositoryError::MergeConflict { .. }
                | RepositoryError::ConflictArtifactTracked { .. }
                | RepositoryError::BranchExists(_)
        )
    }
}

// command output written straight to the repository writer
impl From<std::io::Error> for RepositoryError {
    fn from(source: std::io::Error) -> Self {
        RepositoryError::Io {
            context: "failed to write output".to_string(),
            source,
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Attach a description to raw I/O errors, in the spirit of `anyhow::Context`
pub trait IoContext<T> {
    fn io_context<F>(self, context: F) -> RepositoryResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn io_context<F>(self, context: F) -> RepositoryResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| RepositoryError::Io {
            context: context(),
            source,
        })
    }
}
