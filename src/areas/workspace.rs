//! Working tree access
//!
//! The core never touches the filesystem directly when it reads or writes
//! tracked files: everything goes through the [`WorkTree`] trait. [`Workspace`]
//! is the real, directory-backed implementation; [`MemoryWorkTree`] keeps files
//! in a map and backs the engine tests.
//!
//! Paths handed to a work tree are relative to its root and already normalised
//! (see [`normalize_path`]).

use crate::areas::repository::METADATA_DIR;
use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use bytes::Bytes;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Narrow interface between the core and the files a user edits
pub trait WorkTree {
    /// Read a tracked file, `FileNotFound` if it does not exist
    fn read(&self, path: &Path) -> RepositoryResult<Bytes>;

    /// Create or overwrite a file
    fn write(&mut self, path: &Path, content: &[u8]) -> RepositoryResult<()>;

    /// Delete a file; deleting a missing file is not an error
    fn remove(&mut self, path: &Path) -> RepositoryResult<()>;

    /// Every file at or below `path`, sorted
    ///
    /// An empty path means the whole tree. Fails with `FileNotFound` when
    /// nothing lives at `path`.
    fn files_under(&self, path: &Path) -> RepositoryResult<Vec<PathBuf>>;
}

/// Lexically normalise a user path relative to the work tree root
///
/// `.` components are dropped and `..` pops the previous component. The result
/// may be empty (the root itself) but never escapes the root.
pub fn normalize_path(path: &Path) -> RepositoryResult<PathBuf> {
    let invalid = |reason| RepositoryError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    };

    if path.to_string_lossy().contains('\n') {
        return Err(invalid("paths cannot contain newlines"));
    }

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return Err(invalid("path is outside the repository"));
                }
            }
            Component::Normal(name) => normalized.push(name),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("path must be relative to the repository root"));
            }
        }
    }

    Ok(normalized)
}

/// Normalise a path and make sure it can be tracked
pub fn validate_path(path: &Path) -> RepositoryResult<PathBuf> {
    let normalized = normalize_path(path)?;

    if normalized.as_os_str().is_empty() {
        return Err(RepositoryError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path names the repository root",
        });
    }

    if is_metadata_path(&normalized) {
        return Err(RepositoryError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is inside the metadata directory",
        });
    }

    Ok(normalized)
}

fn is_metadata_path(path: &Path) -> bool {
    matches!(
        path.components().next(),
        Some(Component::Normal(name)) if name == METADATA_DIR
    )
}

/// Directory-backed work tree
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Turn a path typed by the user in `cwd` into a path relative to the root
    pub fn relative_path(&self, cwd: &Path, raw: &Path) -> RepositoryResult<PathBuf> {
        let outside = || RepositoryError::InvalidPath {
            path: raw.to_path_buf(),
            reason: "path is outside the repository",
        };

        let joined = if raw.is_absolute() {
            raw.strip_prefix(&self.path).map_err(|_| outside())?.to_path_buf()
        } else {
            cwd.strip_prefix(&self.path).map_err(|_| outside())?.join(raw)
        };

        normalize_path(&joined)
    }

    // Remove now-empty directories between `path` and the root
    fn prune_empty_parents(&self, path: &Path) -> RepositoryResult<()> {
        let mut current = path.parent();

        while let Some(dir) = current
            && !dir.as_os_str().is_empty()
        {
            let dir_path = self.path.join(dir);
            let is_empty = std::fs::read_dir(&dir_path)
                .map(|mut entries| entries.next().is_none())
                .unwrap_or(false);
            if !is_empty {
                break;
            }

            std::fs::remove_dir(&dir_path)
                .io_context(|| format!("failed to remove empty directory {:?}", dir_path))?;
            current = dir.parent();
        }

        Ok(())
    }
}

impl WorkTree for Workspace {
    fn read(&self, path: &Path) -> RepositoryResult<Bytes> {
        let file_path = self.path.join(path);

        if !file_path.is_file() {
            return Err(RepositoryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read(&file_path)
            .io_context(|| format!("failed to read {:?}", file_path))?;

        Ok(Bytes::from(content))
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> RepositoryResult<()> {
        let file_path = self.path.join(path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .io_context(|| format!("failed to create directory {:?}", parent))?;
        }
        std::fs::write(&file_path, content)
            .io_context(|| format!("failed to write {:?}", file_path))?;

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn remove(&mut self, path: &Path) -> RepositoryResult<()> {
        let file_path = self.path.join(path);

        match std::fs::remove_file(&file_path) {
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            result => result.io_context(|| format!("failed to remove {:?}", file_path))?,
        }

        debug!(path = %path.display(), "removed file");
        self.prune_empty_parents(path)
    }

    fn files_under(&self, path: &Path) -> RepositoryResult<Vec<PathBuf>> {
        let root_path = self.path.join(path);

        if root_path.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        if !root_path.is_dir() {
            return Err(RepositoryError::FileNotFound(path.to_path_buf()));
        }

        let mut files = WalkDir::new(&root_path)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != METADATA_DIR)
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .ok()
                    .map(Path::to_path_buf)
            })
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }
}

/// Work tree that lives entirely in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryWorkTree {
    files: BTreeMap<PathBuf, Bytes>,
}

impl MemoryWorkTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Bytes>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Bytes> {
        self.files.get(path.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.files.contains_key(path.as_ref())
    }
}

impl WorkTree for MemoryWorkTree {
    fn read(&self, path: &Path) -> RepositoryResult<Bytes> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| RepositoryError::FileNotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, content: &[u8]) -> RepositoryResult<()> {
        self.files
            .insert(path.to_path_buf(), Bytes::copy_from_slice(content));
        Ok(())
    }

    fn remove(&mut self, path: &Path) -> RepositoryResult<()> {
        self.files.remove(path);
        Ok(())
    }

    fn files_under(&self, path: &Path) -> RepositoryResult<Vec<PathBuf>> {
        let files = self
            .files
            .keys()
            .filter(|file| file.starts_with(path))
            .cloned()
            .collect::<Vec<_>>();

        if files.is_empty() {
            return Err(RepositoryError::FileNotFound(path.to_path_buf()));
        }

        Ok(files)
    }
}
