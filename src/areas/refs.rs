//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>` files holding a commit SHA-1
//! - HEAD: either `ref: refs/heads/<name>` (symbolic) or a raw SHA-1 (detached)
//!
//! A symbolic HEAD whose branch file does not exist yet is *unborn*: the
//! repository has no commits on that branch. Every write goes through
//! [`Lockfile`], so refs are replaced atomically.

use crate::areas::lockfile::{Lockfile, is_bookkeeping_file};
use crate::artifacts::branch::branch_name::{BranchName, Head};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use derive_new::new;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

static SYMREF: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(SYMREF_REGEX).ok());

/// References manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (typically `.minibit`)
    path: Box<Path>,
}

impl Refs {
    /// Read where HEAD currently points
    pub fn read_head(&self) -> RepositoryResult<Head> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .io_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = SYMREF.as_ref().and_then(|re| re.captures(content));
        match symref_match {
            Some(symref_match) => Ok(Head::Symbolic(BranchName::try_parse(
                symref_match[1].to_string(),
            )?)),
            None => Ok(Head::Detached(ObjectId::try_parse(content.to_string()).map_err(
                |_| RepositoryError::CorruptHistory {
                    commit: content.to_string(),
                    reason: "HEAD holds neither a symbolic ref nor a commit id".to_string(),
                },
            )?)),
        }
    }

    pub fn set_head(&self, head: &Head) -> RepositoryResult<()> {
        let raw_ref = match head {
            Head::Symbolic(branch) => format!("ref: refs/heads/{branch}"),
            Head::Detached(oid) => oid.to_string(),
        };

        Lockfile::new(&self.head_path()).write(raw_ref.as_bytes())?;
        debug!(head = %head, "updated HEAD");

        Ok(())
    }

    /// Branch HEAD tracks, `None` when detached
    pub fn current_branch(&self) -> RepositoryResult<Option<BranchName>> {
        Ok(self.read_head()?.branch().cloned())
    }

    /// Commit HEAD resolves to, `None` while the current branch is unborn
    pub fn head_oid(&self) -> RepositoryResult<Option<ObjectId>> {
        match self.read_head()? {
            Head::Symbolic(branch) => self.read_ref(&branch),
            Head::Detached(oid) => Ok(Some(oid)),
        }
    }

    /// Advance whatever HEAD points at to `oid`
    ///
    /// With a symbolic HEAD the branch moves; with a detached HEAD, HEAD itself.
    pub fn update_head(&self, oid: &ObjectId) -> RepositoryResult<()> {
        match self.read_head()? {
            Head::Symbolic(branch) => self.write_ref(&branch, oid),
            Head::Detached(_) => self.set_head(&Head::Detached(oid.clone())),
        }
    }

    pub fn read_ref(&self, branch_name: &BranchName) -> RepositoryResult<Option<ObjectId>> {
        let ref_path = self.heads_path().join(branch_name.as_ref());

        let content = match std::fs::read_to_string(&ref_path) {
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            result => result.io_context(|| format!("failed to read ref file at {:?}", ref_path))?,
        };
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.heads_path().join(branch_name.as_ref()).is_file()
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> RepositoryResult<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchExists(name.to_string()));
        }

        self.write_ref(name, source_oid)
    }

    fn write_ref(&self, name: &BranchName, oid: &ObjectId) -> RepositoryResult<()> {
        let branch_path = self.heads_path().join(name.as_ref());

        Lockfile::new(&branch_path).write(oid.as_ref().as_bytes())?;
        debug!(branch = %name, oid = %oid, "updated ref");

        Ok(())
    }

    pub fn list_branches(&self) -> RepositoryResult<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| !is_bookkeeping_file(&entry.file_name().to_string_lossy()))
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                let name = relative_path
                    .components()
                    .map(|component| component.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");
                BranchName::try_parse(name).ok()
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    /// Map each commit to the branches pointing at it
    pub fn reverse_refs(&self) -> RepositoryResult<HashMap<ObjectId, Vec<BranchName>>> {
        Ok(self
            .list_branches()?
            .into_iter()
            .fold(HashMap::new(), |mut acc, branch| {
                if let Ok(Some(oid)) = self.read_ref(&branch) {
                    acc.entry(oid).or_insert_with(Vec::new).push(branch);
                }
                acc
            }))
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
