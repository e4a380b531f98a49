//! Repository
//!
//! Ties the object database, the index, the refs and a work tree together and
//! owns the writer every command prints to. Commands are implemented as
//! `impl Repository` blocks under `commands/`.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{WorkTree, Workspace};
use crate::artifacts::objects::commit::{Commit, Snapshot};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{MIN_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use crate::config::Config;
use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use std::cell::{Ref, RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Name of the metadata directory at the root of every repository
pub const METADATA_DIR: &str = ".minibit";

pub struct Repository<W: WorkTree = Workspace> {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    worktree: RefCell<W>,
    refs: Refs,
    config: Config,
}

impl Repository<Workspace> {
    /// Repository rooted at `path`, which need not be initialised yet
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> RepositoryResult<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .io_context(|| format!("failed to create directory {:?}", path))?;
        }
        let path = path
            .canonicalize()
            .io_context(|| format!("failed to resolve {:?}", path))?;

        let workspace = Workspace::new(path.clone().into_boxed_path());
        Ok(Self::with_worktree(&path, workspace, writer))
    }

    /// Find the repository enclosing `path` by walking up its ancestors
    pub fn open(path: &Path, writer: Box<dyn std::io::Write>) -> RepositoryResult<Self> {
        let root = path
            .ancestors()
            .find(|candidate| candidate.join(METADATA_DIR).is_dir())
            .ok_or_else(|| RepositoryError::NotARepository(path.to_path_buf()))?;

        let workspace = Workspace::new(root.to_path_buf().into_boxed_path());
        Ok(Self::with_worktree(root, workspace, writer))
    }
}

impl<W: WorkTree> Repository<W> {
    /// Repository whose metadata lives under `path` and whose files live in `worktree`
    pub fn with_worktree(path: &Path, worktree: W, writer: Box<dyn std::io::Write>) -> Self {
        let metadata_path = path.join(METADATA_DIR);

        Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(Index::new(metadata_path.join("index").into_boxed_path())),
            database: Database::new(metadata_path.join("objects").into_boxed_path()),
            worktree: RefCell::new(worktree),
            refs: Refs::new(metadata_path.into_boxed_path()),
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.path.join(METADATA_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.refs.head_path().is_file()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn worktree(&'_ self) -> Ref<'_, W> {
        self.worktree.borrow()
    }

    pub fn worktree_mut(&'_ self) -> RefMut<'_, W> {
        self.worktree.borrow_mut()
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Commit HEAD points at, `None` on an unborn branch
    pub fn head_commit(&self) -> RepositoryResult<Option<(ObjectId, Commit)>> {
        match self.refs.head_oid()? {
            Some(oid) => {
                let commit = self.load_commit_checked(&oid)?;
                Ok(Some((oid, commit)))
            }
            None => Ok(None),
        }
    }

    /// Snapshot of the HEAD commit, empty on an unborn branch
    pub fn head_snapshot(&self) -> RepositoryResult<Snapshot> {
        Ok(self
            .head_commit()?
            .map(|(_, commit)| commit.into_snapshot())
            .unwrap_or_default())
    }

    /// Load a commit a ref or parent link points at
    ///
    /// Refs and parent links must always name stored commits, so a dangling
    /// one is reported as corrupt history rather than a plain lookup failure.
    pub fn load_commit_checked(&self, oid: &ObjectId) -> RepositoryResult<Commit> {
        if !self.database.contains(oid) {
            return Err(RepositoryError::CorruptHistory {
                commit: oid.to_string(),
                reason: "referenced commit is missing from the object store".to_string(),
            });
        }

        self.database.load_commit(oid)
    }

    /// Resolve a full or abbreviated digest typed by the user
    ///
    /// Abbreviations need at least four characters and must match exactly one
    /// stored object.
    pub fn resolve_object_id(&self, raw: &str) -> RepositoryResult<ObjectId> {
        if raw.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(raw.to_string())?;
            if !self.database.contains(&oid) {
                return Err(RepositoryError::InvalidDigest(raw.to_string()));
            }
            return Ok(oid);
        }

        if raw.len() < MIN_PREFIX_LENGTH {
            return Err(RepositoryError::InvalidDigest(raw.to_string()));
        }

        let mut matches = self.database.find_objects_by_prefix(raw)?;
        match matches.len() {
            1 => Ok(matches.remove(0)),
            _ => Err(RepositoryError::InvalidDigest(raw.to_string())),
        }
    }
}
