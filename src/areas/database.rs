//! Object database
//!
//! Content-addressed storage for blobs and commits. Every object lives at
//! `objects/<first-2-hex>/<remaining-38-hex>` and is written at most once:
//! storing content that is already present is a no-op, which is what gives
//! blobs their deduplication.

use crate::artifacts::objects::MIN_PREFIX_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use bytes::Bytes;
use fake::rand;
use std::io::{BufRead, Cursor, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const TEMP_OBJECT_PREFIX: &str = "tmp-obj-";

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    pub fn load(&self, object_id: &ObjectId) -> RepositoryResult<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.is_file() {
            return Err(RepositoryError::NotFound(object_id.to_string()));
        }

        self.read_object(object_path)
    }

    /// Persist the object unless it is already stored and return its ID
    pub fn store(&self, object: &impl Object) -> RepositoryResult<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists
        if object_path.exists() {
            debug!(oid = %object_id, kind = %object.object_type(), "object already stored");
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| RepositoryError::InvalidDigest(object_id.to_string()))?;
        std::fs::create_dir_all(object_dir).io_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        self.write_object(object_path, object.serialize()?)?;
        debug!(oid = %object_id, kind = %object.object_type(), "stored object");

        Ok(object_id)
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> RepositoryResult<ObjectBox> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(object_reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(
                object_reader,
            )?))),
        }
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> RepositoryResult<Option<Blob>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Blob => Ok(Some(Blob::deserialize(object_reader)?)),
            _ => Ok(None),
        }
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> RepositoryResult<Option<Commit>> {
        let (object_type, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_type {
            ObjectType::Commit => Ok(Some(
                Commit::deserialize(object_reader).map_err(|error| tag_oid(error, object_id))?,
            )),
            _ => Ok(None),
        }
    }

    /// Load a blob's content, failing with `NotFound` if it is absent
    pub fn load_blob(&self, object_id: &ObjectId) -> RepositoryResult<Bytes> {
        self.parse_object_as_blob(object_id)?
            .map(Blob::into_content)
            .ok_or_else(|| RepositoryError::CorruptObject {
                oid: object_id.to_string(),
                reason: "object is not a blob".to_string(),
            })
    }

    /// Load a commit, failing with `NotFound` if it is absent
    pub fn load_commit(&self, object_id: &ObjectId) -> RepositoryResult<Commit> {
        self.parse_object_as_commit(object_id)?
            .ok_or_else(|| RepositoryError::CorruptObject {
                oid: object_id.to_string(),
                reason: "object is not a commit".to_string(),
            })
    }

    /// Whether the ID names a stored commit (and not a blob)
    pub fn is_commit(&self, object_id: &ObjectId) -> RepositoryResult<bool> {
        if !self.contains(object_id) {
            return Ok(false);
        }

        Ok(self.get_object_type(object_id)? == ObjectType::Commit)
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> RepositoryResult<(ObjectType, impl BufRead)> {
        let object_content = self.load(object_id)?;
        let mut object_reader = Cursor::new(object_content);

        let object_type = ObjectType::parse_object_type(&mut object_reader)
            .map_err(|error| tag_oid(error, object_id))?;

        Ok((object_type, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> RepositoryResult<Bytes> {
        let object_content = std::fs::read(&object_path).io_context(|| {
            format!("Unable to read object file {}", object_path.display())
        })?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> RepositoryResult<()> {
        let object_dir = object_path.parent().unwrap_or(&self.path);
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .io_context(|| {
                format!("Unable to open object file {}", temp_object_path.display())
            })?;

        file.write_all(&object_content).io_context(|| {
            format!("Unable to write object file {}", temp_object_path.display())
        })?;
        file.sync_all().io_context(|| {
            format!("Unable to flush object file {}", temp_object_path.display())
        })?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).io_context(|| {
            format!("Unable to rename object file to {}", object_path.display())
        })?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("{TEMP_OBJECT_PREFIX}{}", rand::random::<u32>())
    }

    /// Number of objects currently stored
    pub fn object_count(&self) -> usize {
        WalkDir::new(&self.path)
            .min_depth(2)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                !entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(TEMP_OBJECT_PREFIX)
            })
            .count()
    }

    /// Find all objects whose OID starts with the given prefix.
    ///
    /// Used to resolve abbreviated OIDs to their full form. Prefixes shorter than
    /// four characters or containing non-hex characters never match anything.
    ///
    /// # Returns
    ///
    /// A vector of all matching ObjectIds. If multiple matches are found, all are
    /// returned (indicating an ambiguous prefix).
    pub fn find_objects_by_prefix(&self, prefix: &str) -> RepositoryResult<Vec<ObjectId>> {
        if prefix.len() < MIN_PREFIX_LENGTH || !ObjectId::is_hex(prefix) {
            return Ok(Vec::new());
        }

        let prefix = prefix.to_ascii_lowercase();
        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);

        if !dir_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        let entries = std::fs::read_dir(&dir_path)
            .io_context(|| format!("Unable to list objects in {}", dir_path.display()))?;
        for entry in entries.filter_map(|entry| entry.ok()) {
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(file_prefix)
                && let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
            {
                matches.push(oid);
            }
        }
        matches.sort();

        Ok(matches)
    }

    pub fn get_object_type(&self, object_id: &ObjectId) -> RepositoryResult<ObjectType> {
        let (object_type, _) = self.parse_object_as_bytes(object_id)?;
        Ok(object_type)
    }
}

fn tag_oid(error: RepositoryError, object_id: &ObjectId) -> RepositoryError {
    match error {
        RepositoryError::CorruptObject { reason, .. } => RepositoryError::CorruptObject {
            oid: object_id.to_string(),
            reason,
        },
        other => other,
    }
}
