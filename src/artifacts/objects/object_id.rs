//! Object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings representing SHA-1
//! hashes. They uniquely identify every stored object (blobs and commits).
//!
//! ## Storage
//!
//! Objects are stored in `.minibit/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
///
/// A 40-character hexadecimal string that uniquely identifies an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or `InvalidDigest` if the length or characters are wrong
    pub fn try_parse(id: String) -> RepositoryResult<Self> {
        if id.len() != OBJECT_ID_LENGTH || !Self::is_hex(&id) {
            return Err(RepositoryError::InvalidDigest(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Whether the string only contains hexadecimal digits
    pub fn is_hex(candidate: &str) -> bool {
        !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
