//! Commit object
//!
//! Commits record a full snapshot of the tracked paths at a point in time.
//! They contain:
//! - Parent commit ID(s) (none for the root, two for a merge)
//! - The snapshot: every tracked path with the blob holding its content
//! - A timestamp with timezone
//! - The commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! timestamp <unix-seconds> <timezone>
//! parent <parent-sha>
//! file <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! The object ID is the hash of this whole record, so two commits that differ
//! only in their snapshot (or parents) never share an identity.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Ordered mapping of tracked path to blob ID
pub type Snapshot = BTreeMap<PathBuf, ObjectId>;

const TIMESTAMP_PREFIX: &str = "timestamp ";
const PARENT_PREFIX: &str = "parent ";
const FILE_PREFIX: &str = "file ";

/// Commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent commit IDs (empty for the root commit, two for merge commits)
    parents: Vec<ObjectId>,
    /// Tracked paths and their content
    snapshot: Snapshot,
    timestamp: DateTime<FixedOffset>,
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        snapshot: Snapshot,
        timestamp: DateTime<FixedOffset>,
        message: String,
    ) -> Self {
        Commit {
            parents,
            snapshot,
            timestamp,
            message,
        }
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First parent, the one history traversal follows
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> Snapshot {
        self.snapshot
    }

    pub fn timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
    }

    /// Format timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    fn header_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "{TIMESTAMP_PREFIX}{} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )];
        for parent in &self.parents {
            lines.push(format!("{PARENT_PREFIX}{parent}"));
        }
        for (path, oid) in &self.snapshot {
            lines.push(format!("{FILE_PREFIX}{oid} {}", path_to_string(path)));
        }

        lines
    }

    // Format: "<unix-seconds> <+hhmm>"
    fn parse_timestamp(value: &str) -> RepositoryResult<DateTime<FixedOffset>> {
        let (seconds, timezone) = value
            .split_once(' ')
            .ok_or_else(|| corrupt("invalid timestamp line"))?;
        let seconds = seconds
            .parse::<i64>()
            .map_err(|_| corrupt("invalid timestamp"))?;
        let offset = Self::parse_offset(timezone).ok_or_else(|| corrupt("invalid timezone"))?;

        DateTime::from_timestamp(seconds, 0)
            .map(|utc| utc.with_timezone(&offset))
            .ok_or_else(|| corrupt("timestamp out of range"))
    }

    fn parse_offset(timezone: &str) -> Option<FixedOffset> {
        let sign = match timezone.get(..1)? {
            "+" => 1,
            "-" => -1,
            _ => return None,
        };
        let hours = timezone.get(1..3)?.parse::<i32>().ok()?;
        let minutes = timezone.get(3..5)?.parse::<i32>().ok()?;

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }
}

/// Render a tracked path with `/` separators regardless of platform
pub fn path_to_string(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn corrupt(reason: &str) -> RepositoryError {
    RepositoryError::CorruptObject {
        oid: String::new(),
        reason: format!("invalid commit object: {reason}"),
    }
}

impl Packable for Commit {
    fn serialize(&self) -> RepositoryResult<Bytes> {
        let mut object_content = self.header_lines();
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        Ok(frame(self.object_type(), object_content.as_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> RepositoryResult<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .io_context(|| "Unable to read commit content".to_string())?;
        let mut lines = content.lines();

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix(TIMESTAMP_PREFIX))
            .ok_or_else(|| corrupt("missing timestamp line"))?;
        let timestamp = Self::parse_timestamp(timestamp)?;

        let mut parents = Vec::new();
        let mut snapshot = Snapshot::new();

        // header lines run until the blank separator line
        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            if let Some(parent) = line.strip_prefix(PARENT_PREFIX) {
                parents.push(ObjectId::try_parse(parent.to_string())?);
            } else if let Some(entry) = line.strip_prefix(FILE_PREFIX) {
                let (oid, path) = entry
                    .split_once(' ')
                    .ok_or_else(|| corrupt("invalid file line"))?;
                snapshot.insert(PathBuf::from(path), ObjectId::try_parse(oid.to_string())?);
            } else {
                return Err(corrupt("unexpected header line"));
            }
        }

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parents, snapshot, timestamp, message))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = self.header_lines();
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
