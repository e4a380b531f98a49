use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::diff::line_diff::{LineChange, diff_lines};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::io::Write;

impl<W: WorkTree> Repository<W> {
    /// Compare two stored blobs line by line
    pub fn diff(&self, old: &str, new: &str) -> RepositoryResult<Vec<LineChange>> {
        let old_text = self.load_blob_text(old)?;
        let new_text = self.load_blob_text(new)?;

        let changes = diff_lines(&old_text, &new_text);
        for change in &changes {
            writeln!(self.writer(), "{change}")?;
        }

        Ok(changes)
    }

    fn load_blob_text(&self, raw_oid: &str) -> RepositoryResult<String> {
        let invalid = || RepositoryError::InvalidDigest(raw_oid.to_string());

        let oid: ObjectId = self.resolve_object_id(raw_oid).map_err(|_| invalid())?;
        let blob = self
            .database()
            .parse_object_as_blob(&oid)?
            .ok_or_else(invalid)?;

        Ok(blob.text())
    }
}
