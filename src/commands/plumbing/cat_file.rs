use crate::areas::repository::Repository;
use crate::areas::workspace::WorkTree;
use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{RepositoryError, RepositoryResult};
use std::io::Write;

impl<W: WorkTree> Repository<W> {
    /// Print a stored object: raw content for blobs, the record for commits
    pub fn cat_file(&self, object_id: &str) -> RepositoryResult<ObjectType> {
        let object_id = self.resolve_object_id(object_id)?;

        let object = match self.database().parse_object(&object_id) {
            Err(RepositoryError::NotFound(_)) => {
                return Err(RepositoryError::InvalidDigest(object_id.to_string()));
            }
            result => result?,
        };

        match &object {
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            ObjectBox::Commit(commit) => writeln!(self.writer(), "{}", commit.display())?,
        }

        Ok(object.object_type())
    }
}
