use crate::errors::{IoContext, RepositoryError, RepositoryResult};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Commit => "commit",
        }
    }

    /// Consume the `<type> <size>\0` header and return the object type
    pub fn parse_object_type(data_reader: &mut impl BufRead) -> RepositoryResult<ObjectType> {
        let mut object_type = Vec::new();
        data_reader
            .read_until(b' ', &mut object_type)
            .io_context(|| "Unable to read object header".to_string())?;

        let object_type = String::from_utf8_lossy(&object_type);
        let object_type = object_type.trim().to_string();

        // skip the size part
        let mut size = Vec::new();
        data_reader
            .read_until(b'\0', &mut size)
            .io_context(|| "Unable to read object header".to_string())?;

        ObjectType::try_from(object_type.as_str())
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = RepositoryError;

    fn try_from(value: &str) -> RepositoryResult<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "commit" => Ok(ObjectType::Commit),
            _ => Err(RepositoryError::CorruptObject {
                oid: String::new(),
                reason: format!("invalid object type '{value}'"),
            }),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
