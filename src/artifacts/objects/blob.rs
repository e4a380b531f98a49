//! Blob object
//!
//! Blobs store file content. They contain only the raw file data, without any
//! metadata like the file name (that lives in the commit snapshot).
//!
//! ## Format
//!
//! On disk: `blob <size>\0<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, frame};
use crate::artifacts::objects::object_type::ObjectType;
use crate::errors::{IoContext, RepositoryResult};
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object representing file content
///
/// Each unique file content is stored once, identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn into_content(self) -> Bytes {
        self.content
    }

    /// Content decoded as text, replacing invalid UTF-8 sequences
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

impl Packable for Blob {
    fn serialize(&self) -> RepositoryResult<Bytes> {
        Ok(frame(self.object_type(), &self.content))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> RepositoryResult<Self> {
        // the header has already been read
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .io_context(|| "Unable to read blob content".to_string())?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn display(&self) -> String {
        self.text()
    }
}
