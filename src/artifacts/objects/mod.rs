//! Stored object types and operations
//!
//! Everything the repository persists in its object database is an object
//! identified by the SHA-1 of its serialized form. There are two kinds:
//!
//! - **Blob**: file content (raw bytes)
//! - **Commit**: snapshot of tracked paths with parents, timestamp and message
//!
//! All objects share the on-disk framing `<type> <size>\0<content>`.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest digest prefix accepted when resolving abbreviated object ids
pub const MIN_PREFIX_LENGTH: usize = 4;
