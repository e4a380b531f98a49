//! Plumbing commands (low-level operations)
//!
//! ## Commands
//!
//! - `cat-file`: Print a stored object
//! - `write_commit`: Validate parents and store a commit object

pub mod cat_file;
pub mod write_commit;
