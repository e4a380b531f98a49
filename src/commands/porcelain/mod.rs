//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `branch`: Create or list branches
//! - `checkout`: Switch branches or detach HEAD at a commit
//! - `merge`: Merge another branch into the current one
//! - `diff`: Compare two blobs line by line

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod merge;
