//! Command implementations
//!
//! Commands are split the same way as in git:
//!
//! - `plumbing`: Low-level object access (cat-file, commit object creation)
//! - `porcelain`: User-facing workflows (add, commit, log, branch, checkout, merge, diff)
//!
//! Every command is an `impl Repository` block that prints to the repository
//! writer and returns a typed result, so callers other than the CLI can
//! inspect what happened.

pub mod plumbing;
pub mod porcelain;
