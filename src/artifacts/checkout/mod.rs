//! Checkout materialization
//!
//! Switching to another commit is planned first and applied second:
//! - `migration`: computes the writes and removals that turn the working tree
//!   of one snapshot into the working tree of another, then applies them
//!   through a `WorkTree`
//!
//! Paths whose blob is the same in both snapshots are left untouched.

pub mod migration;
