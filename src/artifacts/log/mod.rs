//! Commit history traversal for log
//!
//! - `rev_list`: first-parent walk from a starting commit back to the root
//!
//! The walk is lazy and guards against corrupt graphs: a parent that is
//! missing from the object store, or a commit reached twice, ends the walk
//! with a `CorruptHistory` error instead of looping forever.

pub mod rev_list;
