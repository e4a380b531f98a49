//! Merge planning
//!
//! - `merge_plan`: per-path comparison of two snapshots, with no I/O
//!
//! Merges are whole-file: a path changed on both sides is a conflict, there is
//! no common-ancestor or line-level merge.

pub mod merge_plan;
