//! Version control data structures and algorithms
//!
//! This module contains the types and pure algorithms the commands build on:
//!
//! - `branch`: Branch names and the HEAD model
//! - `checkout`: Planning and applying working tree migrations
//! - `core`: Shared utilities (pager wrapper)
//! - `diff`: Positional line diff of two blobs
//! - `log`: First-parent history traversal
//! - `merge`: Whole-file merge planning
//! - `objects`: Object types (blob, commit) and their identifiers

pub mod branch;
pub mod checkout;
pub mod core;
pub mod diff;
pub mod log;
pub mod merge;
pub mod objects;
