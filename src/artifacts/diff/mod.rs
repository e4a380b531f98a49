//! Blob comparison
//!
//! - `line_diff`: positional line-by-line comparison of two texts
//!
//! Lines are compared at the same index only, there is no alignment of
//! inserted or deleted lines.

pub mod line_diff;
