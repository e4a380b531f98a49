#![allow(dead_code)]

pub mod file;

use std::path::Path;
use walkdir::WalkDir;

pub const METADATA_DIR: &str = ".minibit";

/// Read a file of the repository metadata directory, trimmed
pub fn read_metadata_file(dir: &Path, relative: &str) -> String {
    let path = dir.join(METADATA_DIR).join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
        .trim()
        .to_string()
}

/// Commit a branch points at
pub fn branch_oid(dir: &Path, branch: &str) -> String {
    read_metadata_file(dir, &format!("refs/heads/{branch}"))
}

/// Number of objects stored in the repository
pub fn object_count(dir: &Path) -> usize {
    WalkDir::new(dir.join(METADATA_DIR).join("objects"))
        .min_depth(2)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .count()
}
