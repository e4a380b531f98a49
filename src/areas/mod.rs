//! Core repository components
//!
//! This module contains the stateful building blocks of a repository:
//!
//! - `database`: Object database for storing blobs and commits
//! - `index`: Staging area mapping paths to pending blob IDs
//! - `lockfile`: Atomic replacement of refs, HEAD and the index
//! - `refs`: Reference management (branches, HEAD)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working tree access behind the `WorkTree` trait

pub mod database;
pub mod index;
pub mod lockfile;
pub mod refs;
pub mod repository;
pub mod workspace;
