//! minibit: a minimal local version-control engine
//!
//! Content-addressed blobs and commits, a staging index, branches with a
//! symbolic or detached HEAD, checkout and a whole-file merge.
//!
//! - `areas`: the stateful parts of a repository (object database, index,
//!   refs, working tree) and the [`Repository`] that ties them together
//! - `artifacts`: object types and the pure algorithms (history walk,
//!   checkout migration, merge plan, line diff)
//! - `commands`: one `impl Repository` block per user command
//! - `config`, `errors`: environment configuration and the error type
//!
//! ```no_run
//! use minibit::{Repository, RepositoryResult};
//! use std::path::{Path, PathBuf};
//!
//! fn stage_and_commit(dir: &Path) -> RepositoryResult<()> {
//!     let mut repository = Repository::new(dir, Box::new(std::io::stdout()))?;
//!     repository.init()?;
//!     repository.add(&[PathBuf::from("README.md")])?;
//!     repository.commit("Initial commit")?;
//!     Ok(())
//! }
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;

pub use areas::repository::Repository;
pub use areas::workspace::{MemoryWorkTree, WorkTree, Workspace};
pub use artifacts::diff::line_diff::LineChange;
pub use artifacts::merge::merge_plan::{MergePlan, PathStatus};
pub use commands::porcelain::log::LogOptions;
pub use commands::porcelain::merge::MergeOutcome;
pub use config::Config;
pub use errors::{RepositoryError, RepositoryResult};
