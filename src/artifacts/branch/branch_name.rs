use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use regex::Regex;
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(INVALID_BRANCH_NAME_REGEX).ok());

pub const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> RepositoryResult<Self> {
        let is_invalid = match INVALID_BRANCH_NAME.as_ref() {
            Some(re) => re.is_match(&name),
            None => true,
        };

        if name.is_empty() || is_invalid {
            Err(RepositoryError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where HEAD points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// Tracks a branch; commits advance the branch
    Symbolic(BranchName),
    /// Pinned to a commit; commits advance HEAD itself
    Detached(ObjectId),
}

impl Head {
    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }

    pub fn branch(&self) -> Option<&BranchName> {
        match self {
            Head::Symbolic(branch) => Some(branch),
            Head::Detached(_) => None,
        }
    }
}

impl std::fmt::Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::Symbolic(branch) => write!(f, "{branch}"),
            Head::Detached(oid) => write!(f, "HEAD detached at {}", oid.to_short_oid()),
        }
    }
}
