//! Merge plan
//!
//! Every path in the union of both snapshots falls in exactly one case:
//!
//! | Status      | Condition                          | Result             |
//! |-------------|------------------------------------|--------------------|
//! | `Unchanged` | same blob on both sides            | keep shared blob   |
//! | `OneSide`   | tracked by only one side           | keep that blob     |
//! | `Conflicted`| tracked by both, blobs differ      | needs a resolution |
//! | `Resolved`  | conflicted, but a resolution staged| keep staged blob   |
//!
//! Computing a plan never touches the repository; the merge command decides
//! what to do with it.

use crate::artifacts::objects::commit::{Snapshot, path_to_string};
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const CURRENT_SUFFIX: &str = "current";
const OTHER_SUFFIX: &str = "other";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStatus {
    Unchanged(ObjectId),
    OneSide(ObjectId),
    Conflicted { ours: ObjectId, theirs: ObjectId },
    Resolved(ObjectId),
}

impl PathStatus {
    /// Blob the merged snapshot keeps, `None` while conflicted
    pub fn resolution(&self) -> Option<&ObjectId> {
        match self {
            PathStatus::Unchanged(oid) | PathStatus::OneSide(oid) | PathStatus::Resolved(oid) => {
                Some(oid)
            }
            PathStatus::Conflicted { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    paths: BTreeMap<PathBuf, PathStatus>,
}

impl MergePlan {
    pub fn compute(ours: &Snapshot, theirs: &Snapshot) -> Self {
        let mut paths = BTreeMap::new();

        for (path, our_oid) in ours {
            let status = match theirs.get(path) {
                Some(their_oid) if their_oid == our_oid => PathStatus::Unchanged(our_oid.clone()),
                Some(their_oid) => PathStatus::Conflicted {
                    ours: our_oid.clone(),
                    theirs: their_oid.clone(),
                },
                None => PathStatus::OneSide(our_oid.clone()),
            };
            paths.insert(path.clone(), status);
        }

        for (path, their_oid) in theirs {
            paths
                .entry(path.clone())
                .or_insert_with(|| PathStatus::OneSide(their_oid.clone()));
        }

        MergePlan { paths }
    }

    /// Treat staged entries of conflicted paths as their resolution
    pub fn with_resolutions(mut self, staged: &Snapshot) -> Self {
        for (path, status) in self.paths.iter_mut() {
            if let PathStatus::Conflicted { .. } = status
                && let Some(staged_oid) = staged.get(path)
            {
                *status = PathStatus::Resolved(staged_oid.clone());
            }
        }

        self
    }

    pub fn status(&self, path: &Path) -> Option<&PathStatus> {
        self.paths.get(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = (&PathBuf, &PathStatus)> {
        self.paths.iter()
    }

    /// Paths that still need a resolution, with both competing blobs
    pub fn conflicts(&self) -> Vec<(&PathBuf, &ObjectId, &ObjectId)> {
        self.paths
            .iter()
            .filter_map(|(path, status)| match status {
                PathStatus::Conflicted { ours, theirs } => Some((path, ours, theirs)),
                _ => None,
            })
            .collect()
    }

    pub fn has_conflicts(&self) -> bool {
        self.paths
            .values()
            .any(|status| matches!(status, PathStatus::Conflicted { .. }))
    }

    pub fn resolved_paths(&self) -> Vec<&PathBuf> {
        self.paths
            .iter()
            .filter(|(_, status)| matches!(status, PathStatus::Resolved(_)))
            .map(|(path, _)| path)
            .collect()
    }

    /// First conflicted path whose conflict file would land on a tracked path
    ///
    /// A path counts as tracked when either side or the index holds it.
    pub fn artifact_clash(&self, staged: &Snapshot) -> Option<(PathBuf, PathBuf)> {
        self.conflicts().into_iter().find_map(|(path, _, _)| {
            let (current, other) = conflict_artifacts(path);
            [current, other]
                .into_iter()
                .find(|artifact| {
                    self.paths.contains_key(artifact) || staged.contains_key(artifact)
                })
                .map(|artifact| (path.clone(), artifact))
        })
    }

    /// Merged snapshot, `None` while any path is conflicted
    pub fn snapshot(&self) -> Option<Snapshot> {
        self.paths
            .iter()
            .map(|(path, status)| Some((path.clone(), status.resolution()?.clone())))
            .collect()
    }
}

/// Files holding our and their version of a conflicted path
pub fn conflict_artifacts(path: &Path) -> (PathBuf, PathBuf) {
    let path = path_to_string(path);

    (
        PathBuf::from(format!("{path}.{CURRENT_SUFFIX}")),
        PathBuf::from(format!("{path}.{OTHER_SUFFIX}")),
    )
}
