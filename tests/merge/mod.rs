mod merge_already_up_to_date;
mod merge_unknown_branch_fails;

use crate::common::command::{commit_file, run_minibit_command};
use std::path::Path;

/// Fork `feature` off the current commit, then commit `ours` on master and
/// `theirs` on feature, ending back on master
pub fn diverge(dir: &Path, ours: (&str, &str), theirs: (&str, &str)) {
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, ours.0, ours.1, "Change on master");

    run_minibit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, theirs.0, theirs.1, "Change on feature");

    run_minibit_command(dir, &["checkout", "master"])
        .assert()
        .success();
}
