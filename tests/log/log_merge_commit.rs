use crate::common::branch_oid;
use crate::common::command::{commit_file, head_oid, init_repository_dir, run_minibit_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn log_shows_merge_parents_and_follows_first_parent(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    let ours = commit_file(dir, "x.txt", "x", "Add x");

    run_minibit_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "y.txt", "y", "Add y");
    let theirs = branch_oid(dir, "feature");

    run_minibit_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_minibit_command(dir, &["merge", "feature"])
        .assert()
        .success();
    let merged = head_oid(dir);

    run_minibit_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "commit {merged} (HEAD -> master)\nMerge: {} {}\n",
            &ours[..7],
            &theirs[..7]
        )))
        .stdout(predicate::str::contains("    Merged branch feature\n"))
        .stdout(predicate::str::contains("Add y").not());
}
