use crate::common::command::{head_oid, init_repository_dir, run_minibit_command, stage_and_get_oid};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn diff_unknown_digest_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let oid = stage_and_get_oid(dir, "1.txt");
    let missing = "0".repeat(40);

    run_minibit_command(dir, &["diff", &oid, &missing])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("invalid object name '{missing}'")));
}

#[rstest]
fn diff_commit_digest_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let oid = stage_and_get_oid(dir, "1.txt");
    let commit = head_oid(dir);

    run_minibit_command(dir, &["diff", &commit, &oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object name"));
}
