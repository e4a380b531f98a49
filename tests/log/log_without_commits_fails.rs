use crate::common::command::{repository_dir, run_minibit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn log_without_commits_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();

    run_minibit_command(dir, &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HEAD does not point at a commit yet"));
}
