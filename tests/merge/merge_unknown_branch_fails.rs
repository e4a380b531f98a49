use crate::common::command::{init_repository_dir, repository_dir, run_minibit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("nope")]
#[case("bad..name")]
fn merge_unknown_branch_fails(init_repository_dir: TempDir, #[case] branch: &str) {
    run_minibit_command(init_repository_dir.path(), &["merge", branch])
        .assert()
        .failure()
        .code(128)
        .stderr(predicate::str::contains(format!("branch '{branch}' not found")));
}

#[rstest]
fn merge_without_commits_fails(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();

    run_minibit_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HEAD does not point at a commit yet"));
}
