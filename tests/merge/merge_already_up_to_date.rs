use crate::common::command::{head_oid, init_repository_dir, run_minibit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_branch_at_the_same_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_oid(dir);
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_minibit_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Already up to date.\n");

    assert_eq!(head_oid(dir), head);
}
