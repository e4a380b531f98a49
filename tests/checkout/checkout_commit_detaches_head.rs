use crate::common::command::{commit_file, head_oid, init_repository_dir, run_minibit_command};
use crate::common::read_metadata_file;
use crate::common::branch_oid;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::full_digest(40)]
#[case::short_prefix(7)]
fn checkout_commit_detaches_head(init_repository_dir: TempDir, #[case] prefix_len: usize) {
    let dir = init_repository_dir.path();
    let first = head_oid(dir);
    commit_file(dir, "4.txt", "four", "Add four");

    run_minibit_command(dir, &["checkout", &first[..prefix_len]])
        .assert()
        .success()
        .stdout(predicate::str::contains("detached HEAD"))
        .stdout(predicate::str::ends_with(format!(
            "HEAD is now at {} Initial commit\n",
            &first[..7]
        )));

    assert_eq!(read_metadata_file(dir, "HEAD"), first);
    assert!(!dir.join("4.txt").exists());
    assert_ne!(branch_oid(dir, "master"), first);
}

#[rstest]
fn branch_name_wins_over_commit_prefix(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_oid(dir);
    let prefix = &first[..7];
    run_minibit_command(dir, &["branch", prefix])
        .assert()
        .success();

    run_minibit_command(dir, &["checkout", prefix])
        .assert()
        .success()
        .stdout(format!("Switched to branch '{prefix}'\n"));

    assert_eq!(
        read_metadata_file(dir, "HEAD"),
        format!("ref: refs/heads/{prefix}")
    );
}
