use crate::common::command::{init_repository_dir, run_minibit_command, stage_and_get_oid};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_unknown_target_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_minibit_command(dir, &["checkout", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "pathspec 'nope' did not match any branch or commit",
        ));

    assert_eq!(read_metadata_file(dir, "HEAD"), "ref: refs/heads/master");
}

#[rstest]
fn checkout_blob_digest_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("blob.txt"), "not a commit".to_string()));
    let blob_oid = stage_and_get_oid(dir, "blob.txt");

    run_minibit_command(dir, &["checkout", &blob_oid])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did not match any branch or commit"));

    assert_eq!(read_metadata_file(dir, "HEAD"), "ref: refs/heads/master");
}
