use crate::common::command::{repository_dir, run_minibit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::{METADATA_DIR, object_count};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn adding_a_missing_file_stages_nothing(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("present.txt"), "here".to_string()));

    run_minibit_command(dir, &["add", "present.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "pathspec 'missing.txt' did not match any files",
        ));

    assert!(!dir.join(METADATA_DIR).join("index").exists());
    assert_eq!(object_count(dir), 0);
}

#[rstest]
fn adding_the_metadata_directory_is_rejected(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();

    run_minibit_command(dir, &["add", ".minibit/HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inside the metadata directory"));
}
