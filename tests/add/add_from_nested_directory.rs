use crate::common::command::{init_repository_dir, run_minibit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_from_nested_directory(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a").join("2.txt"), "changed".to_string()));
    write_file(FileSpec::new(dir.join("top.txt"), "top".to_string()));

    run_minibit_command(&dir.join("a"), &["add", "2.txt", "../top.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Staged a/2\.txt with hash [0-9a-f]{40}\nStaged top\.txt with hash [0-9a-f]{40}\n$",
        )
        .unwrap());
}
