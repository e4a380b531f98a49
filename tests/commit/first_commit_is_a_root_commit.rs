use crate::common::command::{head_oid, minibit_commit, repository_dir, run_minibit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn first_commit_is_a_root_commit(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("readme.md"), "# minibit".to_string()));
    run_minibit_command(dir, &["add", "readme.md"])
        .assert()
        .success();

    let output = minibit_commit(dir, "Initial commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[master \(root-commit\) [0-9a-f]{7}\] Initial commit\n$").unwrap())
        .get_output()
        .stdout
        .clone();

    let head = head_oid(dir);
    assert!(String::from_utf8(output).unwrap().contains(&head[..7]));

    run_minibit_command(dir, &["cat-file", "-p", &head])
        .assert()
        .success()
        .stdout(predicate::str::contains("parent ").not())
        .stdout(predicate::str::contains("Initial commit\n\nWith a body"));
}
