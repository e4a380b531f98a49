use crate::common::command::{repository_dir, run_minibit_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::read_metadata_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

const HELLO_OID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

#[rstest]
fn add_file_prints_digest(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));

    run_minibit_command(dir, &["add", "hello.txt"])
        .assert()
        .success()
        .stdout(predicate::eq(format!(
            "Staged hello.txt with hash {HELLO_OID}\n"
        )));

    assert_eq!(
        read_metadata_file(dir, "index"),
        format!("hello.txt {HELLO_OID}")
    );
    assert!(
        dir.join(".minibit")
            .join("objects")
            .join(&HELLO_OID[..2])
            .join(&HELLO_OID[2..])
            .is_file()
    );
}
