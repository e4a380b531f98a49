use crate::common::METADATA_DIR;
use crate::common::command::{repository_dir, run_minibit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("project");

    run_minibit_command(repository_dir.path(), &["init", "project"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty minibit repository in .+\.minibit\n$",
        )?);

    let metadata_dir = target.join(METADATA_DIR);
    assert!(metadata_dir.join("objects").is_dir());
    assert!(metadata_dir.join("refs").join("heads").is_dir());
    assert_eq!(
        std::fs::read_to_string(metadata_dir.join("HEAD"))?,
        "ref: refs/heads/master"
    );

    // the default branch is unborn until the first commit
    assert!(!metadata_dir.join("refs").join("heads").join("master").exists());
    assert!(!metadata_dir.join("index").exists());

    Ok(())
}
