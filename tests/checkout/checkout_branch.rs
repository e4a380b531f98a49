use crate::common::command::{commit_file, init_repository_dir, run_minibit_command};
use crate::common::file::read_file;
use crate::common::read_metadata_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_materializes_its_snapshot(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "4.txt", "four", "Add four");
    commit_file(dir, "1.txt", "uno", "Change one");

    run_minibit_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout("Switched to branch 'feature'\n");

    assert_eq!(read_metadata_file(dir, "HEAD"), "ref: refs/heads/feature");
    assert!(!dir.join("4.txt").exists());
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a").join("b").join("3.txt")), "three");

    run_minibit_command(dir, &["checkout", "master"])
        .assert()
        .success()
        .stdout("Switched to branch 'master'\n");

    assert_eq!(read_file(&dir.join("4.txt")), "four");
    assert_eq!(read_file(&dir.join("1.txt")), "uno");
}

#[rstest]
fn checkout_prunes_directories_left_empty(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "docs/guide/intro.md", "hello", "Add docs");

    run_minibit_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert!(!dir.join("docs").exists());
    assert!(dir.join("a").join("b").join("3.txt").is_file());
}

#[rstest]
fn checkout_leaves_untracked_files_alone(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    std::fs::write(dir.join("scratch.txt"), "keep me").unwrap();

    run_minibit_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("scratch.txt")), "keep me");
}

#[rstest]
fn checkout_restores_edited_tracked_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    std::fs::write(dir.join("1.txt"), "scribbled").unwrap();
    std::fs::remove_file(dir.join("a").join("2.txt")).unwrap();

    run_minibit_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a").join("2.txt")), "two");
}
