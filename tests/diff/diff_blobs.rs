use crate::common::command::{init_repository_dir, run_minibit_command, stage_and_get_oid};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn diff_reports_changed_and_appended_lines(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("old.txt"), "a\nb\nc".to_string()));
    write_file(FileSpec::new(dir.join("new.txt"), "a\nx\nc\nd".to_string()));
    let old = stage_and_get_oid(dir, "old.txt");
    let new = stage_and_get_oid(dir, "new.txt");

    run_minibit_command(dir, &["diff", &old, &new])
        .assert()
        .success()
        .stdout("Line 2\n- b\n+ x\nLine 4\n+ d\n");

    run_minibit_command(dir, &["diff", &new, &old])
        .assert()
        .success()
        .stdout("Line 2\n- x\n+ b\nLine 4\n- d\n");
}

#[rstest]
fn diff_of_identical_blobs_prints_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let oid = stage_and_get_oid(dir, "1.txt");

    run_minibit_command(dir, &["diff", &oid, &oid])
        .assert()
        .success()
        .stdout("");
}
