use crate::common::command::{commit_file, head_oid, init_repository_dir, run_minibit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_medium_format_lists_history_newest_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_oid(dir);
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();
    let second = commit_file(dir, "4.txt", "four", "Add four\n\nWith details");

    let expected = format!(
        "commit {second} (HEAD -> master)\n\
         Date:   Sun Jan 1 12:00:00 2023 +0000\n\
         \n    Add four\n    \n    With details\n\
         \n\
         commit {first} (feature)\n\
         Date:   Sun Jan 1 12:00:00 2023 +0000\n\
         \n    Initial commit\n"
    );

    run_minibit_command(dir, &["log"])
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
fn log_abbrev_commit_shortens_ids(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let head = head_oid(dir);
    run_minibit_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_minibit_command(dir, &["log", "--abbrev-commit"])
        .assert()
        .success()
        .stdout(format!(
            "commit {} (HEAD -> master, feature)\nDate:   Sun Jan 1 12:00:00 2023 +0000\n\n    Initial commit\n",
            &head[..7]
        ));
}
