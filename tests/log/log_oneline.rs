use crate::common::command::{commit_file, head_oid, init_repository_dir, run_minibit_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_oneline(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_oid(dir);
    let second = commit_file(dir, "4.txt", "four", "Add four");
    let third = commit_file(dir, "5.txt", "five", "Add five\n\nbody is not shown");

    run_minibit_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(format!(
            "{} (HEAD -> master) Add five\n{} Add four\n{} Initial commit\n",
            &third[..7],
            &second[..7],
            &first[..7]
        ));
}

#[rstest]
fn log_oneline_from_detached_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = head_oid(dir);
    let second = commit_file(dir, "4.txt", "four", "Add four");
    run_minibit_command(dir, &["checkout", &first])
        .assert()
        .success();

    run_minibit_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(format!("{} (HEAD) Initial commit\n", &first[..7]));

    run_minibit_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_minibit_command(dir, &["log", "--oneline"])
        .assert()
        .success()
        .stdout(format!(
            "{} (HEAD -> master) Add four\n{} Initial commit\n",
            &second[..7],
            &first[..7]
        ));
}
