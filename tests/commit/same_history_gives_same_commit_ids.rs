use crate::common::command::{commit_file, run_minibit_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;

#[test]
fn same_history_gives_same_commit_ids() {
    let left = TempDir::new().unwrap();
    let right = TempDir::new().unwrap();

    let histories = [left.path(), right.path()].map(|dir| {
        run_minibit_command(dir, &["init"]).assert().success();
        vec![
            commit_file(dir, "x", "1", "first"),
            commit_file(dir, "y", "2", "second"),
        ]
    });

    assert_eq!(histories[0], histories[1]);
    assert_ne!(histories[0][0], histories[0][1]);
}
