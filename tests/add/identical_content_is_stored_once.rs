use crate::common::command::{repository_dir, run_minibit_command, stage_and_get_oid};
use crate::common::file::{FileSpec, write_file};
use crate::common::object_count;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn identical_content_is_stored_once(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_minibit_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("first.txt"), "same".to_string()));
    write_file(FileSpec::new(dir.join("second.txt"), "same".to_string()));

    let first_oid = stage_and_get_oid(dir, "first.txt");
    assert_eq!(object_count(dir), 1);

    let second_oid = stage_and_get_oid(dir, "second.txt");
    assert_eq!(first_oid, second_oid);
    assert_eq!(object_count(dir), 1);

    // restaging unchanged content does not grow the store either
    stage_and_get_oid(dir, "first.txt");
    assert_eq!(object_count(dir), 1);
}
