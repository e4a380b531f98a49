use crate::common::METADATA_DIR;
use crate::common::command::init_repository_dir;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_clears_the_index(init_repository_dir: TempDir) {
    let metadata_dir = init_repository_dir.path().join(METADATA_DIR);

    assert!(!metadata_dir.join("index").exists());
    assert!(metadata_dir.join("refs").join("heads").join("master").is_file());
}
