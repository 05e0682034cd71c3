use std::fs;
use std::path::Path;

use tempdir::TempDir;

use crate::config::RunConfig;
use crate::file_system::absolute_path;
use crate::file_system::FileOperations;
use crate::test_utils::DRY_FS;
use crate::test_utils::REAL_FS;

#[test]
fn write_then_read_utf8_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("deep").join("nested").join("x.txt");

    REAL_FS.write_utf8_truncate(&filepath, "some contents").unwrap();
    assert_eq!(REAL_FS.read_utf8(&filepath).unwrap(), "some contents");
}

#[test]
fn dry_run_writes_nothing_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("x.txt");

    DRY_FS.write_utf8_truncate(&filepath, "some contents").unwrap();
    assert!(!filepath.exists());
}

#[test]
fn try_read_toml_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let filepath = tempdir.path().join("x.toml");

    fs::write(&filepath, "invalid toml goes here").unwrap();
    assert!(REAL_FS.try_read_toml::<RunConfig>(&filepath).is_err());
}

#[test]
fn remove_dir_all_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let dir = tempdir.path().join("doomed");

    // removing a missing directory is a no-op
    REAL_FS.remove_dir_all(&dir).unwrap();

    fs::create_dir_all(dir.join("inner")).unwrap();
    fs::write(dir.join("inner").join("f"), "x").unwrap();

    REAL_FS.remove_dir_all(&dir).unwrap();
    assert!(!dir.exists());
}

#[test]
fn remove_dir_all_dry_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let dir = tempdir.path().join("kept");
    fs::create_dir_all(&dir).unwrap();

    DRY_FS.remove_dir_all(&dir).unwrap();
    assert!(dir.exists());
}

#[test]
fn link_or_copy_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let original = tempdir.path().join("original.raw");
    let link = tempdir.path().join("link.raw");

    fs::write(&original, "raw bytes").unwrap();

    REAL_FS.link_or_copy(&original, &link).unwrap();
    assert_eq!(fs::read(&link).unwrap(), b"raw bytes");

    // putting the same link in place twice is fine
    REAL_FS.link_or_copy(&original, &link).unwrap();
}

#[test]
fn link_or_copy_dry_test() {
    let tempdir = TempDir::new("fs_test").unwrap();
    let original = tempdir.path().join("original.raw");
    let link = tempdir.path().join("link.raw");

    fs::write(&original, "raw bytes").unwrap();

    DRY_FS.link_or_copy(&original, &link).unwrap();
    assert!(!link.exists());
}

#[test]
fn absolute_path_test() {
    let relative = absolute_path(Path::new("somewhere/file.raw")).unwrap();
    assert!(relative.is_absolute());
    assert!(relative.ends_with("somewhere/file.raw"));

    let absolute = absolute_path(Path::new("/data/file.raw")).unwrap();
    assert_eq!(absolute, Path::new("/data/file.raw"));
}
