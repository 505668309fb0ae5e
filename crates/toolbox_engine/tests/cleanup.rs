use std::fs;
use std::path::Path;

use tempfile::TempDir;
use toolbox_engine::{remove_dir_tree, remove_files_recursive, remove_files_shallow};

fn touch(path: &Path) {
    fs::write(path, b"x").unwrap();
}

#[test]
fn recursive_removal_deletes_files_but_keeps_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();
    touch(&dir.path().join("top.tmp"));
    touch(&nested.join("deep.tmp"));

    remove_files_recursive(dir.path());

    assert!(!dir.path().join("top.tmp").exists());
    assert!(!nested.join("deep.tmp").exists());
    assert!(nested.is_dir());
}

#[test]
fn shallow_removal_leaves_subdirectories_untouched() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    touch(&dir.path().join("top.tmp"));
    touch(&sub.join("kept.tmp"));

    remove_files_shallow(dir.path());

    assert!(!dir.path().join("top.tmp").exists());
    assert!(sub.join("kept.tmp").exists());
}

#[test]
fn tree_removal_deletes_the_whole_directory() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("D3DSCache");
    fs::create_dir(&cache).unwrap();
    touch(&cache.join("blob.bin"));

    remove_dir_tree(&cache);

    assert!(!cache.exists());
}

#[test]
fn removal_helpers_tolerate_missing_paths() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    remove_files_recursive(&missing);
    remove_files_shallow(&missing);
    remove_dir_tree(&missing);
}
