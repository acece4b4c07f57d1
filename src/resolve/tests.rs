#![cfg(test)]

use super::*;
use std::fs;
use tempfile::TempDir;

fn libdir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in files {
        fs::write(dir.path().join(name), b"").unwrap();
    }
    dir
}

#[test]
fn import_library_is_preferred() {
    let dir = libdir(&["libfoo.dll.a", "libfoo.a"]);
    let paths = vec![dir.path().to_path_buf()];

    let found = search_library("foo", &paths, false).unwrap();
    assert_eq!(found, dir.path().join("libfoo.dll.a"));
}

#[test]
fn bstatic_picks_the_archive() {
    let dir = libdir(&["libfoo.dll.a", "libfoo.a"]);
    let paths = vec![dir.path().to_path_buf()];

    let found = search_library("foo", &paths, true).unwrap();
    assert_eq!(found, dir.path().join("libfoo.a"));
}

#[test]
fn archive_found_when_no_import_library() {
    let dir = libdir(&["libfoo.a"]);
    let paths = vec![dir.path().to_path_buf()];

    let found = search_library("foo", &paths, false).unwrap();
    assert_eq!(found, dir.path().join("libfoo.a"));
}

#[test]
fn earlier_directory_wins_with_either_form() {
    // An archive in the first directory beats an import library later on;
    // the scan is directory by directory, not form by form.
    let first = libdir(&["libfoo.a"]);
    let second = libdir(&["libfoo.dll.a"]);
    let paths = vec![first.path().to_path_buf(), second.path().to_path_buf()];

    let found = search_library("foo", &paths, false).unwrap();
    assert_eq!(found, first.path().join("libfoo.a"));
}

#[test]
fn exact_name_bypasses_the_convention() {
    let dir = libdir(&["custom.lib", "libcustom.lib.a"]);
    let paths = vec![dir.path().to_path_buf()];

    let found = search_library(":custom.lib", &paths, false).unwrap();
    assert_eq!(found, dir.path().join("custom.lib"));
}

#[test]
fn exact_name_miss_reports_full_reference() {
    let dir = libdir(&[]);
    let paths = vec![dir.path().to_path_buf()];

    let err = search_library(":missing.lib", &paths, false).unwrap_err();
    assert_eq!(err.to_string(), "unable to find library -l:missing.lib");
}

#[test]
fn not_found_anywhere() {
    let empty1 = libdir(&[]);
    let empty2 = libdir(&[]);
    let paths = vec![empty1.path().to_path_buf(), empty2.path().to_path_buf()];

    let err = search_library("bar", &paths, false).unwrap_err();
    assert_eq!(err.to_string(), "unable to find library -lbar");
}

#[test]
fn no_search_paths_at_all() {
    let err = search_library("bar", &[], false).unwrap_err();
    assert!(matches!(err, Error::NotFound(name) if name == "bar"));
}
