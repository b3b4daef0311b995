//! Test utilities for mojicount integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Absolute path to a file under tests/fixtures
pub fn fixture_path(group: &str, name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(group)
        .join(name)
}

/// Writes `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A small manuscript tree: two chapters, a note, a draft and a source file
pub fn setup_manuscript(root: &Path) {
    write_file(
        root,
        "manuscript/01.md",
        "# 第一章\n\n｜吾輩《わがはい》は猫である。\n名前はまだ無い。\n",
    );
    write_file(
        root,
        "manuscript/02.md",
        "# 第二章\n<!-- 推敲中 -->\nどこで生れたかとんと見当がつかぬ。\n",
    );
    write_file(root, "notes.txt", "メモ\u{3000}です\n");
    write_file(root, "drafts/old.md", "没原稿\n");
    write_file(root, "tool.rs", "fn main() {}\n");
}
