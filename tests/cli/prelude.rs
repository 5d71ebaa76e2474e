//! Test helpers for CLI behavior tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the quarry binary.
pub fn quarry_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("quarry"));
    // Ambient settings must not leak into test runs.
    cmd.env_remove("QUARRY_CONFIG");
    cmd.env_remove("QUARRY_LOG");
    cmd
}

/// A working directory that config discovery cannot escape: the `.git`
/// marker makes it a repository root.
pub fn isolated_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    dir
}

/// Write a file under `dir`, creating parent directories as needed.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
