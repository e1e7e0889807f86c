use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for kitrubric
pub fn kitrubric() -> Command {
    cargo_bin_cmd!("kitrubric")
}

/// Write a document into `dir` and return its path
#[allow(dead_code)]
pub fn write_doc(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write test document");
    path
}
