#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the loc-scout binary.
#[macro_export]
macro_rules! loc_scout {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("loc-scout"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a local loc-scout config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".loc-scout.toml", content);
    }

    /// Creates a file with exactly `lines` newline-terminated lines.
    pub fn create_source_file(&self, relative_path: &str, lines: usize) {
        self.create_file(relative_path, &generate_lines(lines));
    }
}

/// `count` lines of code, each terminated by `\n`.
pub fn generate_lines(count: usize) -> String {
    let mut s = String::new();
    for i in 0..count {
        let _ = writeln!(s, "export const v{i} = {i};");
    }
    s
}
