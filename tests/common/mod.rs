//! Shared testing utilities for pkgsmith CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `pkgsmith` binary within the
    /// default workspace, with `$HOME` pointed at the isolated directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pkgsmith").expect("Failed to locate pkgsmith binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home());
        cmd
    }

    /// Path to a deployed package inside the work directory.
    pub fn package_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Write a maintainer config into the isolated `$HOME`.
    pub fn write_maintainer_config(&self, content: &str) {
        let dir = self.home().join(".config").join("pkgsmith");
        fs::create_dir_all(&dir).expect("Failed to create config directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write maintainer config");
    }

    /// Assert the unconditional package layout exists for `name`.
    pub fn assert_package_layout(&self, name: &str) {
        let root = self.package_path(name);
        for dir in ["R", "man", "tests/testthat", "vignettes/articles", "data", "inst"] {
            assert!(root.join(dir).is_dir(), "{dir} should exist in {name}");
        }
        assert!(root.join("DESCRIPTION").is_file(), "DESCRIPTION should exist");
        assert!(root.join(".gitignore").is_file(), "core config should be copied");
        assert!(
            root.join(".github/workflows/R-CMD-check.yaml").is_file(),
            "CI workflow should be copied"
        );
        assert!(root.join("tests/testthat.R").is_file(), "test runner should be copied");
    }

    /// Read the generated DESCRIPTION of a deployed package.
    pub fn read_description(&self, name: &str) -> String {
        fs::read_to_string(self.package_path(name).join("DESCRIPTION"))
            .expect("Failed to read DESCRIPTION")
    }
}
