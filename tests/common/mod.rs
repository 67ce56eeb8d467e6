//! Shared helpers for wpdock CLI integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the wpdock binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated site directory with a config file and optional local assets
pub struct TestSite {
    pub root: TempDir,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Create a directory (e.g. a local plugin) under the site root
    pub fn dir(&self, relative: &str) -> &Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Write a file under the site root, creating parents
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_with_env(cwd, args, &[])
    }

    /// Run with extra environment variables set after the scrub
    pub fn run_with_env(&self, cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_wpdock"))
            .current_dir(cwd)
            .env_remove("WPDOCK_CONFIG")
            .env_remove("WPDOCK_STRICT")
            .env_remove("GITHUB_ACTIONS")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .envs(envs.iter().copied())
            .args(args)
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
