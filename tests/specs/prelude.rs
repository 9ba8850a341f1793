//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command running the wordle binary, isolated from the user's
/// config, log and color environment.
pub fn wordle_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("wordle"));
    for var in [
        "WORDLE_CONFIG",
        "WORDLE_LOG",
        "WORDLE_LOG_FILE",
        "NO_COLOR",
        "COLOR",
        "XDG_CONFIG_HOME",
        "HOME",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A temporary config directory laid out like `$XDG_CONFIG_HOME`.
pub struct ConfigHome {
    dir: TempDir,
}

impl ConfigHome {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `wordle/config.toml` and return its path.
    pub fn config(&self, content: &str) -> PathBuf {
        self.file("wordle/config.toml", content)
    }

    /// Write a file relative to the config home and return its path.
    pub fn file(&self, path: &str, content: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        full
    }

    /// A wordle command using this directory as `$XDG_CONFIG_HOME`.
    pub fn cmd(&self) -> Command {
        let mut cmd = wordle_cmd();
        cmd.env("XDG_CONFIG_HOME", self.dir.path());
        cmd
    }
}
