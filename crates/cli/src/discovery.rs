// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Looks for `wordle/config.toml` under `$XDG_CONFIG_HOME`, then under
//! `$HOME/.config`.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file location relative to the config directory.
const CONFIG_FILE: &str = "wordle/config.toml";

/// Candidate config directories, in lookup order.
pub fn config_dirs() -> Vec<PathBuf> {
    config_dirs_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_dirs_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    // XDG says relative values are invalid and should be ignored.
    let mut dirs: Vec<PathBuf> = xdg_config_home.filter(|p| p.is_absolute()).into_iter().collect();
    if let Some(home_config) = home.map(|h| h.join(".config"))
        && !dirs.contains(&home_config)
    {
        dirs.push(home_config);
    }
    dirs
}

/// Default config path under `config_dir`, whether or not it exists.
pub fn default_config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE)
}

/// Resolve config path from CLI arg, env var, or the default location.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "WORDLE_CONFIG")
/// 2. The first `<dir>/wordle/config.toml` that exists, trying `config_dirs` in order
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, config_dirs: &[PathBuf]) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(config_dirs
            .iter()
            .map(|dir| default_config_path(dir.as_path()))
            .find(|path| path.is_file())),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
