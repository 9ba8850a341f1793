// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles config.toml parsing with version validation and unknown key warnings.
//!
//! ```toml
//! version = 1
//!
//! [theme]
//! flavor = "mocha"
//!
//! [theme.colors]
//! cell_correct = "#a6e3a1"
//!
//! [words]
//! answers = "answers.txt"
//! guesses = "guesses.txt"
//! ```

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::theme::{ColorOverrides, Flavor, SLOT_NAMES, Theme};
use crate::words::Words;

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

const KNOWN_KEYS: &[&str] = &["version", "theme", "words"];
const KNOWN_THEME_KEYS: &[&str] = &["flavor", "colors"];
const KNOWN_WORDS_KEYS: &[&str] = &["answers", "guesses"];

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Board colors.
    pub theme: ThemeConfig,

    /// Word list overrides.
    pub words: WordsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            theme: ThemeConfig::default(),
            words: WordsConfig::default(),
        }
    }
}

/// `[theme]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    pub flavor: Flavor,
    pub colors: ColorOverrides,
}

impl ThemeConfig {
    /// Build the theme, with an optional flavor taking precedence over the config.
    pub fn resolve(&self, flavor: Option<Flavor>) -> Result<Theme> {
        Theme::from(flavor.unwrap_or(self.flavor)).with_overrides(&self.colors)
    }
}

/// `[words]` section. Paths are already resolved against the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordsConfig {
    pub answers: Option<PathBuf>,
    pub guesses: Option<PathBuf>,
}

impl WordsConfig {
    /// Load dictionaries, using the builtin lists where no path is set.
    pub fn load(&self) -> Result<Words> {
        match (&self.answers, &self.guesses) {
            (None, None) => Words::builtin(),
            (answers, guesses) => Words::load(answers.as_deref(), guesses.as_deref()),
        }
    }
}

/// Load config from a file, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Resolve the config file (see [`crate::discovery::resolve_config`]) and load it.
///
/// Returns the path that was loaded, or `None` and the defaults when there is no file.
pub fn load_resolved(explicit: Option<&Path>) -> Result<(Option<PathBuf>, Config)> {
    let config_dirs = crate::discovery::config_dirs();
    let path = crate::discovery::resolve_config(explicit, &config_dirs)?;
    let config = match &path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load(path)?
        }
        None => Config::default(),
    };
    Ok((path, config))
}

/// Parse config from string content.
///
/// `path` is used for error messages and to resolve relative word list paths.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    parse_inner(content, path, &mut |key: &str| warn_unknown_key(path, key))
}

/// Parse config, collecting unknown keys instead of printing them.
pub fn parse_collecting_unknown(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let mut unknown = Vec::new();
    let config = parse_inner(content, path, &mut |key: &str| unknown.push(key.to_string()))?;
    Ok((config, unknown))
}

fn parse_inner(content: &str, path: &Path, on_unknown: &mut dyn FnMut(&str)) -> Result<Config> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let table: toml::Table = toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = match table.get("version") {
        None => return Err(config_error("missing required field: version".to_string())),
        Some(toml::Value::Integer(v)) => *v,
        Some(other) => {
            return Err(config_error(format!(
                "version: expected an integer, got {}",
                other.type_str()
            )));
        }
    };

    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade wordle to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            on_unknown(key.as_str());
        }
    }

    let theme = match table.get("theme") {
        None => ThemeConfig::default(),
        Some(toml::Value::Table(t)) => parse_theme(t, on_unknown).map_err(config_error)?,
        Some(other) => {
            return Err(config_error(format!(
                "theme: expected a table, got {}",
                other.type_str()
            )));
        }
    };

    let base_dir = path.parent().unwrap_or(Path::new(""));
    let words = match table.get("words") {
        None => WordsConfig::default(),
        Some(toml::Value::Table(t)) => parse_words(t, base_dir, on_unknown).map_err(config_error)?,
        Some(other) => {
            return Err(config_error(format!(
                "words: expected a table, got {}",
                other.type_str()
            )));
        }
    };

    Ok(Config {
        version,
        theme,
        words,
    })
}

fn parse_theme(
    t: &toml::Table,
    on_unknown: &mut dyn FnMut(&str),
) -> std::result::Result<ThemeConfig, String> {
    let flavor = match t.get("flavor") {
        None => Flavor::default(),
        Some(value) => value
            .clone()
            .try_into::<Flavor>()
            .map_err(|e| format!("theme.flavor: {}", e.message()))?,
    };

    let mut colors = ColorOverrides::default();
    match t.get("colors") {
        None => {}
        Some(toml::Value::Table(ct)) => {
            for (slot, value) in ct {
                if !SLOT_NAMES.contains(&slot.as_str()) {
                    on_unknown(format!("theme.colors.{slot}").as_str());
                    continue;
                }
                let value = value
                    .as_str()
                    .ok_or_else(|| format!("theme.colors.{slot}: expected a string"))?;
                colors.entries.push((slot.clone(), value.to_string()));
            }
        }
        Some(other) => {
            return Err(format!(
                "theme.colors: expected a table, got {}",
                other.type_str()
            ));
        }
    }

    for key in t.keys() {
        if !KNOWN_THEME_KEYS.contains(&key.as_str()) {
            on_unknown(format!("theme.{key}").as_str());
        }
    }

    Ok(ThemeConfig { flavor, colors })
}

fn parse_words(
    t: &toml::Table,
    base_dir: &Path,
    on_unknown: &mut dyn FnMut(&str),
) -> std::result::Result<WordsConfig, String> {
    let path_field = |key: &str| -> std::result::Result<Option<PathBuf>, String> {
        match t.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(base_dir.join(s))),
            Some(other) => Err(format!(
                "words.{key}: expected a path string, got {}",
                other.type_str()
            )),
        }
    };

    let answers = path_field("answers")?;
    let guesses = path_field("guesses")?;

    for key in t.keys() {
        if !KNOWN_WORDS_KEYS.contains(&key.as_str()) {
            on_unknown(format!("words.{key}").as_str());
        }
    }

    Ok(WordsConfig { answers, guesses })
}

/// Print a warning for an unrecognized config key.
fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "wordle: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
