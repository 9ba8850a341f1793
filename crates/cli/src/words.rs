// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Answer and guess dictionaries.
//!
//! Word lists are plain text, one word per line. Blank lines and lines
//! starting with `#` are skipped.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::{Error, Result};
use crate::game::WORD_LEN;

const BUILTIN_ANSWERS: &str = include_str!("../words/answers.txt");
const BUILTIN_GUESSES: &str = include_str!("../words/guesses.txt");

/// Dictionary data: the answer pool and the set of accepted guesses.
#[derive(Debug, Clone)]
pub struct Words {
    answers: Vec<String>,
    valid_guesses: HashSet<String>,
}

impl Words {
    /// Dictionaries compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_lists(BUILTIN_ANSWERS, BUILTIN_GUESSES)
    }

    /// Build dictionaries from the text of an answer list and a guess list.
    ///
    /// Every answer is also accepted as a guess.
    pub fn from_lists(answers: &str, guesses: &str) -> Result<Self> {
        let answers = parse_list("answers", answers)?;
        if answers.is_empty() {
            return Err(Error::Dictionary {
                list: "answers".to_string(),
                line: 0,
                message: "answer list is empty".to_string(),
            });
        }

        let guesses = parse_list("guesses", guesses)?;
        let valid_guesses = answers.iter().cloned().chain(guesses).collect();

        Ok(Self {
            answers,
            valid_guesses,
        })
    }

    /// Load word lists from disk. A list not given falls back to the builtin one.
    pub fn load(answers: Option<&Path>, guesses: Option<&Path>) -> Result<Self> {
        let answers = match answers {
            Some(path) => read_list(path)?,
            None => BUILTIN_ANSWERS.to_string(),
        };
        let guesses = match guesses {
            Some(path) => read_list(path)?,
            None => BUILTIN_GUESSES.to_string(),
        };
        Self::from_lists(&answers, &guesses)
    }

    /// Choose an answer uniformly from the answer pool.
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // from_lists rejects an empty pool, so choose only fails on a bug.
        self.answers.choose(rng).map(String::as_str).unwrap_or_default()
    }

    /// Check if a word is an accepted guess. Case-insensitive.
    pub fn is_valid_guess(&self, word: &str) -> bool {
        self.valid_guesses.contains(&word.to_ascii_lowercase())
    }

    /// Number of possible answers.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of accepted guesses, answers included.
    pub fn guess_count(&self) -> usize {
        self.valid_guesses.len()
    }
}

fn read_list(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a word list, validating every entry.
fn parse_list(list: &str, content: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }

        if !is_word(word) {
            return Err(Error::Dictionary {
                list: list.to_string(),
                line: i + 1,
                message: format!("expected {WORD_LEN} ASCII letters, got `{word}`"),
            });
        }

        words.push(word.to_ascii_lowercase());
    }

    Ok(words)
}

/// True for exactly [`WORD_LEN`] ASCII letters.
pub fn is_word(s: &str) -> bool {
    s.len() == WORD_LEN && s.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
