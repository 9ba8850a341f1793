// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tempfile::tempdir;
use yare::parameterized;

#[test]
fn builtin_answers_load() {
    let words = Words::builtin().unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let answer = words.choose_answer(&mut rng);
    assert_eq!(answer.len(), 5);
    assert!(words.is_valid_guess(answer));
}

#[test]
fn builtin_validates_guesses() {
    let words = Words::builtin().unwrap();
    assert!(words.is_valid_guess("heart"));
    assert!(words.is_valid_guess("HEART"));
    assert!(words.is_valid_guess("bocce"));
    assert!(!words.is_valid_guess("abcde"));
}

#[parameterized(
    slate = { "slate" },
    stare = { "stare" },
    trace = { "trace" },
    grape = { "grape" },
    tiger = { "tiger" },
    knife = { "knife" },
    uncle = { "uncle" },
    wheat = { "wheat" },
    plural = { "books" },
    past_tense = { "aimed" },
)]
fn builtin_accepts_common_words(word: &str) {
    let words = Words::builtin().unwrap();
    assert!(words.is_valid_guess(word), "{word} should be accepted");
}

#[test]
fn builtin_lists_are_full_sized() {
    let words = Words::builtin().unwrap();
    assert!(words.answer_count() > 2000, "answers: {}", words.answer_count());
    assert!(words.guess_count() > 5000, "guesses: {}", words.guess_count());
}

#[test]
fn every_answer_is_a_valid_guess() {
    let words = Words::from_lists("crane\nslate\n", "adieu\n").unwrap();
    assert_eq!(words.answer_count(), 2);
    assert_eq!(words.guess_count(), 3);
    assert!(words.is_valid_guess("crane"));
    assert!(words.is_valid_guess("adieu"));
}

#[test]
fn skips_comments_and_blank_lines() {
    let words = Words::from_lists("# answers\n\n  Crane  \n", "").unwrap();
    assert_eq!(words.answer_count(), 1);
    assert!(words.is_valid_guess("crane"));
}

#[test]
fn duplicate_guesses_count_once() {
    let words = Words::from_lists("crane\n", "crane\ncrane\n").unwrap();
    assert_eq!(words.guess_count(), 1);
}

#[test]
fn seeded_choice_is_reproducible() {
    let words = Words::builtin().unwrap();
    let a = words
        .choose_answer(&mut StdRng::seed_from_u64(42))
        .to_string();
    let b = words
        .choose_answer(&mut StdRng::seed_from_u64(42))
        .to_string();
    assert_eq!(a, b);
}

#[test]
fn rejects_empty_answer_list() {
    let err = Words::from_lists("# nothing here\n", "crane\n").unwrap_err();
    assert!(err.to_string().contains("answer list is empty"));
}

#[parameterized(
    too_short = { "cran" },
    too_long = { "cranes" },
    digit = { "cr4ne" },
    non_ascii = { "crâne" },
    inner_space = { "cr ne" },
)]
fn rejects_malformed_entry(word: &str) {
    let content = format!("slate\n{word}\n");
    let err = Words::from_lists(&content, "").unwrap_err();
    match err {
        Error::Dictionary { list, line, .. } => {
            assert_eq!(list, "answers");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_guess_names_guess_list() {
    let err = Words::from_lists("slate\n", "crane\nx\n").unwrap_err();
    assert!(err.to_string().contains("guesses:2"));
}

#[test]
fn load_reads_files_and_falls_back_to_builtin() {
    let dir = tempdir().unwrap();
    let answers = dir.path().join("answers.txt");
    fs::write(&answers, "zesty\n").unwrap();

    let words = Words::load(Some(&answers), None).unwrap();
    assert_eq!(words.answer_count(), 1);
    assert_eq!(words.choose_answer(&mut StdRng::seed_from_u64(1)), "zesty");
    // Builtin guesses are still accepted.
    assert!(words.is_valid_guess("adieu"));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Words::load(Some(&dir.path().join("missing.txt")), None).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
