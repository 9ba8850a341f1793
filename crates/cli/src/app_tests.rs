// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::game::MAX_GUESSES;
use rand::SeedableRng;

/// App whose only possible answer is "heart".
fn app() -> App {
    let words = Words::from_lists("heart\n", "earth\nslate\n").unwrap();
    App::new(words, Theme::default(), StdRng::seed_from_u64(0))
}

fn type_word(app: &mut App, word: &str) {
    for c in word.chars() {
        app.handle_input(Input::Letter(c));
    }
}

#[test]
fn quit_sets_flag() {
    let mut app = app();
    assert!(!app.should_quit());
    app.handle_input(Input::Quit);
    assert!(app.should_quit());
}

#[test]
fn letters_and_backspace_edit_row() {
    let mut app = app();
    assert!(app.handle_input(Input::Letter('h')));
    assert!(app.handle_input(Input::Letter('e')));
    assert!(app.handle_input(Input::Backspace));
    assert_eq!(app.game().rows()[0].cursor(), Some(1));
    assert!(!app.handle_input(Input::Ignored));
}

#[test]
fn winning_shows_win_message() {
    let mut app = app();
    type_word(&mut app, "heart");
    assert!(app.handle_input(Input::Enter));
    assert_eq!(app.game().outcome(), Some(Outcome::Won));
    assert_eq!(app.game().message(), Some("You win!\nESC: quit, ENTER: new"));
}

#[test]
fn losing_reveals_answer() {
    let mut app = app();
    for _ in 0..MAX_GUESSES {
        type_word(&mut app, "slate");
        app.handle_input(Input::Enter);
    }
    assert_eq!(app.game().outcome(), Some(Outcome::Lost));
    assert_eq!(
        app.game().message(),
        Some("The word was 'heart'.\nESC: quit, ENTER: new")
    );
}

#[test]
fn finished_round_only_accepts_enter() {
    let mut app = app();
    type_word(&mut app, "heart");
    app.handle_input(Input::Enter);

    assert!(!app.handle_input(Input::Letter('a')));
    assert!(!app.handle_input(Input::Backspace));
    assert!(app.game().message().is_some());

    assert!(app.handle_input(Input::Enter));
    assert_eq!(app.game().outcome(), None);
    assert_eq!(app.game().current_row(), 0);
    assert_eq!(app.game().message(), None);
    assert_eq!(app.game().answer(), "heart");
}

#[test]
fn quit_works_after_round_ends() {
    let mut app = app();
    type_word(&mut app, "heart");
    app.handle_input(Input::Enter);
    app.handle_input(Input::Quit);
    assert!(app.should_quit());
}

#[test]
fn invalid_guess_does_not_end_round() {
    let mut app = app();
    type_word(&mut app, "zzzzz");
    assert!(app.handle_input(Input::Enter));
    assert_eq!(app.game().outcome(), None);
    assert_eq!(app.game().message(), Some("'zzzzz' is not a valid word!"));
}

#[test]
fn same_seed_same_answer() {
    let words = Words::builtin().unwrap();
    let a = App::new(words.clone(), Theme::default(), StdRng::seed_from_u64(9));
    let b = App::new(words, Theme::default(), StdRng::seed_from_u64(9));
    assert_eq!(a.game().answer(), b.game().answer());
}
