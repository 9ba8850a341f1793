// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use termcolor::Color;
use yare::parameterized;

// NOTE: NO_COLOR and COLOR are exercised end to end in tests/specs.rs
// because env var manipulation is not safe in parallel unit tests.

#[parameterized(
    no_color_wins = { true, true, true, ColorChoice::Never },
    color_forces = { false, true, false, ColorChoice::Always },
    tty_auto = { false, false, true, ColorChoice::Auto },
    pipe_never = { false, false, false, ColorChoice::Never },
)]
fn resolves_color_choice(no_color: bool, color: bool, is_tty: bool, expected: ColorChoice) {
    assert_eq!(resolve_color_from(no_color, color, is_tty), expected);
}

#[test]
fn correct_is_green_bold() {
    let spec = scheme::mark(Mark::Correct);
    assert_eq!(spec.fg(), Some(&Color::Green));
    assert!(spec.bold());
}

#[test]
fn present_is_yellow_bold() {
    let spec = scheme::mark(Mark::Present);
    assert_eq!(spec.fg(), Some(&Color::Yellow));
    assert!(spec.bold());
}

#[test]
fn absent_is_dimmed() {
    let spec = scheme::mark(Mark::Absent);
    assert_eq!(spec.fg(), None);
    assert!(spec.dimmed());
}

#[test]
fn squares_match_marks() {
    assert_eq!(mark_square(Mark::Correct), "🟩");
    assert_eq!(mark_square(Mark::Present), "🟨");
    assert_eq!(mark_square(Mark::Absent), "⬛");
}
