// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crossterm::event::KeyEventState;
use yare::parameterized;

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

#[parameterized(
    letter = { KeyCode::Char('a'), KeyModifiers::NONE, Input::Letter('a') },
    shifted_letter = { KeyCode::Char('A'), KeyModifiers::SHIFT, Input::Letter('A') },
    digit_passes_through = { KeyCode::Char('7'), KeyModifiers::NONE, Input::Letter('7') },
    enter = { KeyCode::Enter, KeyModifiers::NONE, Input::Enter },
    backspace = { KeyCode::Backspace, KeyModifiers::NONE, Input::Backspace },
    escape = { KeyCode::Esc, KeyModifiers::NONE, Input::Quit },
    ctrl_c = { KeyCode::Char('c'), KeyModifiers::CONTROL, Input::Quit },
    ctrl_other = { KeyCode::Char('w'), KeyModifiers::CONTROL, Input::Ignored },
    arrow = { KeyCode::Left, KeyModifiers::NONE, Input::Ignored },
)]
fn maps_key_presses(code: KeyCode, modifiers: KeyModifiers, expected: Input) {
    assert_eq!(Input::from(press(code, modifiers)), expected);
}

#[test]
fn ignores_key_release() {
    let key = KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(Input::from(key), Input::Ignored);
}
