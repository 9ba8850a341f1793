// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal event handling.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Input;
use crate::error::{Error, Result};

impl From<KeyEvent> for Input {
    fn from(key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Input::Ignored;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Input::Quit,
                _ => Input::Ignored,
            };
        }
        match key.code {
            KeyCode::Esc => Input::Quit,
            KeyCode::Enter => Input::Enter,
            KeyCode::Backspace => Input::Backspace,
            KeyCode::Char(c) => Input::Letter(c),
            _ => Input::Ignored,
        }
    }
}

/// Block until the next terminal event.
///
/// Returns `None` for events that only need a repaint (resize, focus,
/// paste) and the mapped [`Input`] for key events.
pub fn next_input() -> Result<Option<Input>> {
    match event::read().map_err(Error::Terminal)? {
        Event::Key(key) => Ok(Some(key.into())),
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            Ok(None)
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
