// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Application state: the current round plus everything needed to start the next one.

use rand::rngs::StdRng;

use crate::game::{Game, Outcome};
use crate::theme::Theme;
use crate::words::Words;

/// Footer shown once a round is over.
const RESTART_HINT: &str = "ESC: quit, ENTER: new";

/// A key press, reduced to what the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Backspace,
    Enter,
    Quit,
    Ignored,
}

pub struct App {
    game: Game,
    words: Words,
    theme: Theme,
    rng: StdRng,
    should_quit: bool,
}

impl App {
    pub fn new(words: Words, theme: Theme, mut rng: StdRng) -> Self {
        let game = Game::new(words.choose_answer(&mut rng));
        tracing::info!(answers = words.answer_count(), "new game");
        Self {
            game,
            words,
            theme,
            rng,
            should_quit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Start a new round with a fresh answer.
    pub fn restart(&mut self) {
        self.game = Game::new(self.words.choose_answer(&mut self.rng));
        tracing::info!("game restarted");
    }

    /// Apply one input. Returns true if the screen should be repainted.
    pub fn handle_input(&mut self, input: Input) -> bool {
        if input == Input::Quit {
            self.should_quit = true;
            return false;
        }

        // After the round is over only ENTER (restart) does anything.
        if self.game.outcome().is_some() {
            return match input {
                Input::Enter => {
                    self.restart();
                    true
                }
                _ => false,
            };
        }

        let changed = match input {
            Input::Letter(c) => self.game.accept_letter(c),
            Input::Backspace => self.game.delete_letter(),
            Input::Enter => self.game.submit_guess(&self.words),
            Input::Quit | Input::Ignored => false,
        };

        if changed {
            match self.game.outcome() {
                Some(Outcome::Won) => {
                    tracing::info!(row = self.game.current_row(), "round won");
                    self.game.set_message(format!("You win!\n{RESTART_HINT}"));
                }
                Some(Outcome::Lost) => {
                    tracing::info!("round lost");
                    let message = format!("The word was '{}'.\n{RESTART_HINT}", self.game.answer());
                    self.game.set_message(message);
                }
                None => {}
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
