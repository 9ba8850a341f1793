// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Game rules and board state.

use crate::words::Words;

/// Letters per word.
pub const WORD_LEN: usize = 5;

/// Guesses allowed per round.
pub const MAX_GUESSES: usize = 6;

/// Feedback for one letter of a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Letter does not occur (or all occurrences are already accounted for).
    Absent,
    /// Letter occurs elsewhere in the answer.
    Present,
    /// Letter is in the right place.
    Correct,
}

/// A single letter tile. Letters are stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Pending(char),
    Scored(char, Mark),
}

impl Tile {
    /// The letter to display, if any.
    pub fn letter(&self) -> Option<char> {
        match *self {
            Tile::Empty => None,
            Tile::Pending(c) | Tile::Scored(c, _) => Some(c),
        }
    }

    /// The mark of a scored tile.
    pub fn mark(&self) -> Option<Mark> {
        match *self {
            Tile::Scored(_, mark) => Some(mark),
            _ => None,
        }
    }
}

/// One guess row of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    tiles: [Tile; WORD_LEN],
    /// Index of the next tile to fill. `None` for rows that are not accepting input.
    cursor: Option<usize>,
}

impl Row {
    fn empty() -> Self {
        Self {
            tiles: [Tile::Empty; WORD_LEN],
            cursor: None,
        }
    }

    pub fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.tiles
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The lowercase word spelled by this row, once every tile holds a letter.
    pub fn word(&self) -> Option<String> {
        self.tiles
            .iter()
            .map(|tile| tile.letter().map(|c| c.to_ascii_lowercase()))
            .collect()
    }

    fn accept_letter(&mut self, letter: char) -> bool {
        match self.cursor {
            Some(i) if i < WORD_LEN => {
                self.tiles[i] = Tile::Pending(letter);
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    fn delete_letter(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.tiles[i - 1] = Tile::Empty;
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Freeze the row with the marks for `answer`. Requires a complete row.
    fn finalize(&mut self, guess: &str, answer: &str) {
        for (tile, mark) in self.tiles.iter_mut().zip(score(guess, answer)) {
            if let Tile::Pending(c) = *tile {
                *tile = Tile::Scored(c, mark);
            }
        }
        self.cursor = None;
    }
}

/// Mark each letter of `guess` against `answer`.
///
/// Exact matches are marked first. Remaining letters become `Present`
/// left to right while the answer still has unmatched copies of that
/// letter, and `Absent` after that. Both words are compared
/// case-insensitively. Positions past the end of the shorter word are
/// `Absent`.
pub fn score(guess: &str, answer: &str) -> [Mark; WORD_LEN] {
    let pairs = || {
        guess
            .bytes()
            .zip(answer.bytes())
            .take(WORD_LEN)
            .map(|(g, a)| (g.to_ascii_lowercase(), a.to_ascii_lowercase()))
    };
    let mut marks = [Mark::Absent; WORD_LEN];

    // Answer letters not yet claimed by a Correct or Present mark.
    let mut unmatched = [0u8; 26];

    for (mark, (g, a)) in marks.iter_mut().zip(pairs()) {
        if g == a {
            *mark = Mark::Correct;
        } else if a.is_ascii_lowercase() {
            unmatched[usize::from(a - b'a')] += 1;
        }
    }

    for (mark, (g, _)) in marks.iter_mut().zip(pairs()) {
        if *mark == Mark::Correct || !g.is_ascii_lowercase() {
            continue;
        }
        let slot = &mut unmatched[usize::from(g - b'a')];
        if *slot > 0 {
            *slot -= 1;
            *mark = Mark::Present;
        }
    }

    marks
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Game state for a single round.
///
/// Input handlers return true when the board or message changed and the
/// screen should be repainted.
#[derive(Debug, Clone)]
pub struct Game {
    rows: [Row; MAX_GUESSES],
    current_row: usize,
    answer: String,
    message: Option<String>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a round with the given answer.
    pub fn new(answer: impl Into<String>) -> Self {
        let mut rows = [Row::empty(); MAX_GUESSES];
        rows[0].cursor = Some(0);

        Self {
            rows,
            current_row: 0,
            answer: answer.into().to_ascii_lowercase(),
            message: None,
            outcome: None,
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Drop the message, reporting whether one was showing.
    fn take_message(&mut self) -> bool {
        self.message.take().is_some()
    }

    pub fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }

    /// Index of the row taking input (or the last row played once the round is over).
    pub fn current_row(&self) -> usize {
        self.current_row
    }

    /// Type a letter into the active row. Non-letters are ignored.
    pub fn accept_letter(&mut self, letter: char) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let cleared = self.take_message();
        if !letter.is_ascii_alphabetic() {
            return cleared;
        }
        self.rows[self.current_row].accept_letter(letter.to_ascii_uppercase()) || cleared
    }

    /// Erase the last letter of the active row.
    pub fn delete_letter(&mut self) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let cleared = self.take_message();
        self.rows[self.current_row].delete_letter() || cleared
    }

    /// Submit the active row as a guess.
    pub fn submit_guess(&mut self, words: &Words) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let cleared = self.take_message();

        let Some(guess) = self.rows[self.current_row].word() else {
            return cleared;
        };

        if !words.is_valid_guess(&guess) {
            self.set_message(format!("'{guess}' is not a valid word!"));
            return true;
        }

        self.rows[self.current_row].finalize(&guess, &self.answer);
        tracing::debug!(row = self.current_row, %guess, "guess scored");

        if guess == self.answer {
            self.outcome = Some(Outcome::Won);
        } else if self.current_row + 1 < MAX_GUESSES {
            self.current_row += 1;
            self.rows[self.current_row].cursor = Some(0);
        } else {
            self.outcome = Some(Outcome::Lost);
        }
        true
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
