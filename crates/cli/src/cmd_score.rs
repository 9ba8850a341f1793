// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordle score` command implementation.

use std::io;

use anyhow::Result;
use termcolor::{StandardStream, WriteColor};

use wordle::cli::ScoreArgs;
use wordle::color::{self, mark_square, scheme};
use wordle::error::{Error, ExitCode};
use wordle::game::{Mark, WORD_LEN, score};
use wordle::words::is_word;

pub fn run(args: &ScoreArgs) -> Result<ExitCode> {
    for (name, word) in [("guess", &args.guess), ("answer", &args.answer)] {
        if !is_word(word) {
            return Err(Error::Argument(format!(
                "{name} must be {WORD_LEN} ASCII letters, got `{word}`"
            ))
            .into());
        }
    }

    let marks = score(&args.guess, &args.answer);
    let mut stdout = StandardStream::stdout(color::resolve_color());
    write_score(&mut stdout, &args.guess, &marks)?;
    Ok(ExitCode::Success)
}

/// Write `🟩🟨⬛⬛⬛  CRANE`, with letters colored by mark.
fn write_score(out: &mut impl WriteColor, guess: &str, marks: &[Mark]) -> io::Result<()> {
    for &mark in marks {
        write!(out, "{}", mark_square(mark))?;
    }
    write!(out, "  ")?;
    for (letter, &mark) in guess.chars().zip(marks) {
        out.set_color(&scheme::mark(mark))?;
        write!(out, "{}", letter.to_ascii_uppercase())?;
    }
    out.reset()?;
    writeln!(out)
}

#[cfg(test)]
#[path = "cmd_score_tests.rs"]
mod tests;
