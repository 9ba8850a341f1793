// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wordle in the terminal.

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod event;
pub mod game;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod words;

pub use app::{App, Input};
pub use cli::{Cli, Command, CompletionsArgs, PlayArgs, ScoreArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use game::{Game, MAX_GUESSES, Mark, Outcome, Tile, WORD_LEN, score};
pub use theme::{Flavor, Theme};
pub use words::Words;
