// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordle play` command implementation.

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wordle::app::App;
use wordle::cli::{Cli, PlayArgs};
use wordle::error::ExitCode;
use wordle::terminal::TerminalSession;
use wordle::{config, event, ui};

pub fn run(cli: &Cli, args: &PlayArgs) -> Result<ExitCode> {
    let (path, config) = config::load_resolved(cli.config.as_deref())?;
    let theme = config.theme.resolve(args.flavor)?;
    let words = config.words.load()?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    tracing::info!(
        config = ?path,
        seed = ?args.seed,
        answers = words.answer_count(),
        guesses = words.guess_count(),
        "starting wordle"
    );

    let mut app = App::new(words, theme, rng);
    let mut session = TerminalSession::enter()?;

    let mut repaint = true;
    while !app.should_quit() {
        if repaint {
            session.draw(|frame| ui::draw(frame, app.game(), app.theme()))?;
        }
        repaint = match event::next_input()? {
            Some(input) => app.handle_input(input),
            // Resize and other non-key events.
            None => true,
        };
    }

    Ok(ExitCode::Success)
}
