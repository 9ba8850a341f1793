// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `wordle config` command implementation.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use termcolor::{StandardStream, WriteColor};

use wordle::cli::Cli;
use wordle::color::{self, scheme};
use wordle::config;
use wordle::error::ExitCode;

pub fn run(cli: &Cli) -> Result<ExitCode> {
    let (path, config) = config::load_resolved(cli.config.as_deref())?;
    let theme = config.theme.resolve(None)?;
    let words = config.words.load()?;

    let mut out = StandardStream::stdout(color::resolve_color());

    label(&mut out, "config")?;
    match &path {
        Some(path) => {
            out.set_color(&scheme::path())?;
            writeln!(out, "{}", path.display())?;
            out.reset()?;
        }
        None => writeln!(out, "none (using defaults)")?,
    }

    label(&mut out, "flavor")?;
    writeln!(out, "{}", config.theme.flavor)?;

    label(&mut out, "answers")?;
    writeln!(
        out,
        "{} ({} words)",
        source(config.words.answers.as_deref()),
        words.answer_count()
    )?;

    label(&mut out, "guesses")?;
    writeln!(
        out,
        "{} ({} words)",
        source(config.words.guesses.as_deref()),
        words.guess_count()
    )?;

    label(&mut out, "colors")?;
    writeln!(out)?;
    for (name, rgb) in theme.slots() {
        writeln!(out, "  {name} = {rgb}")?;
    }

    Ok(ExitCode::Success)
}

fn label(out: &mut impl WriteColor, name: &str) -> std::io::Result<()> {
    out.set_color(&scheme::label())?;
    write!(out, "{name}:")?;
    out.reset()?;
    write!(out, " ")
}

fn source(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    }
}
