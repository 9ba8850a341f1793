// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wordle CLI entry point.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use wordle::cli::{Cli, Command, PlayArgs};
use wordle::error::ExitCode;

mod cmd_config;
mod cmd_play;
mod cmd_score;

/// Install the tracing subscriber.
///
/// The game owns the screen, so `play` only logs when a log file is given.
/// Other commands log to stderr.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env("WORDLE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    let interactive = matches!(cli.command, None | Some(Command::Play(_)));

    match &cli.log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        None if interactive => {}
        None => {
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }
    Ok(())
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("wordle: {:#}", e);
            match e.downcast_ref::<wordle::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    match &cli.command {
        None => cmd_play::run(&cli, &PlayArgs::default()),
        Some(Command::Play(args)) => cmd_play::run(&cli, args),
        Some(Command::Score(args)) => cmd_score::run(args),
        Some(Command::Config) => cmd_config::run(&cli),
        Some(Command::Completions(args)) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "wordle",
                &mut std::io::stdout(),
            );
            Ok(ExitCode::Success)
        }
    }
}
