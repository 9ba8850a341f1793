// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::theme::Flavor;

/// Wordle in the terminal
#[derive(Parser)]
#[command(name = "wordle")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "WORDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (filter with WORDLE_LOG)
    #[arg(long, global = true, env = "WORDLE_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a game (default)
    Play(PlayArgs),
    /// Score a guess against an answer and print the result
    Score(ScoreArgs),
    /// Show the effective configuration
    Config,
    /// Print a shell completion script
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Default)]
pub struct PlayArgs {
    /// Seed for answer selection (same seed, same answers)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Color flavor, overriding the config file
    #[arg(long, value_enum)]
    pub flavor: Option<Flavor>,
}

#[derive(clap::Args)]
pub struct ScoreArgs {
    /// The guessed word
    pub guess: String,

    /// The answer to score against
    pub answer: String,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
