// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and styling for line-oriented output.
//!
//! Detection logic:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. default: color only when stdout is a TTY

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::game::Mark;

/// Resolve color choice from environment variables.
///
/// Priority: NO_COLOR > COLOR > auto-detect
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    resolve_color_from(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("COLOR").is_some(),
        std::io::stdout().is_terminal(),
    )
}

fn resolve_color_from(no_color: bool, color: bool, is_tty: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if color {
        ColorChoice::Always
    } else if is_tty {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Square emoji used when sharing a scored guess.
pub fn mark_square(mark: Mark) -> &'static str {
    match mark {
        Mark::Correct => "🟩",
        Mark::Present => "🟨",
        Mark::Absent => "⬛",
    }
}

/// Color scheme for output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::game::Mark;

    /// Letter color for a scored tile.
    pub fn mark(mark: Mark) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match mark {
            Mark::Correct => spec.set_fg(Some(Color::Green)).set_bold(true),
            Mark::Present => spec.set_fg(Some(Color::Yellow)).set_bold(true),
            Mark::Absent => spec.set_dimmed(true),
        };
        spec
    }

    /// Bold label (e.g., "flavor:").
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
