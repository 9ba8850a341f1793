// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board color themes.
//!
//! The built-in themes are the four Catppuccin flavors, taken from the
//! `catppuccin` palette. Each of the eight theme slots can be overridden
//! with a `#rrggbb` string from config.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const fn hex(v: u32) -> Self {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("expected `#rrggbb`, got `{s}`"))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("expected `#rrggbb`, got `{s}`"));
        }
        u32::from_str_radix(digits, 16)
            .map(Rgb::hex)
            .map_err(|e| e.to_string())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<catppuccin::Rgb> for Rgb {
    fn from(rgb: catppuccin::Rgb) -> Self {
        Rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        ratatui::style::Color::Rgb(r, g, b)
    }
}

/// Catppuccin flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Latte,
    Frappe,
    Macchiato,
    #[default]
    Mocha,
}

impl Flavor {
    pub fn name(self) -> &'static str {
        match self {
            Flavor::Latte => "latte",
            Flavor::Frappe => "frappe",
            Flavor::Macchiato => "macchiato",
            Flavor::Mocha => "mocha",
        }
    }

    /// The Catppuccin palette colors for this flavor.
    fn colors(self) -> catppuccin::FlavorColors {
        match self {
            Flavor::Latte => catppuccin::PALETTE.latte.colors,
            Flavor::Frappe => catppuccin::PALETTE.frappe.colors,
            Flavor::Macchiato => catppuccin::PALETTE.macchiato.colors,
            Flavor::Mocha => catppuccin::PALETTE.mocha.colors,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors used to draw the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub game_bg: Rgb,
    pub cell_base: Rgb,
    pub cell_row_active: Rgb,
    pub cell_active: Rgb,
    pub cell_in_word: Rgb,
    pub cell_correct: Rgb,
    pub text_base: Rgb,
    pub text_inverted: Rgb,
}

impl From<Flavor> for Theme {
    fn from(flavor: Flavor) -> Self {
        let colors = flavor.colors();
        let base = Rgb::from(colors.base.rgb);
        Self {
            game_bg: base,
            cell_base: colors.surface1.rgb.into(),
            cell_row_active: colors.surface2.rgb.into(),
            cell_active: colors.overlay1.rgb.into(),
            cell_in_word: colors.yellow.rgb.into(),
            cell_correct: colors.green.rgb.into(),
            text_base: colors.text.rgb.into(),
            text_inverted: base,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Flavor::default().into()
    }
}

/// Per-slot color overrides, as written in `[theme.colors]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOverrides {
    pub entries: Vec<(String, String)>,
}

/// Names of the overridable slots.
pub const SLOT_NAMES: &[&str] = &[
    "game_bg",
    "cell_base",
    "cell_row_active",
    "cell_active",
    "cell_in_word",
    "cell_correct",
    "text_base",
    "text_inverted",
];

impl Theme {
    /// Apply overrides on top of this theme.
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> Result<Self> {
        for (slot, value) in &overrides.entries {
            let color: Rgb = value.parse().map_err(|message| Error::Config {
                message: format!("theme.colors.{slot}: {message}"),
                path: None,
            })?;
            *self.slot_mut(slot).ok_or_else(|| Error::Config {
                message: format!("theme.colors.{slot}: unknown color slot"),
                path: None,
            })? = color;
        }
        Ok(self)
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Rgb> {
        Some(match name {
            "game_bg" => &mut self.game_bg,
            "cell_base" => &mut self.cell_base,
            "cell_row_active" => &mut self.cell_row_active,
            "cell_active" => &mut self.cell_active,
            "cell_in_word" => &mut self.cell_in_word,
            "cell_correct" => &mut self.cell_correct,
            "text_base" => &mut self.text_base,
            "text_inverted" => &mut self.text_inverted,
            _ => return None,
        })
    }

    /// Slot name and value pairs, in [`SLOT_NAMES`] order.
    pub fn slots(&self) -> [(&'static str, Rgb); 8] {
        [
            ("game_bg", self.game_bg),
            ("cell_base", self.cell_base),
            ("cell_row_active", self.cell_row_active),
            ("cell_active", self.cell_active),
            ("cell_in_word", self.cell_in_word),
            ("cell_correct", self.cell_correct),
            ("text_base", self.text_base),
            ("text_inverted", self.text_inverted),
        ]
    }
}

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
