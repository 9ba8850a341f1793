// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board rendering.
//!
//! Each tile is drawn as a 5×3 block using half-block glyphs:
//!
//! ```text
//!  ▄▄▄
//!  █A█
//!  ▀▀▀
//! ```
//!
//! The two rows beneath the board hold the status message.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::game::{Game, MAX_GUESSES, Mark, Tile, WORD_LEN};
use crate::layout::centered_origin;
use crate::theme::Theme;

/// Size (w, h) of a single tile.
pub const TILE_SIZE: (u16, u16) = (5, 3);

/// Message lines drawn beneath the board.
const MESSAGE_LINES: u16 = 2;

/// Size (w, h) of the board, including the message lines.
pub const BOARD_SIZE: (u16, u16) = (
    TILE_SIZE.0 * WORD_LEN as u16,
    TILE_SIZE.1 * MAX_GUESSES as u16 + MESSAGE_LINES,
);

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, game: &Game, theme: &Theme) {
    let area = frame.area();
    render(game, theme, area, frame.buffer_mut());
}

/// Render the screen into `buf`.
pub fn render(game: &Game, theme: &Theme, area: Rect, buf: &mut Buffer) {
    Clear.render(area, buf);
    buf.set_style(area, Style::default().bg(theme.game_bg.into()));

    if area.width < BOARD_SIZE.0 || area.height < BOARD_SIZE.1 {
        render_too_small(theme, area, buf);
        return;
    }

    let (x, y) = centered_origin(area, BOARD_SIZE);
    BoardView { game, theme }.render(Rect::new(x, y, BOARD_SIZE.0, BOARD_SIZE.1), buf);
}

fn text_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text_base.into())
        .bg(theme.game_bg.into())
}

fn render_too_small(theme: &Theme, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let message = format!(
        "[{}×{}] is too small! Please make your terminal window bigger.",
        area.width, area.height
    );
    let lines = textwrap::wrap(&message, usize::from(area.width));
    let width = lines
        .iter()
        .map(|line| textwrap::core::display_width(line))
        .max()
        .unwrap_or(0);
    let size = (
        u16::try_from(width).unwrap_or(area.width),
        u16::try_from(lines.len()).unwrap_or(area.height),
    );

    let (x, y) = centered_origin(area, size);
    for (row, line) in (y..area.bottom()).zip(&lines) {
        buf.set_string(x, row, line, text_style(theme));
    }
}

/// The six guess rows plus the message area.
struct BoardView<'a> {
    game: &'a Game,
    theme: &'a Theme,
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let current_row = self.game.current_row();

        for (i, row) in self.game.rows().iter().enumerate() {
            let y = area.y + i as u16 * TILE_SIZE.1;
            for (j, tile) in row.tiles().iter().enumerate() {
                let x = area.x + j as u16 * TILE_SIZE.0;
                let focus = if i != current_row {
                    Focus::None
                } else if row.cursor() == Some(j) {
                    Focus::Tile
                } else {
                    Focus::Row
                };
                render_tile(*tile, focus, self.theme, x, y, buf);
            }
        }

        if let Some(message) = self.game.message() {
            let lines = textwrap::wrap(message, usize::from(area.width));
            let top = area.y + area.height - MESSAGE_LINES;
            for (row, line) in (top..area.bottom()).zip(&lines) {
                buf.set_stringn(area.x, row, line, usize::from(area.width), text_style(self.theme));
            }
        }
    }
}

/// How a tile relates to the input cursor.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    None,
    Row,
    Tile,
}

fn render_tile(tile: Tile, focus: Focus, theme: &Theme, x: u16, y: u16, buf: &mut Buffer) {
    let outline = match focus {
        Focus::None => theme.cell_base,
        Focus::Row => theme.cell_row_active,
        Focus::Tile => theme.cell_active,
    };

    let (text, fill) = match tile.mark() {
        None | Some(Mark::Absent) => (theme.text_base, outline),
        Some(Mark::Present) => (theme.text_inverted, theme.cell_in_word),
        Some(Mark::Correct) => (theme.text_inverted, theme.cell_correct),
    };

    let edge = Style::default().fg(fill.into()).bg(theme.game_bg.into());
    let face = Style::default().fg(text.into()).bg(fill.into());
    let letter = tile.letter().unwrap_or(' ');

    buf.set_string(x, y, " ▄▄▄ ", edge);
    buf.set_string(x, y + 1, " █", edge);
    buf.set_string(x + 2, y + 1, letter.to_string(), face);
    buf.set_string(x + 3, y + 1, "█ ", edge);
    buf.set_string(x, y + 2, " ▀▀▀ ", edge);
}

#[cfg(test)]
#[path = "ui_tests.rs"]
mod tests;
