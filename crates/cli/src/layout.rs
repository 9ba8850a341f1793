// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Screen geometry helpers.

use ratatui::layout::Rect;

/// Top-left corner of a `size` rectangle centered in `outer`.
///
/// Falls back to the outer edge in any dimension where `size` does not fit.
pub fn centered_origin(outer: Rect, size: (u16, u16)) -> (u16, u16) {
    let center = |start: u16, outer_len: u16, inner_len: u16| {
        if inner_len < outer_len {
            start + (outer_len - inner_len) / 2
        } else {
            start
        }
    };
    (
        center(outer.x, outer.width, size.0),
        center(outer.y, outer.height, size.1),
    )
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
