// src/render.rs

//! Text rendering of a canvas: glyph ids to characters, and cells to ANSI SGR
//! escapes. Used by the demo binary and by tests that compare drawings.

use std::fmt::Write;

use crate::color::convert_to_rgb_color;
use crate::editor::CanvasSnapshot;
use crate::glyph::{Cell, EMPTY_GLYPH};
use crate::grid::Grid;

pub use crate::glyph::glyph_to_char;

fn line_text<'a>(cells: impl Iterator<Item = &'a Cell>) -> String {
    cells.map(|cell| glyph_to_char(cell.glyph)).collect()
}

/// One string per grid row, glyphs only.
pub fn render_plain(grid: &Grid) -> Vec<String> {
    grid.glyph_rows()
        .into_iter()
        .map(|row| row.into_iter().map(glyph_to_char).collect())
        .collect()
}

/// Like `render_plain` for a snapshot, with the text cursor overlaid.
pub fn render_snapshot_plain(snapshot: &CanvasSnapshot) -> Vec<String> {
    snapshot
        .lines
        .iter()
        .enumerate()
        .map(|(y, line)| match snapshot.cursor {
            Some(cursor) if cursor.y == y => line_text(
                line.iter()
                    .enumerate()
                    .map(|(x, cell)| if x == cursor.x { &cursor.cell } else { cell }),
            ),
            _ => line_text(line.iter()),
        })
        .collect()
}

const DEFAULT_FG: (u8, u8, u8) = (170, 170, 170);
const DEFAULT_BG: (u8, u8, u8) = (0, 0, 0);

/// Renders the grid with 24-bit SGR color escapes, one line per row.
/// Colors are only emitted when they change along a row.
pub fn render_ansi(grid: &Grid) -> String {
    let dims = grid.dimensions();
    let mut out = String::new();
    for y in 0..dims.height {
        let mut current: Option<((u8, u8, u8), (u8, u8, u8))> = None;
        for x in 0..dims.width {
            let cell = grid.cell_value(x, y).unwrap_or_default();
            let fg = cell.fg.map_or(DEFAULT_FG, |c| convert_to_rgb_color(c, DEFAULT_FG));
            let bg = cell.bg.map_or(DEFAULT_BG, |c| convert_to_rgb_color(c, DEFAULT_BG));
            if current != Some((fg, bg)) {
                // Writing into a String cannot fail.
                let _ = write!(
                    out,
                    "\x1b[38;2;{};{};{};48;2;{};{};{}m",
                    fg.0, fg.1, fg.2, bg.0, bg.1, bg.2
                );
                current = Some((fg, bg));
            }
            out.push(if cell.glyph == EMPTY_GLYPH { ' ' } else { glyph_to_char(cell.glyph) });
        }
        out.push_str("\x1b[0m\n");
    }
    out
}
