// src/shapes/text.rs

//! The text tool's figure: an append log of typed characters.

use crate::figure::{Point, Tile};
use crate::glyph::{Cell, GlyphId, EMPTY_GLYPH};

/// Glyph shown at the insertion point while typing (`_`).
pub const CURSOR_ON_GLYPH: GlyphId = 95;
/// Glyph used to hide the insertion point.
pub const CURSOR_OFF_GLYPH: GlyphId = EMPTY_GLYPH;

/// Characters typed during one text gesture, oldest first.
///
/// Tiles need not be contiguous: this is a log of what was typed where, not a
/// scan of a grid region.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBuffer {
    brush: Cell,
    /// Visible cursor glyph in the brush colors.
    pub cursor_on: Cell,
    /// Invisible cursor glyph in the brush colors.
    pub cursor_off: Cell,
    tiles: Vec<Tile>,
}

impl TextBuffer {
    pub fn new(brush: Cell) -> Self {
        Self::with_cursor_glyphs(brush, CURSOR_ON_GLYPH, CURSOR_OFF_GLYPH)
    }

    pub fn with_cursor_glyphs(brush: Cell, on: GlyphId, off: GlyphId) -> Self {
        TextBuffer {
            brush,
            cursor_on: brush.with_glyph(on),
            cursor_off: brush.with_glyph(off),
            tiles: Vec::new(),
        }
    }

    /// Appends `c` at `at`, painted with the brush colors.
    pub fn advance(&mut self, at: Point, c: char) -> Tile {
        let tile = Tile::at(at, self.brush.with_char(c));
        self.tiles.push(tile);
        tile
    }

    /// Drops the most recently appended tile. No-op on an empty buffer.
    pub fn reverse(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn last(&self) -> Option<&Tile> {
        self.tiles.last()
    }

    pub fn brush(&self) -> Cell {
        self.brush
    }
}
