// src/glyph.rs

//! Defines the `Cell` type painted onto the canvas grid, its partial-update
//! companion `CellPatch`, and the glyph id constants shared by the shape tools.
//!
//! Glyph ids are code page 437 codes for values up to 255, which is what the
//! box-drawing line sets are keyed on. Larger values are Unicode scalars.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A glyph code: code page 437 below 256, a Unicode scalar above.
pub type GlyphId = u32;

/// The "nothing drawn here" glyph. A missing glyph always normalizes to this.
pub const EMPTY_GLYPH: GlyphId = 0;

/// Shared handle to a live grid cell.
///
/// The grid hands these out from `get_cell`; writes through the grid are visible
/// to every holder, and resize keeps the same handle for surviving coordinates.
pub type CellRef = Rc<RefCell<Cell>>;

/// A glyph plus its foreground and background color references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub glyph: GlyphId,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

/// Blank cell: empty glyph, no colors.
pub const DEFAULT_CELL: Cell = Cell {
    glyph: EMPTY_GLYPH,
    fg: None,
    bg: None,
};

impl Default for Cell {
    fn default() -> Self {
        DEFAULT_CELL
    }
}

impl Cell {
    /// Builds a cell, normalizing an absent glyph to `EMPTY_GLYPH`.
    pub fn new(glyph: Option<GlyphId>, fg: Option<Color>, bg: Option<Color>) -> Self {
        Cell {
            glyph: glyph.unwrap_or(EMPTY_GLYPH),
            fg,
            bg,
        }
    }

    /// Cell holding `c` with this cell's colors; see `char_to_glyph`.
    pub fn with_char(&self, c: char) -> Self {
        self.with_glyph(char_to_glyph(c))
    }

    /// Cell holding `glyph` with this cell's colors.
    pub fn with_glyph(&self, glyph: GlyphId) -> Self {
        Cell { glyph, ..*self }
    }

    pub fn is_empty(&self) -> bool {
        self.glyph == EMPTY_GLYPH
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: CellPatch) {
        if let Some(glyph) = patch.glyph {
            self.glyph = glyph;
        }
        if let Some(fg) = patch.fg {
            self.fg = fg;
        }
        if let Some(bg) = patch.bg {
            self.bg = bg;
        }
    }

    /// Copies every field of `source` into `self` in place.
    pub fn copy_from(&mut self, source: &Cell) {
        self.apply(CellPatch::from(*source));
    }
}

/// A partial cell update. `None` leaves the field untouched; `Some(None)` on a
/// color clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPatch {
    pub glyph: Option<GlyphId>,
    pub fg: Option<Option<Color>>,
    pub bg: Option<Option<Color>>,
}

impl CellPatch {
    pub fn glyph(mut self, glyph: GlyphId) -> Self {
        self.glyph = Some(glyph);
        self
    }

    pub fn fg(mut self, fg: Option<Color>) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn bg(mut self, bg: Option<Color>) -> Self {
        self.bg = Some(bg);
        self
    }
}

impl From<Cell> for CellPatch {
    fn from(cell: Cell) -> Self {
        CellPatch {
            glyph: Some(cell.glyph),
            fg: Some(cell.fg),
            bg: Some(cell.bg),
        }
    }
}

#[rustfmt::skip]
const CP437_LOW: [char; 32] = [
    ' ', '☺', '☻', '♥', '♦', '♣', '♠', '•', '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼',
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', '↑', '↓', '→', '←', '∟', '↔', '▲', '▼',
];

#[rustfmt::skip]
const CP437_HIGH: [char; 128] = [
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Display character for a glyph id. Ids up to 255 are code page 437; larger
/// ids are Unicode scalars. Invalid scalars render as U+FFFD.
pub fn glyph_to_char(glyph: GlyphId) -> char {
    match glyph {
        0..=31 => CP437_LOW[glyph as usize],
        127 => '⌂',
        32..=126 => char::from(glyph as u8),
        128..=255 => CP437_HIGH[(glyph - 128) as usize],
        _ => char::from_u32(glyph).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}

static CP437_REVERSE: Lazy<HashMap<char, GlyphId>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(255);
    // Glyph 0 is the empty cell and shares ' ' with glyph 32, so it is skipped.
    for glyph in 1..=255 {
        map.entry(glyph_to_char(glyph)).or_insert(glyph);
    }
    map
});

/// Glyph id for a typed character: its code page 437 code when it has one,
/// otherwise its Unicode scalar. Characters below U+0100 without a code page
/// entry would alias a code page 437 glyph, so they become U+FFFD.
pub fn char_to_glyph(c: char) -> GlyphId {
    match CP437_REVERSE.get(&c) {
        Some(&glyph) => glyph,
        None if (c as u32) > 255 => c as GlyphId,
        None => char::REPLACEMENT_CHARACTER as GlyphId,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn missing_glyph_normalizes_to_empty() {
        let cell = Cell::new(None, Some(Color::Named(NamedColor::Red)), None);
        assert_eq!(cell.glyph, EMPTY_GLYPH);
        assert!(cell.is_empty());
    }

    #[test]
    fn partial_update_keeps_unspecified_fields() {
        let red = Some(Color::Named(NamedColor::Red));
        let blue = Some(Color::Named(NamedColor::Blue));
        let mut cell = Cell::new(Some(65), red, blue);

        cell.apply(CellPatch::default().glyph(66));
        assert_eq!(cell, Cell::new(Some(66), red, blue));

        cell.apply(CellPatch::default().bg(None));
        assert_eq!(cell, Cell::new(Some(66), red, None));
    }

    #[test]
    fn equality_covers_all_fields() {
        let a = Cell::new(Some(65), Some(Color::Indexed(3)), None);
        assert_eq!(a, a.with_glyph(65));
        assert_ne!(a, a.with_char('B'));
        assert_ne!(a, Cell { bg: Some(Color::Default), ..a });
    }

    #[test]
    fn typed_chars_round_trip_through_glyph_ids() {
        let brush = Cell::new(Some(219), Some(Color::Named(NamedColor::Green)), None);
        for c in ['A', 'z', '~', ' ', 'Ä', 'ü', '─', '╬', '░', 'α', '☃', '日'] {
            let glyph = brush.with_char(c).glyph;
            assert_eq!(glyph_to_char(glyph), c, "glyph {} for {:?}", glyph, c);
        }
        assert_eq!(char_to_glyph('Ä'), 142);
        assert_eq!(char_to_glyph('─'), 196);
        assert_eq!(char_to_glyph('☃'), 0x2603);
        assert_eq!(char_to_glyph(' '), 32);
    }

    #[test]
    fn latin1_without_code_page_entry_stays_out_of_code_page_range() {
        for c in ['\u{80}', '©', 'Ø', '\u{7}'] {
            let glyph = char_to_glyph(c);
            assert!(!(1..=255).contains(&glyph), "{:?} aliased glyph {}", c, glyph);
            assert_eq!(glyph_to_char(glyph), char::REPLACEMENT_CHARACTER);
        }
    }
}
