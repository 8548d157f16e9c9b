// src/editor/snapshot.rs

use std::ops::Index;

use crate::figure::Tile;
use crate::glyph::Cell;

/// A copy of the canvas for the presentation layer to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major cell values.
    pub lines: Vec<Vec<Cell>>,
    /// Text cursor, drawn as an overlay; `None` outside a text session.
    pub cursor: Option<Tile>,
}

impl CanvasSnapshot {
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.lines.get(y)?.get(x)
    }
}

impl Index<(usize, usize)> for CanvasSnapshot {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.lines[y][x]
    }
}
