// src/figure.rs

//! Located cells and the figures a gesture produces.

use serde::{Deserialize, Serialize};

use crate::glyph::Cell;
use crate::shapes::TextBuffer;

/// A zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}

/// A cell paired with the coordinate it is painted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    pub cell: Cell,
}

impl Tile {
    pub const fn new(x: usize, y: usize, cell: Cell) -> Self {
        Tile { x, y, cell }
    }

    pub fn at(point: Point, cell: Cell) -> Self {
        Tile::new(point.x, point.y, cell)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The output of one gesture.
///
/// Most tools produce a plain tile list. The text tool produces a `TextBuffer`
/// that keeps growing across calls within the same gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Tiles(Vec<Tile>),
    Text(TextBuffer),
}

impl Default for Figure {
    fn default() -> Self {
        Figure::Tiles(Vec::new())
    }
}

impl Figure {
    /// Tiles in the order they should be committed.
    pub fn tiles(&self) -> &[Tile] {
        match self {
            Figure::Tiles(tiles) => tiles,
            Figure::Text(buffer) => buffer.tiles(),
        }
    }

    pub fn len(&self) -> usize {
        self.tiles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles().is_empty()
    }

    pub fn as_text(&self) -> Option<&TextBuffer> {
        match self {
            Figure::Text(buffer) => Some(buffer),
            Figure::Tiles(_) => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextBuffer> {
        match self {
            Figure::Text(buffer) => Some(buffer),
            Figure::Tiles(_) => None,
        }
    }

    /// Coordinates of every tile, in figure order.
    pub fn points(&self) -> Vec<Point> {
        self.tiles().iter().map(Tile::point).collect()
    }
}

impl From<Vec<Tile>> for Figure {
    fn from(tiles: Vec<Tile>) -> Self {
        Figure::Tiles(tiles)
    }
}
