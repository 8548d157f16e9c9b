// src/lineset.rs

//! Box-drawing line sets: which edges each glyph connects to, which glyph best
//! covers a required set of edges, and how two families blend at a junction.
//!
//! All lookups are stateless reads of constant tables. Unknown glyphs are a
//! normal outcome and come back as `None` / `false`.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::glyph::GlyphId;

mod tables;

bitflags! {
    /// Edges of a cell. RIGHT/TOP occupy the low bit pair and LEFT/BOTTOM the
    /// high pair, so a two-bit rotation maps an edge to its opposite.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Direction: u8 {
        const RIGHT  = 0b0001;
        const TOP    = 0b0010;
        const LEFT   = 0b0100;
        const BOTTOM = 0b1000;
    }
}

/// Opposite edge(s): RIGHT<->LEFT, TOP<->BOTTOM.
///
/// Not to be confused with `Direction::complement`, the bitflags NOT.
pub fn complement(direction: Direction) -> Direction {
    let bits = direction.bits();
    Direction::from_bits_truncate((bits << 2) | (bits >> 2))
}

impl Direction {
    /// The four single edges, in mask bit order.
    pub const EDGES: [Direction; 4] = [
        Direction::RIGHT,
        Direction::TOP,
        Direction::LEFT,
        Direction::BOTTOM,
    ];

    /// Perpendicular counterpart: RIGHT<->TOP, LEFT<->BOTTOM.
    pub fn rotate(self) -> Direction {
        let bits = self.bits();
        Direction::from_bits_truncate(((bits & 0b0101) << 1) | ((bits & 0b1010) >> 1))
    }

    /// True for exactly one of TOP or BOTTOM.
    pub fn is_vertical(self) -> bool {
        self == Direction::TOP || self == Direction::BOTTOM
    }

    /// True for exactly one of RIGHT or LEFT.
    pub fn is_horizontal(self) -> bool {
        self == Direction::RIGHT || self == Direction::LEFT
    }

    /// Grid offset of a single edge; `y` grows downward.
    pub fn offset(self) -> Option<(isize, isize)> {
        match self {
            d if d == Direction::RIGHT => Some((1, 0)),
            d if d == Direction::TOP => Some((0, -1)),
            d if d == Direction::LEFT => Some((-1, 0)),
            d if d == Direction::BOTTOM => Some((0, 1)),
            _ => None,
        }
    }
}

/// The four box-drawing families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineFamily {
    #[default]
    Single,
    Double,
    /// Double horizontal strokes with single vertical strokes.
    DoubleHorizontal,
    /// Single horizontal strokes with double vertical strokes.
    DoubleVertical,
}

impl LineFamily {
    pub const ALL: [LineFamily; 4] = [
        LineFamily::Single,
        LineFamily::Double,
        LineFamily::DoubleHorizontal,
        LineFamily::DoubleVertical,
    ];

    fn index(self) -> usize {
        match self {
            LineFamily::Single => 0,
            LineFamily::Double => 1,
            LineFamily::DoubleHorizontal => 2,
            LineFamily::DoubleVertical => 3,
        }
    }

    pub fn line_set(self) -> &'static LineSet {
        match self {
            LineFamily::Single => &SINGLE,
            LineFamily::Double => &DOUBLE,
            LineFamily::DoubleHorizontal => &DOUBLE_HORIZONTAL,
            LineFamily::DoubleVertical => &DOUBLE_VERTICAL,
        }
    }
}

/// A family's glyph connectivity plus its best-fit table.
#[derive(Debug, PartialEq, Eq)]
pub struct LineSet {
    family: LineFamily,
    connectivity: &'static [(GlyphId, u8)],
    best_fit: [GlyphId; 16],
}

pub static SINGLE: LineSet = LineSet {
    family: LineFamily::Single,
    connectivity: tables::SINGLE_CONNECTIVITY,
    best_fit: tables::SINGLE_BEST_FIT,
};

pub static DOUBLE: LineSet = LineSet {
    family: LineFamily::Double,
    connectivity: tables::DOUBLE_CONNECTIVITY,
    best_fit: tables::DOUBLE_BEST_FIT,
};

pub static DOUBLE_HORIZONTAL: LineSet = LineSet {
    family: LineFamily::DoubleHorizontal,
    connectivity: tables::DOUBLE_HORIZONTAL_CONNECTIVITY,
    best_fit: tables::DOUBLE_HORIZONTAL_BEST_FIT,
};

pub static DOUBLE_VERTICAL: LineSet = LineSet {
    family: LineFamily::DoubleVertical,
    connectivity: tables::DOUBLE_VERTICAL_CONNECTIVITY,
    best_fit: tables::DOUBLE_VERTICAL_BEST_FIT,
};

impl LineSet {
    pub fn family(&self) -> LineFamily {
        self.family
    }

    /// Glyph in this family that best covers the `required` edges.
    pub fn get_id(&self, required: Direction) -> GlyphId {
        self.best_fit[required.bits() as usize]
    }

    /// Edges `glyph` extends a line toward, if this family owns it.
    pub fn connectivity(&self, glyph: GlyphId) -> Option<Direction> {
        self.connectivity
            .iter()
            .find(|(id, _)| *id == glyph)
            .map(|&(_, mask)| Direction::from_bits_truncate(mask))
    }

    pub fn contains(&self, glyph: GlyphId) -> bool {
        self.connectivity(glyph).is_some()
    }
}

/// The family owning `glyph`, if any.
pub fn get_line_set(glyph: GlyphId) -> Option<&'static LineSet> {
    LineFamily::ALL
        .iter()
        .map(|family| family.line_set())
        .find(|set| set.contains(glyph))
}

/// Whether `glyph` visually extends a line toward `direction`.
pub fn has_attractor(glyph: GlyphId, direction: Direction) -> bool {
    get_line_set(glyph)
        .and_then(|set| set.connectivity(glyph))
        .is_some_and(|mask| !direction.is_empty() && mask.contains(direction))
}

/// Family the next glyph should be drawn from when a glyph of `current`
/// connects toward `direction` to a cell holding `neighbor`.
///
/// Returns `None` when `direction` is not a single edge or `neighbor` belongs
/// to no line set.
pub fn interpolate_line_set(
    current: &LineSet,
    direction: Direction,
    neighbor: GlyphId,
) -> Option<&'static LineSet> {
    let table = if direction.is_vertical() {
        &tables::VERTICAL_INTERPOLATION
    } else if direction.is_horizontal() {
        &tables::HORIZONTAL_INTERPOLATION
    } else {
        return None;
    };
    let neighbor = get_line_set(neighbor)?;
    Some(table[current.family.index()][neighbor.family.index()].line_set())
}

#[cfg(test)]
mod tests;
