//! core-draw library crate.
//!
//! Grid-based shape rasterization for a character-cell drawing editor: a grid
//! of live cells, the shape tools that turn gestures into figures, the text
//! entry buffer, and the box-drawing line sets used by smart lines.

pub mod color;
pub mod config;
pub mod editor;
pub mod figure;
pub mod glyph;
pub mod grid;
pub mod lineset;
pub mod render;
pub mod shapes;

pub use editor::{CanvasInterface, CanvasSnapshot, Editor, EditorAction, EditorInput};
pub use figure::{Figure, Point, Tile};
pub use glyph::{char_to_glyph, glyph_to_char, Cell, CellPatch, CellRef, GlyphId, EMPTY_GLYPH};
pub use grid::{Dimensions, Grid};
pub use lineset::{complement, get_line_set, has_attractor, interpolate_line_set, Direction, LineFamily, LineSet};
pub use shapes::{Shape, Stroke, TextBuffer};
