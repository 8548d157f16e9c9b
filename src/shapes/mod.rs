// src/shapes/mod.rs

//! Shape generators: turn a gesture (start point, current point, and the figure
//! returned by the previous call of the same gesture) into a figure.
//!
//! The set of tools is closed, so it is an enum (`Shape`) and every tool is one
//! entry of the `handler` table. A `Stroke` binds a tool to its brush cell; the
//! grid is passed explicitly on each call so generators never hold on to it.
//!
//! Only `FreeDraw` and `TextBuffer` look at `previous`. Everything else is a pure
//! function of its arguments.

use serde::{Deserialize, Serialize};

use crate::figure::{Figure, Point, Tile};
use crate::glyph::{Cell, GlyphId};
use crate::grid::Grid;
use crate::lineset::LineFamily;

pub mod fill;
pub mod raster;
pub mod smart;
mod text;

pub use text::{TextBuffer, CURSOR_OFF_GLYPH, CURSOR_ON_GLYPH};

/// Drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    SingleCell,
    FreeDraw,
    FloodFill,
    Rectangle,
    FilledRectangle,
    Ellipse,
    FilledEllipse,
    LineSegment,
    TextBuffer,
    SmartLine(LineFamily),
}

impl Shape {
    /// Tools whose figure is rebuilt from scratch on every pointer move, so the
    /// grid should only see the final one.
    pub fn is_previewed(self) -> bool {
        matches!(
            self,
            Shape::Rectangle
                | Shape::FilledRectangle
                | Shape::Ellipse
                | Shape::FilledEllipse
                | Shape::LineSegment
                | Shape::SmartLine(_)
        )
    }
}

/// A generator: brush-bound stroke, grid, start, end, previous figure.
type Handler = fn(&Stroke, &Grid, Point, Point, Option<Figure>) -> Figure;

fn handler(shape: Shape) -> Handler {
    match shape {
        Shape::SingleCell => single_cell_figure,
        Shape::FreeDraw => free_draw_figure,
        Shape::FloodFill => flood_fill_figure,
        Shape::Rectangle => |s, _, a, b, _| s.paint(raster::rectangle_outline(a, b)),
        Shape::FilledRectangle => |s, _, a, b, _| s.paint(raster::rectangle_area(a, b)),
        Shape::Ellipse => |s, _, a, b, _| s.paint(raster::ellipse_outline(a, b)),
        Shape::FilledEllipse => |s, _, a, b, _| s.paint(raster::ellipse_area(a, b)),
        Shape::LineSegment => |s, _, a, b, _| s.paint(raster::line(a, b)),
        Shape::TextBuffer => text_buffer_figure,
        Shape::SmartLine(_) => smart_line_figure,
    }
}

/// A tool bound to the cell it paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    shape: Shape,
    brush: Cell,
    cursor_on: GlyphId,
    cursor_off: GlyphId,
}

impl Stroke {
    pub fn new(shape: Shape, brush: Cell) -> Self {
        Stroke {
            shape,
            brush,
            cursor_on: CURSOR_ON_GLYPH,
            cursor_off: CURSOR_OFF_GLYPH,
        }
    }

    /// Overrides the cursor glyphs used by the text tool.
    pub fn with_cursor_glyphs(mut self, on: GlyphId, off: GlyphId) -> Self {
        self.cursor_on = on;
        self.cursor_off = off;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn brush(&self) -> Cell {
        self.brush
    }

    /// Produces the figure for one step of a gesture.
    pub fn apply(&self, grid: &Grid, start: Point, end: Point, previous: Option<Figure>) -> Figure {
        handler(self.shape)(self, grid, start, end, previous)
    }

    fn paint(&self, points: Vec<Point>) -> Figure {
        Figure::Tiles(points.into_iter().map(|p| Tile::at(p, self.brush)).collect())
    }
}

fn single_cell_figure(s: &Stroke, _: &Grid, _: Point, end: Point, _: Option<Figure>) -> Figure {
    Figure::Tiles(vec![Tile::at(end, s.brush)])
}

// Repeated coordinates are kept: consumers count every visited tile.
fn free_draw_figure(s: &Stroke, _: &Grid, _: Point, end: Point, previous: Option<Figure>) -> Figure {
    let mut tiles = match previous {
        Some(Figure::Tiles(tiles)) => tiles,
        _ => Vec::new(),
    };
    tiles.push(Tile::at(end, s.brush));
    Figure::Tiles(tiles)
}

fn flood_fill_figure(s: &Stroke, grid: &Grid, start: Point, _: Point, _: Option<Figure>) -> Figure {
    s.paint(fill::connected_region(grid, start))
}

fn text_buffer_figure(s: &Stroke, _: &Grid, _: Point, _: Point, previous: Option<Figure>) -> Figure {
    match previous {
        Some(figure @ Figure::Text(_)) => figure,
        _ => Figure::Text(TextBuffer::with_cursor_glyphs(s.brush, s.cursor_on, s.cursor_off)),
    }
}

fn smart_line_figure(s: &Stroke, grid: &Grid, start: Point, end: Point, _: Option<Figure>) -> Figure {
    let family = match s.shape {
        Shape::SmartLine(family) => family,
        _ => LineFamily::default(),
    };
    smart::smart_line(&s.brush, grid, start, end, family)
}

/// Builds the `(start, end, previous) -> figure` function for `shape`.
pub fn make<'g>(
    shape: Shape,
    brush: Cell,
    grid: &'g Grid,
) -> impl Fn(Point, Point, Option<Figure>) -> Figure + 'g {
    let stroke = Stroke::new(shape, brush);
    move |start, end, previous| stroke.apply(grid, start, end, previous)
}

macro_rules! generator_factories {
    ($($(#[$doc:meta])* $name:ident => $shape:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<'g>(
                brush: Cell,
                grid: &'g Grid,
            ) -> impl Fn(Point, Point, Option<Figure>) -> Figure + 'g {
                make($shape, brush, grid)
            }
        )*
    };
}

generator_factories! {
    /// One tile at the current point.
    single_cell => Shape::SingleCell;
    /// Appends the current point to the previous figure.
    free_draw => Shape::FreeDraw;
    /// Paints the region connected to `start`.
    flood_fill => Shape::FloodFill;
    rectangle => Shape::Rectangle;
    filled_rectangle => Shape::FilledRectangle;
    ellipse => Shape::Ellipse;
    filled_ellipse => Shape::FilledEllipse;
    line_segment => Shape::LineSegment;
    /// Starts a text buffer, or passes an existing one through unchanged.
    text_buffer => Shape::TextBuffer;
}
