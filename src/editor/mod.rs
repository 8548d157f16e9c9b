// src/editor/mod.rs

//! The editing session: owns the grid and turns input events into figures
//! committed onto it.
//!
//! Every input kind is one `EditorInput` variant and `interpret_input` is the
//! single dispatch point. The presentation layer feeds it events and draws
//! `snapshot()` whenever it gets back `EditorAction::RequestRedraw`.

use anyhow::Result;
use log::{debug, trace, warn};

use crate::config::Config;
use crate::figure::{Figure, Point, Tile};
use crate::glyph::{Cell, CellRef};
use crate::grid::Grid;
use crate::shapes::{Shape, Stroke};

mod snapshot;

pub use snapshot::CanvasSnapshot;

/// Events the editor understands.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    /// A typed character. `'\n'` moves the text cursor to the next line.
    Char(char),
    Backspace,
    SelectShape(Shape),
    SetBrush(Cell),
    Resize { columns: usize, rows: usize },
}

/// What the presentation layer should do after an input.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    RequestRedraw,
    /// Draw the text cursor at this tile (and redraw).
    ShowCursor(Tile),
    /// Stop drawing the text cursor (and redraw).
    HideCursor,
}

/// The interface the presentation layer programs against.
pub trait CanvasInterface {
    fn interpret_input(&mut self, input: EditorInput) -> Option<EditorAction>;
    fn snapshot(&self) -> CanvasSnapshot;
}

/// A pointer gesture in progress.
#[derive(Debug)]
struct Gesture {
    start: Point,
    figure: Option<Figure>,
    /// Cells overwritten by the current preview, restored before the next one.
    preview_backup: Vec<(Point, Cell)>,
}

/// An open text buffer and where the next character goes.
#[derive(Debug)]
struct TextSession {
    figure: Figure,
    line_start: usize,
    cursor: Point,
    /// Cell values replaced by each typed character, parallel to the buffer.
    overwritten: Vec<Cell>,
}

pub struct Editor {
    grid: Grid,
    stroke: Stroke,
    cursor_glyphs: (u32, u32),
    gesture: Option<Gesture>,
    text: Option<TextSession>,
}

impl Editor {
    pub fn new(columns: usize, rows: usize, shape: Shape, brush: Cell) -> Result<Self> {
        Ok(Editor {
            grid: Grid::new(columns, rows)?,
            stroke: Stroke::new(shape, brush),
            cursor_glyphs: (crate::shapes::CURSOR_ON_GLYPH, crate::shapes::CURSOR_OFF_GLYPH),
            gesture: None,
            text: None,
        })
    }

    /// Builds an editor from configuration, starting with the single-cell tool.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let mut editor = Editor::new(
            config.canvas.columns,
            config.canvas.rows,
            Shape::SingleCell,
            config.brush.cell(),
        )?;
        editor.cursor_glyphs = (config.text.cursor_on_glyph, config.text.cursor_off_glyph);
        editor.stroke = editor.make_stroke(Shape::SingleCell, config.brush.cell());
        Ok(editor)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn shape(&self) -> Shape {
        self.stroke.shape()
    }

    pub fn brush(&self) -> Cell {
        self.stroke.brush()
    }

    /// Live handle to a canvas cell.
    pub fn cell(&self, x: usize, y: usize) -> Option<CellRef> {
        self.grid.get_cell(x, y)
    }

    /// Text cursor position while a text session is open.
    pub fn text_cursor(&self) -> Option<Point> {
        self.text.as_ref().map(|session| session.cursor)
    }

    pub fn resize(&mut self, columns: usize, rows: usize) -> Result<()> {
        self.grid.resize(columns, rows)?;
        self.gesture = None;
        if let Some(session) = self.text.as_mut() {
            session.cursor.x = session.cursor.x.min(columns - 1);
            session.cursor.y = session.cursor.y.min(rows - 1);
        }
        Ok(())
    }

    fn make_stroke(&self, shape: Shape, brush: Cell) -> Stroke {
        let (on, off) = self.cursor_glyphs;
        Stroke::new(shape, brush).with_cursor_glyphs(on, off)
    }

    pub fn interpret_input(&mut self, input: EditorInput) -> Option<EditorAction> {
        trace!("interpret_input: {:?}", input);
        match input {
            EditorInput::PointerDown(point) => self.pointer_down(point),
            EditorInput::PointerMove(point) => self.pointer_move(point),
            EditorInput::PointerUp(point) => self.pointer_up(point),
            EditorInput::Char(c) => self.type_char(c),
            EditorInput::Backspace => self.backspace(),
            EditorInput::SelectShape(shape) => {
                self.gesture = None;
                self.stroke = self.make_stroke(shape, self.stroke.brush());
                self.close_text()
            }
            EditorInput::SetBrush(brush) => {
                self.stroke = self.make_stroke(self.stroke.shape(), brush);
                None
            }
            EditorInput::Resize { columns, rows } => match self.resize(columns, rows) {
                Ok(()) => Some(EditorAction::RequestRedraw),
                Err(e) => {
                    warn!("Ignoring resize request: {:#}", e);
                    None
                }
            },
        }
    }

    pub fn snapshot(&self) -> CanvasSnapshot {
        let dims = self.grid.dimensions();
        let lines = (0..dims.height)
            .map(|y| {
                (0..dims.width)
                    .map(|x| self.grid.cell_value(x, y).unwrap_or_default())
                    .collect()
            })
            .collect();
        CanvasSnapshot {
            width: dims.width,
            height: dims.height,
            lines,
            cursor: self.cursor_tile(),
        }
    }

    // --- Pointer gestures ---

    fn pointer_down(&mut self, point: Point) -> Option<EditorAction> {
        match self.stroke.shape() {
            Shape::TextBuffer => {
                let figure = self.stroke.apply(&self.grid, point, point, None);
                self.text = Some(TextSession {
                    figure,
                    line_start: point.x,
                    cursor: point,
                    overwritten: Vec::new(),
                });
                debug!("Opened text buffer at ({}, {})", point.x, point.y);
                self.cursor_tile().map(EditorAction::ShowCursor)
            }
            shape => {
                let hide = self.close_text();
                self.gesture = Some(Gesture {
                    start: point,
                    figure: None,
                    preview_backup: Vec::new(),
                });
                let drawn = match shape {
                    Shape::FloodFill => {
                        let figure = self.stroke.apply(&self.grid, point, point, None);
                        self.grid.update(&figure);
                        true
                    }
                    _ => self.extend_gesture(point),
                };
                hide.or(drawn.then_some(EditorAction::RequestRedraw))
            }
        }
    }

    fn pointer_move(&mut self, point: Point) -> Option<EditorAction> {
        match self.stroke.shape() {
            Shape::FloodFill | Shape::TextBuffer => None,
            _ => self
                .extend_gesture(point)
                .then_some(EditorAction::RequestRedraw),
        }
    }

    fn pointer_up(&mut self, point: Point) -> Option<EditorAction> {
        let redraw = match self.stroke.shape() {
            Shape::FloodFill | Shape::TextBuffer => false,
            _ => self.extend_gesture(point),
        };
        self.gesture = None;
        redraw.then_some(EditorAction::RequestRedraw)
    }

    /// Regenerates the gesture's figure for `point` and paints it. Returns
    /// false when no gesture is active.
    fn extend_gesture(&mut self, point: Point) -> bool {
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        let shape = self.stroke.shape();

        if shape.is_previewed() {
            for (p, cell) in gesture.preview_backup.drain(..).rev() {
                self.grid.update_cell(p.x, p.y, &cell);
            }
        }

        let figure = self
            .stroke
            .apply(&self.grid, gesture.start, point, gesture.figure.take());

        if shape.is_previewed() {
            gesture.preview_backup = figure
                .tiles()
                .iter()
                .filter_map(|t| self.grid.cell_value(t.x, t.y).map(|cell| (t.point(), cell)))
                .collect();
        }
        self.grid.update(&figure);
        gesture.figure = Some(figure);
        true
    }

    // --- Text entry ---

    fn cursor_tile(&self) -> Option<Tile> {
        let session = self.text.as_ref()?;
        let buffer = session.figure.as_text()?;
        Some(Tile::at(session.cursor, buffer.cursor_on))
    }

    fn close_text(&mut self) -> Option<EditorAction> {
        self.text.take().map(|_| EditorAction::HideCursor)
    }

    fn type_char(&mut self, c: char) -> Option<EditorAction> {
        let width = self.grid.dimensions().width;
        let height = self.grid.dimensions().height;
        let session = self.text.as_mut()?;

        if c == '\n' {
            session.cursor = Point::new(session.line_start, (session.cursor.y + 1).min(height - 1));
            return self.cursor_tile().map(EditorAction::ShowCursor);
        }

        let at = session.cursor;
        let previous = self.grid.cell_value(at.x, at.y).unwrap_or_default();
        let buffer = session.figure.as_text_mut()?;
        let tile = buffer.advance(at, c);
        session.overwritten.push(previous);
        self.grid.update_cell(tile.x, tile.y, &tile.cell);
        if at.x + 1 < width {
            session.cursor.x += 1;
        }
        self.cursor_tile().map(EditorAction::ShowCursor)
    }

    fn backspace(&mut self) -> Option<EditorAction> {
        let session = self.text.as_mut()?;
        let tile = session.figure.as_text_mut()?.reverse()?;
        if let Some(original) = session.overwritten.pop() {
            self.grid.update_cell(tile.x, tile.y, &original);
        }
        session.cursor = tile.point();
        self.cursor_tile().map(EditorAction::ShowCursor)
    }
}

impl CanvasInterface for Editor {
    fn interpret_input(&mut self, input: EditorInput) -> Option<EditorAction> {
        self.interpret_input(input)
    }

    fn snapshot(&self) -> CanvasSnapshot {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests;
