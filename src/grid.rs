// src/grid.rs

//! The canvas grid: a fixed-size rectangle of live cells that figures are
//! committed into.
//!
//! Every in-range coordinate owns exactly one `CellRef`. Writes copy values into
//! that existing cell, and `resize` carries the same handle over for every
//! coordinate that stays in range, so callers holding a handle keep observing it.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use log::{debug, trace};

use crate::figure::Figure;
use crate::glyph::{Cell, CellRef};

/// Smallest accepted column or row count.
pub const MIN_DIMENSION: usize = 1;
/// Largest accepted column or row count.
pub const MAX_DIMENSION: usize = 65536;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// Fails unless both values are within `[MIN_DIMENSION, MAX_DIMENSION]`.
pub fn check_dimensions(columns: usize, rows: usize) -> Result<()> {
    let in_range = |v: usize| (MIN_DIMENSION..=MAX_DIMENSION).contains(&v);
    if !in_range(columns) || !in_range(rows) {
        anyhow::bail!(
            "grid dimensions out of range [{}, {}]: {{columns: {}, rows: {}}}",
            MIN_DIMENSION,
            MAX_DIMENSION,
            columns,
            rows
        );
    }
    Ok(())
}

fn blank_cell() -> CellRef {
    Rc::new(RefCell::new(Cell::default()))
}

#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major: `rows[y][x]`.
    rows: Vec<Vec<CellRef>>,
}

impl Grid {
    /// Creates a grid of blank cells.
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        check_dimensions(columns, rows)?;
        let rows_vec = (0..rows)
            .map(|_| (0..columns).map(|_| blank_cell()).collect())
            .collect();
        debug!("Created {}x{} grid", columns, rows);
        Ok(Grid {
            width: columns,
            height: rows,
            rows: rows_vec,
        })
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Handle to the live cell at `(x, y)`, or `None` out of range.
    pub fn get_cell(&self, x: usize, y: usize) -> Option<CellRef> {
        self.rows.get(y)?.get(x).map(Rc::clone)
    }

    /// Copy of the value at `(x, y)`.
    pub fn cell_value(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y)?.get(x).map(|cell| *cell.borrow())
    }

    /// Copies `source`'s fields into the existing cell at `(x, y)`.
    /// Out-of-range coordinates are ignored.
    pub fn update_cell(&self, x: usize, y: usize, source: &Cell) {
        match self.rows.get(y).and_then(|row| row.get(x)) {
            Some(cell) => cell.borrow_mut().copy_from(source),
            None => trace!("update_cell: ({}, {}) outside {}x{} grid", x, y, self.width, self.height),
        }
    }

    /// Writes every tile of `figure`, in figure order.
    pub fn update(&self, figure: &Figure) {
        for tile in figure.tiles() {
            self.update_cell(tile.x, tile.y, &tile.cell);
        }
    }

    /// Changes the grid size, anchored at the origin.
    ///
    /// Surviving coordinates keep their cell handle; new coordinates get blank
    /// cells; coordinates past the new bounds are dropped.
    pub fn resize(&mut self, columns: usize, rows: usize) -> Result<()> {
        check_dimensions(columns, rows)?;
        if self.width == columns && self.height == rows {
            return Ok(());
        }

        let mut old_rows = std::mem::take(&mut self.rows).into_iter();
        let mut new_rows = Vec::with_capacity(rows);
        for _ in 0..rows {
            let mut row: Vec<CellRef> = match old_rows.next() {
                Some(old) => old.into_iter().take(columns).collect(),
                None => Vec::with_capacity(columns),
            };
            row.resize_with(columns, blank_cell);
            new_rows.push(row);
        }

        debug!(
            "Resized grid from {}x{} to {}x{}",
            self.width, self.height, columns, rows
        );
        self.rows = new_rows;
        self.width = columns;
        self.height = rows;
        Ok(())
    }

    /// Glyph ids row by row, for renderers and tests.
    pub fn glyph_rows(&self) -> Vec<Vec<u32>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.borrow().glyph).collect())
            .collect()
    }
}
