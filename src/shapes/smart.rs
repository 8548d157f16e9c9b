// src/shapes/smart.rs

//! Smart lines: box-drawing strokes that join up with lines already on the grid.

use std::collections::HashSet;

use log::trace;

use super::raster;
use crate::figure::{Figure, Point, Tile};
use crate::glyph::Cell;
use crate::grid::Grid;
use crate::lineset::{complement, has_attractor, interpolate_line_set, Direction, LineFamily};

/// Edge of `from` that faces `to`. Diagonal steps count as horizontal.
fn edge_toward(from: Point, to: Point) -> Option<Direction> {
    if to.x > from.x {
        Some(Direction::RIGHT)
    } else if to.x < from.x {
        Some(Direction::LEFT)
    } else if to.y < from.y {
        Some(Direction::TOP)
    } else if to.y > from.y {
        Some(Direction::BOTTOM)
    } else {
        None
    }
}

fn step(grid: &Grid, from: Point, edge: Direction) -> Option<Point> {
    let (dx, dy) = edge.offset()?;
    let x = from.x.checked_add_signed(dx)?;
    let y = from.y.checked_add_signed(dy)?;
    grid.contains(x, y).then(|| Point::new(x, y))
}

/// Rasterizes `start..=end` and picks, per tile, the glyph in `family` (or a
/// blended family) that connects to the path and to attracting neighbours.
pub fn smart_line(brush: &Cell, grid: &Grid, start: Point, end: Point, family: LineFamily) -> Figure {
    let path = raster::line(start, end);
    let on_path: HashSet<Point> = path.iter().copied().collect();

    let tiles = path
        .iter()
        .enumerate()
        .map(|(i, &point)| {
            let mut required = Direction::empty();
            let mut set = family.line_set();

            let before = i.checked_sub(1).and_then(|j| path.get(j));
            for &other in before.into_iter().chain(path.get(i + 1)) {
                if let Some(edge) = edge_toward(point, other) {
                    required |= edge;
                }
            }

            for edge in Direction::EDGES {
                let Some(neighbor) = step(grid, point, edge) else {
                    continue;
                };
                if on_path.contains(&neighbor) {
                    continue;
                }
                let glyph = match grid.cell_value(neighbor.x, neighbor.y) {
                    Some(cell) => cell.glyph,
                    None => continue,
                };
                if has_attractor(glyph, complement(edge)) {
                    required |= edge;
                    if let Some(blended) = interpolate_line_set(set, edge, glyph) {
                        set = blended;
                    }
                }
            }

            let glyph = set.get_id(required);
            trace!(
                "smart line ({}, {}): edges {:?} via {:?} -> {}",
                point.x,
                point.y,
                required,
                set.family(),
                glyph
            );
            Tile::at(point, brush.with_glyph(glyph))
        })
        .collect();

    Figure::Tiles(tiles)
}
