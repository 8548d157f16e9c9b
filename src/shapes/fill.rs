// src/shapes/fill.rs

//! Bounded four-way flood fill over the grid's current cell values.

use log::debug;

use crate::figure::Point;
use crate::grid::Grid;

/// Coordinates of the orthogonally connected region around `seed` whose cells
/// equal the seed cell's value, in visit order.
///
/// Uses an explicit stack and visited map, so region size is bounded only by
/// the grid. Returns nothing when `seed` is outside the grid.
pub fn connected_region(grid: &Grid, seed: Point) -> Vec<Point> {
    let target = match grid.cell_value(seed.x, seed.y) {
        Some(cell) => cell,
        None => {
            debug!("flood fill seed ({}, {}) is outside the grid", seed.x, seed.y);
            return Vec::new();
        }
    };

    let dims = grid.dimensions();
    let index = |p: Point| p.y * dims.width + p.x;
    let mut visited = vec![false; dims.width * dims.height];
    let mut stack = vec![seed];
    let mut region = Vec::new();
    visited[index(seed)] = true;

    while let Some(point) = stack.pop() {
        region.push(point);

        let neighbors = [
            (point.x + 1 < dims.width).then(|| Point::new(point.x + 1, point.y)),
            point.y.checked_sub(1).map(|y| Point::new(point.x, y)),
            point.x.checked_sub(1).map(|x| Point::new(x, point.y)),
            (point.y + 1 < dims.height).then(|| Point::new(point.x, point.y + 1)),
        ];
        for next in neighbors.into_iter().flatten() {
            if visited[index(next)] {
                continue;
            }
            if grid.cell_value(next.x, next.y) == Some(target) {
                visited[index(next)] = true;
                stack.push(next);
            }
        }
    }

    debug!(
        "flood fill from ({}, {}) covered {} cells",
        seed.x,
        seed.y,
        region.len()
    );
    region
}
