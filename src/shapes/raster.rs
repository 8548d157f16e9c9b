// src/shapes/raster.rs

//! Integer rasterizers. Every function takes two corner points in any order
//! and returns the covered coordinates; none of them look at a grid.

use std::cmp::{max, min};
use std::collections::BTreeSet;

use crate::figure::Point;

/// Corners of the bounding box of `a` and `b` as `(left, top, right, bottom)`.
fn bounds(a: Point, b: Point) -> (usize, usize, usize, usize) {
    (min(a.x, b.x), min(a.y, b.y), max(a.x, b.x), max(a.y, b.y))
}

/// Border of the bounding box, row-major.
pub fn rectangle_outline(a: Point, b: Point) -> Vec<Point> {
    let (left, top, right, bottom) = bounds(a, b);
    let mut points = Vec::new();
    for y in top..=bottom {
        if y == top || y == bottom {
            points.extend((left..=right).map(|x| Point::new(x, y)));
        } else {
            points.push(Point::new(left, y));
            if right != left {
                points.push(Point::new(right, y));
            }
        }
    }
    points
}

/// Every point of the bounding box, row-major.
pub fn rectangle_area(a: Point, b: Point) -> Vec<Point> {
    let (left, top, right, bottom) = bounds(a, b);
    (top..=bottom)
        .flat_map(|y| (left..=right).map(move |x| Point::new(x, y)))
        .collect()
}

/// Bresenham line between `a` and `b`, inclusive.
///
/// The endpoints are put in a fixed order first so swapping them yields the
/// same pixels.
pub fn line(a: Point, b: Point) -> Vec<Point> {
    let (from, to) = if (a.x, a.y) <= (b.x, b.y) { (a, b) } else { (b, a) };

    let (mut x0, mut y0) = (from.x as i64, from.y as i64);
    let (x1, y1) = (to.x as i64, to.y as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        points.push(Point::new(x0 as usize, y0 as usize));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    points
}

/// Boundary pixels of the ellipse inscribed in the bounding box, keyed by
/// `(row, column)` so iteration is row-major.
fn ellipse_pixels(a: Point, b: Point) -> BTreeSet<(usize, usize)> {
    let (left, top, right, bottom) = bounds(a, b);
    let (mut x0, mut x1) = (left as i64, right as i64);
    let w = x1 - x0;
    let h = (bottom - top) as i64;
    let h_odd = h & 1;
    let mut dx = 4 * (1 - w) * h * h;
    let mut dy = 4 * (h_odd + 1) * w * w;
    let mut err = dx + dy + h_odd * w * w;

    // Start on the middle row(s) and walk outward.
    let mut y0 = top as i64 + (h + 1) / 2;
    let mut y1 = y0 - h_odd;
    let step_x = 8 * w * w;
    let step_y = 8 * h * h;

    let mut pixels = BTreeSet::new();
    let mut plot = |x: i64, y: i64| {
        if (left as i64..=right as i64).contains(&x) && (top as i64..=bottom as i64).contains(&y) {
            pixels.insert((y as usize, x as usize));
        }
    };

    loop {
        plot(x1, y0);
        plot(x0, y0);
        plot(x0, y1);
        plot(x1, y1);
        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += step_x;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += step_y;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    // Flat ellipses stop before reaching the tips.
    while y0 - y1 <= h {
        plot(x0 - 1, y0);
        plot(x1 + 1, y0);
        y0 += 1;
        plot(x0 - 1, y1);
        plot(x1 + 1, y1);
        y1 -= 1;
    }
    pixels
}

/// Outline of the ellipse inscribed in the bounding box, row-major.
pub fn ellipse_outline(a: Point, b: Point) -> Vec<Point> {
    ellipse_pixels(a, b)
        .into_iter()
        .map(|(y, x)| Point::new(x, y))
        .collect()
}

/// Outline plus interior: each row is filled between its outermost pixels.
pub fn ellipse_area(a: Point, b: Point) -> Vec<Point> {
    let pixels = ellipse_pixels(a, b);
    let mut points = Vec::new();
    let mut rows = pixels.iter().peekable();
    while let Some(&(y, first_x)) = rows.next() {
        let mut last_x = first_x;
        while let Some(&&(next_y, x)) = rows.peek() {
            if next_y != y {
                break;
            }
            last_x = x;
            rows.next();
        }
        points.extend((first_x..=last_x).map(|x| Point::new(x, y)));
    }
    points
}
