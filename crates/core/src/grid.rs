//! Grid geometry: wrapping and seam-aware stepping.
//!
//! Valid cells are `[0, GRID_WIDTH) x [0, GRID_HEIGHT)`. Anything that steps
//! past an edge re-enters at the opposite edge.

use crate::types::{Coord, Direction, GRID_HEIGHT, GRID_WIDTH};

/// Fold any coordinate back onto the grid.
pub fn wrap(c: Coord) -> Coord {
    Coord::new(c.x.rem_euclid(GRID_WIDTH), c.y.rem_euclid(GRID_HEIGHT))
}

/// One tile in `dir`, wrapped.
pub fn step(c: Coord, dir: Direction) -> Coord {
    wrap(c.offset(dir))
}

/// Per-axis offset from `from` to `to`, taken the short way around each axis.
///
/// Two segments on either side of a wrap seam (x = 31 and x = 0) are one
/// step apart, not 31.
pub fn seam_delta(from: Coord, to: Coord) -> (i16, i16) {
    (
        shortest(to.x - from.x, GRID_WIDTH),
        shortest(to.y - from.y, GRID_HEIGHT),
    )
}

/// The cell that continues the line `prev -> last` by one more step.
pub fn extend(prev: Coord, last: Coord) -> Coord {
    let (dx, dy) = seam_delta(prev, last);
    wrap(Coord::new(last.x + dx, last.y + dy))
}

fn shortest(d: i16, span: i16) -> i16 {
    if d > span / 2 {
        d - span
    } else if d < -(span / 2) {
        d + span
    } else {
        d
    }
}
