//! Snake body and heading.
//!
//! Segments are stored head first. The body is never shorter than two
//! segments, so the tail always has a direction to grow along.

use crate::grid;
use crate::types::{Coord, Direction, GRID_HEIGHT, GRID_WIDTH, INITIAL_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snake {
    segments: Vec<Coord>,
    direction: Direction,
}

impl Snake {
    /// Fresh snake: head at the grid centre, body straight below, facing up.
    pub fn spawn() -> Self {
        let head = Self::spawn_head();
        let segments = (0..INITIAL_LENGTH as i16)
            .map(|i| Coord::new(head.x, head.y + i))
            .collect();
        Self {
            segments,
            direction: Direction::Up,
        }
    }

    pub const fn spawn_head() -> Coord {
        Coord::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
    }

    /// Build a snake from an explicit layout.
    ///
    /// Returns `None` for fewer than two segments or any off-grid segment.
    pub fn from_segments(segments: Vec<Coord>, direction: Direction) -> Option<Self> {
        if segments.len() < 2 || !segments.iter().all(|c| c.in_bounds()) {
            return None;
        }
        Some(Self {
            segments,
            direction,
        })
    }

    pub fn head(&self) -> Coord {
        self.segments[0]
    }

    pub fn segments(&self) -> &[Coord] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Where the head lands on the next step.
    pub fn next_head(&self) -> Coord {
        grid::step(self.head(), self.direction)
    }

    /// Whether a head at `next` would overlap the body after the shift.
    ///
    /// After shifting, the non-head segments sit on the current segments
    /// `0..len-1`; the current tail cell is vacated.
    pub fn would_bite(&self, next: Coord) -> bool {
        self.segments[..self.segments.len() - 1].contains(&next)
    }

    /// Shift every segment onto its predecessor and put the head on `next`.
    pub(crate) fn advance_to(&mut self, next: Coord) {
        self.segments.rotate_right(1);
        self.segments[0] = next;
    }

    /// Append one segment continuing the line of the last two.
    pub(crate) fn grow(&mut self) {
        let n = self.segments.len();
        let tail = grid::extend(self.segments[n - 2], self.segments[n - 1]);
        self.segments.push(tail);
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::spawn()
    }
}
