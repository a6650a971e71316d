//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so the
//! simulation, the input mapping and the terminal view can all share it.
//!
//! # Grid Dimensions
//!
//! The playfield is the classic 640x480 surface cut into 20x20 tiles:
//!
//! - **Width**: 32 columns (indexed 0-31)
//! - **Height**: 24 rows (indexed 0-23)
//! - **Spawn**: head at (16, 12), body stacked straight below, facing up
//!
//! Coordinates wrap: leaving an edge re-enters at the opposite edge.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 70 | A tick fires once strictly more than this has elapsed |
//! | `START_DELAY_MS` | 1000 | Hold-off before the first tick |
//! | `RESET_PAUSE_MS` | 1000 | Hold-off after a self-collision reset |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Coord, Direction, GRID_HEIGHT, GRID_WIDTH};
//!
//! let dir = Direction::from_str("left").unwrap();
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! let head = Coord::new(5, 5);
//! assert_eq!(head.offset(dir), Coord::new(4, 5));
//!
//! assert_eq!(GRID_WIDTH, 32);
//! assert_eq!(GRID_HEIGHT, 24);
//! ```

/// Grid width in tiles (32 columns)
pub const GRID_WIDTH: i16 = 32;

/// Grid height in tiles (24 rows)
pub const GRID_HEIGHT: i16 = 24;

/// Number of segments a freshly spawned snake has.
pub const INITIAL_LENGTH: usize = 5;

/// Number of fruits on the field at all times.
pub const FRUIT_COUNT: usize = 8;

/// Minimum interval between simulation ticks in milliseconds.
///
/// The comparison is strict: a tick fires when elapsed time is greater than this.
pub const TICK_MS: u64 = 70;

/// Hold-off before the first tick after start.
pub const START_DELAY_MS: u64 = 1000;

/// Hold-off after a self-collision reset.
pub const RESET_PAUSE_MS: u64 = 1000;


/// A tile position on the grid.
///
/// Signed so that a step off the edge is representable before it is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i16,
    pub y: i16,
}

impl Coord {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Move one tile in `dir` without wrapping.
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether this coordinate is a visible grid cell.
    pub fn in_bounds(self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }
}

/// The four axis-aligned headings.
///
/// Screen coordinates: `y` grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The heading that would reverse the snake onto itself.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Parse from a name or single letter (case-insensitive)
    ///
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Render palette entry for a drawn tile.
///
/// The head gets its own colour, every other segment shares the body colour,
/// and all fruits share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Head,
    Body,
    Fruit,
}
