//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the grid simulation. It has **no dependencies** on terminal
//! I/O, so it can be driven by the real frame loop, by tests, or by benches.
//!
//! - **Deterministic**: the same seed produces the same fruit layout and respawns
//! - **Non-blocking**: start delay and reset pause are tick hold-offs, not sleeps
//! - **Atomic resets**: collisions are checked before the body shifts
//!
//! # Module Structure
//!
//! - [`game_state`]: tick gating, heading buffer, step rules, snapshots
//! - [`snake`]: body layout, shifting and growth
//! - [`fruit`]: the fixed fruit field
//! - [`grid`]: wrapping and seam-aware geometry
//! - [`rng`]: seeded cell sampling
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Rules
//!
//! Each step:
//!
//! 1. Commit the buffered heading (reversals were already rejected by `steer`)
//! 2. If the next head cell is still occupied after the shift, respawn the snake
//! 3. Otherwise shift every segment onto its predecessor and move the head
//! 4. Every fruit on the new head is relocated and grows the snake by one
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, START_DELAY_MS, TICK_MS};
//!
//! let mut game = GameState::new(12345);
//! game.start(0);
//!
//! // Held back by the start delay.
//! assert!(game.update(500).is_none());
//!
//! game.steer(Direction::Left);
//! let outcome = game.update(START_DELAY_MS + TICK_MS + 1);
//! assert!(outcome.is_some());
//! assert_eq!(game.direction(), Direction::Left);
//! ```

pub mod fruit;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use fruit::FruitField;
pub use game_state::{GameState, StepOutcome};
pub use rng::SpawnRng;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
