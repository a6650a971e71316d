//! RNG module - seeded fruit placement
//!
//! Fruit respawn cells are drawn independently and uniformly over the whole
//! grid. Occupied cells are not excluded: a fruit may land on the snake or on
//! another fruit.
//!
//! The generator is a seeded PCG so a given seed always produces the same
//! layout, which keeps tests and benches reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::types::{Coord, GRID_HEIGHT, GRID_WIDTH};

/// Deterministic source of grid cells.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    rng: Pcg32,
    seed: u64,
}

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform cell in `[0, GRID_WIDTH) x [0, GRID_HEIGHT)`.
    pub fn next_cell(&mut self) -> Coord {
        let x = self.rng.random_range(0..GRID_WIDTH);
        let y = self.rng.random_range(0..GRID_HEIGHT);
        Coord::new(x, y)
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(1)
    }
}
