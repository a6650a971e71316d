//! Fruit field - a fixed set of fruits that are relocated, never removed.

use arrayvec::ArrayVec;

use crate::rng::SpawnRng;
use crate::types::{Coord, FRUIT_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FruitField {
    cells: [Coord; FRUIT_COUNT],
}

impl FruitField {
    /// Place every fruit on an independent random cell.
    pub fn scatter(rng: &mut SpawnRng) -> Self {
        Self {
            cells: std::array::from_fn(|_| rng.next_cell()),
        }
    }

    pub fn from_cells(cells: [Coord; FRUIT_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Coord; FRUIT_COUNT] {
        &self.cells
    }

    /// Indices of every fruit sitting on `cell`.
    pub fn hits(&self, cell: Coord) -> ArrayVec<usize, FRUIT_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn respawn(&mut self, index: usize, rng: &mut SpawnRng) -> Coord {
        let cell = rng.next_cell();
        self.cells[index] = cell;
        cell
    }
}
