use std::hash::{Hash, Hasher};

use crate::types::{Coord, Direction, Tile, FRUIT_COUNT};

/// Render-facing copy of the simulation state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Snake segments, head first.
    pub snake: Vec<Coord>,
    pub fruits: [Coord; FRUIT_COUNT],
    pub direction: Direction,
    pub pending: Option<Direction>,
    /// A start delay or reset pause is holding ticks back.
    pub holding: bool,
    pub episode_id: u32,
    pub tick_count: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.fruits = [Coord::default(); FRUIT_COUNT];
        self.direction = Direction::Up;
        self.pending = None;
        self.holding = false;
        self.episode_id = 0;
        self.tick_count = 0;
    }

    pub fn head(&self) -> Option<Coord> {
        self.snake.first().copied()
    }

    /// Every drawable tile with its palette entry: snake head, body, then fruits.
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        let snake = self.snake.iter().enumerate().map(|(i, &c)| {
            let tile = if i == 0 { Tile::Head } else { Tile::Body };
            (c, tile)
        });
        let fruits = self.fruits.iter().map(|&c| (c, Tile::Fruit));
        snake.chain(fruits)
    }

    /// FNV-1a hash of the snapshot, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fingerprint(FNV_OFFSET_BASIS);
        self.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            fruits: [Coord::default(); FRUIT_COUNT],
            direction: Direction::Up,
            pending: None,
            holding: false,
            episode_id: 0,
            tick_count: 0,
        }
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Fold `bytes` into a running 64-bit FNV-1a state.
fn fnv1a(state: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(state, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// `Hasher` over [`fnv1a`]; unlike `DefaultHasher` its output is stable.
struct Fingerprint(u64);

impl Hasher for Fingerprint {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 = fnv1a(self.0, bytes);
    }
}
