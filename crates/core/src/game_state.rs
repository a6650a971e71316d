//! Game state module - the grid simulation
//!
//! Ties together the snake, the fruit field and the spawn RNG, and owns the
//! tick clock. The frame driver calls [`GameState::update`] once per loop
//! iteration with a monotonic millisecond clock; a simulation step runs only
//! once strictly more than `TICK_MS` has passed since the previous one.
//!
//! Start delay and reset pause are both expressed by pushing `last_tick_ms`
//! into the future, so nothing here ever blocks.

use arrayvec::ArrayVec;

use crate::fruit::FruitField;
use crate::rng::SpawnRng;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What a single simulation step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved; `eaten` lists the fruits consumed at the new head.
    Moved { eaten: ArrayVec<usize, FRUIT_COUNT> },
    /// The head ran into the body and the snake was respawned.
    Reset,
}

impl StepOutcome {
    pub fn fruits_eaten(&self) -> usize {
        match self {
            StepOutcome::Moved { eaten } => eaten.len(),
            StepOutcome::Reset => 0,
        }
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, StepOutcome::Reset)
    }
}

/// Complete simulation state, owned by the main loop.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    /// Heading buffered by input, committed on the next step.
    pending: Option<Direction>,
    fruits: FruitField,
    rng: SpawnRng,
    /// Monotonic run counter (increments on every reset).
    episode_id: u32,
    tick_count: u64,
    /// Clock value seen by the latest `start`/`update`.
    now_ms: u64,
    /// Time of the last tick; ahead of `now_ms` while holding.
    last_tick_ms: u64,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        let mut rng = SpawnRng::new(seed);
        let fruits = FruitField::scatter(&mut rng);
        Self::assemble(Snake::spawn(), fruits, rng)
    }

    /// Create a game with an explicit snake and fruit layout.
    ///
    /// The RNG is only consulted for respawns.
    pub fn from_parts(snake: Snake, fruits: [Coord; FRUIT_COUNT], seed: u64) -> Self {
        Self::assemble(snake, FruitField::from_cells(fruits), SpawnRng::new(seed))
    }

    fn assemble(snake: Snake, fruits: FruitField, rng: SpawnRng) -> Self {
        Self {
            snake,
            pending: None,
            fruits,
            rng,
            episode_id: 0,
            tick_count: 0,
            now_ms: 0,
            last_tick_ms: 0,
            started: false,
        }
    }

    /// Start the clock. The first tick waits out `START_DELAY_MS`.
    pub fn start(&mut self, now_ms: u64) {
        if self.started {
            return;
        }
        self.started = true;
        self.now_ms = now_ms;
        self.last_tick_ms = now_ms + START_DELAY_MS;
        log::info!(
            "game started: seed={} grid={}x{} fruits={}",
            self.rng.seed(),
            GRID_WIDTH,
            GRID_HEIGHT,
            FRUIT_COUNT
        );
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruits(&self) -> &[Coord; FRUIT_COUNT] {
        self.fruits.cells()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A start delay or reset pause is currently holding ticks back.
    pub fn holding(&self) -> bool {
        self.started && self.now_ms < self.last_tick_ms
    }

    /// Milliseconds until `update` may run the next step.
    pub fn time_until_tick(&self, now_ms: u64) -> u64 {
        if !self.started {
            return TICK_MS;
        }
        (self.last_tick_ms + TICK_MS + 1).saturating_sub(now_ms)
    }

    /// Buffer a heading for the next step.
    ///
    /// Rejects the exact reverse of the active heading. Accepted headings
    /// overwrite each other until the next step commits one.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let current = self.snake.direction();
        if direction == current.opposite() {
            log::trace!(
                "steer {} rejected: reverses {}",
                direction.as_str(),
                current.as_str()
            );
            return false;
        }
        self.pending = Some(direction);
        true
    }

    /// Run a step if the tick interval has elapsed.
    ///
    /// Returns `None` without touching the simulation when it has not, or
    /// when the game has not been started.
    pub fn update(&mut self, now_ms: u64) -> Option<StepOutcome> {
        self.now_ms = now_ms;
        if !self.started || now_ms.saturating_sub(self.last_tick_ms) <= TICK_MS {
            return None;
        }

        let outcome = self.step();
        self.last_tick_ms = if outcome.is_reset() {
            now_ms + RESET_PAUSE_MS
        } else {
            now_ms
        };
        Some(outcome)
    }

    /// One simulation step, ignoring the clock.
    pub fn step(&mut self) -> StepOutcome {
        self.tick_count = self.tick_count.wrapping_add(1);

        if let Some(direction) = self.pending.take() {
            self.snake.set_direction(direction);
        }

        // Check before shifting so a reset never sees a half-moved body.
        let next = self.snake.next_head();
        if self.snake.would_bite(next) {
            log::info!(
                "self-collision at ({}, {}) with length {}; resetting",
                next.x,
                next.y,
                self.snake.len()
            );
            self.reset();
            return StepOutcome::Reset;
        }

        self.snake.advance_to(next);

        let eaten = self.fruits.hits(next);
        for &index in &eaten {
            let moved_to = self.fruits.respawn(index, &mut self.rng);
            self.snake.grow();
            log::debug!(
                "fruit {} eaten at ({}, {}), respawned at ({}, {}); length {}",
                index,
                next.x,
                next.y,
                moved_to.x,
                moved_to.y,
                self.snake.len()
            );
        }

        StepOutcome::Moved { eaten }
    }

    fn reset(&mut self) {
        self.snake = Snake::spawn();
        self.pending = None;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend_from_slice(self.snake.segments());
        out.fruits = *self.fruits.cells();
        out.direction = self.snake.direction();
        out.pending = self.pending;
        out.holding = self.holding();
        out.episode_id = self.episode_id;
        out.tick_count = self.tick_count;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
