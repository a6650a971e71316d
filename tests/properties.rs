//! Property tests for the step rules.

use proptest::prelude::*;

use tui_snake::core::{GameState, Snake, StepOutcome};
use tui_snake::types::{Direction, INITIAL_LENGTH};

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// A tick, optionally preceded by a steer.
fn inputs() -> impl Strategy<Value = Vec<Option<Direction>>> {
    prop::collection::vec(prop::option::of(direction()), 1..300)
}

proptest! {
    #[test]
    fn length_follows_eaten_fruit_or_resets(seed in any::<u64>(), ticks in inputs()) {
        let mut state = GameState::new(seed);
        for steer in ticks {
            if let Some(dir) = steer {
                state.steer(dir);
            }
            let before = state.snake().len();
            match state.step() {
                StepOutcome::Reset => prop_assert_eq!(state.snake().len(), INITIAL_LENGTH),
                StepOutcome::Moved { eaten } => {
                    prop_assert_eq!(state.snake().len(), before + eaten.len())
                }
            }
        }
    }

    #[test]
    fn body_follows_the_head(seed in any::<u64>(), ticks in inputs()) {
        let mut state = GameState::new(seed);
        for steer in ticks {
            if let Some(dir) = steer {
                state.steer(dir);
            }
            let before = state.snake().segments().to_vec();
            let outcome = state.step();
            let after = state.snake().segments();

            if outcome.is_reset() {
                prop_assert_eq!(state.snake(), &Snake::spawn());
                continue;
            }
            prop_assert_eq!(&after[1..before.len()], &before[..before.len() - 1]);
        }
    }

    #[test]
    fn heading_never_reverses(seed in any::<u64>(), ticks in inputs()) {
        let mut state = GameState::new(seed);
        for steer in ticks {
            let before = state.direction();
            if let Some(dir) = steer {
                state.steer(dir);
            }
            if !state.step().is_reset() {
                prop_assert_ne!(state.direction(), before.opposite());
            }
        }
    }

    #[test]
    fn everything_stays_on_the_grid(seed in any::<u64>(), ticks in inputs()) {
        let mut state = GameState::new(seed);
        for steer in ticks {
            if let Some(dir) = steer {
                state.steer(dir);
            }
            state.step();
            prop_assert!(state.snake().segments().iter().all(|s| s.in_bounds()));
            prop_assert!(state.fruits().iter().all(|f| f.in_bounds()));
        }
    }

    #[test]
    fn updates_inside_the_interval_are_noops(seed in any::<u64>(), dt in 0u64..=70) {
        let mut state = GameState::new(seed);
        state.start(0);
        let t = 2_000;
        prop_assume!(state.update(t).is_some());

        let before = state.snapshot();
        prop_assert!(state.update(t + dt).is_none());
        prop_assert_eq!(state.snapshot(), before);
    }
}
