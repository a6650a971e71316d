//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Direction`] headings and
//! the quit signal. Whether a heading is legal (no reversal) is decided by the
//! simulation, not here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{direction_for_key, should_quit};
