//! Terminal rendering for the snake game.
//!
//! The game view renders a snapshot into a plain framebuffer; the renderer
//! flushes framebuffers to a crossterm backend, sending only changed cells
//! after the first frame.
//!
//! - [`fb`]: cells, styles and the framebuffer itself
//! - [`game_view`]: snapshot to framebuffer (pure, no I/O)
//! - [`renderer`]: framebuffer to terminal
//! - [`render_throttle`]: frame pacing while the field is static

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
