//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is diffed and flushed to the
//! terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout in one place so drawing and mouse hit-testing agree
//! - Redraw only when something visible changed

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod throttle;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{BoxGlyphs, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewOverlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::{view_fingerprint, RenderThrottle};
