//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto grid commands and keeps the keyboard
//! cursor, turning a flip on the cursor into a [`crate::types::GameAction`].
//! Mouse clicks are resolved by the view (it owns the layout) and only move
//! the cursor here.

pub mod handler;
pub mod map;

pub use memory_match_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_card_click, is_dismiss_key, should_quit, UiCommand};
