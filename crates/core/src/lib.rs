//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the deck generator and the turn state machine.
//! It has no dependencies on UI or I/O (only `tracing` events), making it:
//!
//! - **Deterministic**: Same seed deals identical decks
//! - **Testable**: Every rule is reachable through the public operations
//! - **Portable**: Can run behind any display surface (terminal, headless)
//!
//! # Module Structure
//!
//! - [`deck`]: 12-card deck generation and the cosmetic recolour helper
//! - [`game_state`]: Selection, match evaluation, scoring, win/loss resets
//! - [`rng`]: Seeded LCG with Fisher-Yates shuffle
//! - [`snapshot`]: Copyable view of the state for renderers
//!
//! # Game Rules
//!
//! - **Selection**: Flip two cards per turn; locked, matched or already chosen cards are ignored
//! - **Match**: Equal colours score a point and stay face up
//! - **Mismatch**: Costs a chance; both cards stay face up for 1000ms while input is locked
//! - **Win**: Score 6 deals a new deck and resets to 5 chances
//! - **Loss**: 0 chances deals a new deck and resets to 10 chances
//! - **New Game**: Deals a new deck and keeps turns, score and chances
//!
//! # Example
//!
//! ```
//! use memory_match_core::GameState;
//! use memory_match_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! let snap = game.snapshot();
//!
//! // Find the partner of card 0 and flip both.
//! let color = snap.cards[0].color;
//! let partner = snap.cards.iter().find(|c| c.id != 0 && c.color == color).unwrap().id;
//! game.apply_action(GameAction::Select(0));
//! game.apply_action(GameAction::Select(partner));
//!
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.turns(), 1);
//! ```
//!
//! # Timing
//!
//! The mismatch delay is a one-shot countdown. Call
//! [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use deck::{random_color_except, Card, Deck};
pub use game_state::{GameState, TurnPhase};
pub use rng::SimpleRng;
pub use snapshot::{CardSnapshot, GameSnapshot};
