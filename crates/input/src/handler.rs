//! Keyboard cursor over the card grid.
//!
//! The cursor wraps around within its row and column. Card `n` sits at
//! column `n % GRID_COLUMNS`, row `n / GRID_COLUMNS`.

use crossterm::event::KeyEvent;

use crate::map::{handle_key_event, UiCommand};
use crate::types::{CardId, GameAction, DECK_SIZE, GRID_COLUMNS, GRID_ROWS};

/// Tracks the keyboard cursor.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    cursor: CardId,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> CardId {
        self.cursor
    }

    /// Move the cursor to a card (e.g. after a mouse click). Out-of-range ids are ignored.
    pub fn set_cursor(&mut self, id: CardId) {
        if (id as usize) < DECK_SIZE {
            self.cursor = id;
        }
    }

    /// Handle a key press. Cursor keys are consumed here; flips and new-game
    /// requests come back as actions for the controller.
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        match handle_key_event(key)? {
            UiCommand::CursorLeft => {
                self.step(-1, 0);
                None
            }
            UiCommand::CursorRight => {
                self.step(1, 0);
                None
            }
            UiCommand::CursorUp => {
                self.step(0, -1);
                None
            }
            UiCommand::CursorDown => {
                self.step(0, 1);
                None
            }
            UiCommand::Flip => Some(GameAction::Select(self.cursor)),
            UiCommand::NewGame => Some(GameAction::NewGame),
        }
    }

    fn step(&mut self, dx: i32, dy: i32) {
        let cols = GRID_COLUMNS as i32;
        let rows = GRID_ROWS as i32;
        let col = (self.cursor as i32 % cols + dx).rem_euclid(cols);
        let row = (self.cursor as i32 / cols + dy).rem_euclid(rows);
        self.cursor = (row * cols + col) as CardId;
    }
}
