//! Core types module - shared data structures and constants
//!
//! Pure data types used by the game controller, the input layer and the
//! terminal view. Nothing in here performs I/O.
//!
//! # Deck Layout
//!
//! - **Palette**: 6 colours, each dealt twice
//! - **Deck**: 12 cards, ids `0..12`
//! - **Grid**: 4 columns by 3 rows, card id `n` sits at column `n % 4`, row `n / 4`
//!
//! # Rules Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_SCORE` | 6 | Matches needed to win |
//! | `STARTING_CHANCES` | 5 | Mismatches allowed in the first game |
//! | `WIN_RESET_CHANCES` | 5 | Chances after a win reset |
//! | `LOSS_RESET_CHANCES` | 10 | Chances after a loss reset |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays face up |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{CardColor, GameAction, DECK_SIZE, PALETTE};
//!
//! assert_eq!(PALETTE.len() * 2, DECK_SIZE);
//! assert_eq!(CardColor::from_str("Purple"), Some(CardColor::Purple));
//! assert_eq!(GameAction::Select(3).as_str(), "select");
//! ```

/// Number of distinct colours in the palette.
pub const PAIR_COUNT: usize = 6;

/// Cards per deck (every palette colour twice).
pub const DECK_SIZE: usize = PAIR_COUNT * 2;

/// Grid columns.
pub const GRID_COLUMNS: usize = 4;

/// Grid rows.
pub const GRID_ROWS: usize = DECK_SIZE / GRID_COLUMNS;

/// Score that ends a game as a win.
pub const WIN_SCORE: u32 = PAIR_COUNT as u32;

/// Chances at the very first deal.
pub const STARTING_CHANCES: u32 = 5;

/// Chances restored by a win reset.
pub const WIN_RESET_CHANCES: u32 = 5;

/// Chances restored by a loss reset.
pub const LOSS_RESET_CHANCES: u32 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay before a mismatched pair flips back and input unlocks.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Card identity within one deck (`0..DECK_SIZE`).
pub type CardId = u8;

/// Card colours.
///
/// The declaration order is the palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

/// The fixed palette every deck is dealt from.
pub const PALETTE: [CardColor; PAIR_COUNT] = [
    CardColor::Red,
    CardColor::Blue,
    CardColor::Green,
    CardColor::Yellow,
    CardColor::Purple,
    CardColor::Orange,
];

impl CardColor {
    /// Parse a colour name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use memory_match_types::CardColor;
    ///
    /// assert_eq!(CardColor::from_str("red"), Some(CardColor::Red));
    /// assert_eq!(CardColor::from_str("ORANGE"), Some(CardColor::Orange));
    /// assert_eq!(CardColor::from_str("black"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(CardColor::Red),
            "blue" => Some(CardColor::Blue),
            "green" => Some(CardColor::Green),
            "yellow" => Some(CardColor::Yellow),
            "purple" => Some(CardColor::Purple),
            "orange" => Some(CardColor::Orange),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Purple => "purple",
            CardColor::Orange => "orange",
        }
    }

    /// Position of this colour in [`PALETTE`].
    pub fn palette_index(&self) -> usize {
        match self {
            CardColor::Red => 0,
            CardColor::Blue => 1,
            CardColor::Green => 2,
            CardColor::Yellow => 3,
            CardColor::Purple => 4,
            CardColor::Orange => 5,
        }
    }
}

/// Actions the display surface can ask the controller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the card with this id.
    Select(CardId),
    /// Deal a fresh deck (counters are kept).
    NewGame,
}

impl GameAction {
    /// Short name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::NewGame => "newGame",
        }
    }
}

/// User-facing notice emitted when a game ends.
///
/// The controller has already reset by the time a notice is taken, so the
/// payload carries the numbers from just before the reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameNotice {
    Won { turns: u32 },
    Lost { score: u32 },
}

impl GameNotice {
    pub fn title(&self) -> &'static str {
        match self {
            GameNotice::Won { .. } => "YOU WIN",
            GameNotice::Lost { .. } => "GAME OVER",
        }
    }

    /// Message body shown in the modal.
    ///
    /// ```
    /// use memory_match_types::GameNotice;
    ///
    /// assert_eq!(
    ///     GameNotice::Lost { score: 2 }.message(),
    ///     "Game Over! Your score is 2. Try again."
    /// );
    /// ```
    pub fn message(&self) -> String {
        match self {
            GameNotice::Won { .. } => format!(
                "Congratulations! You've reached a score of {}. Starting a new game.",
                WIN_SCORE
            ),
            GameNotice::Lost { score } => {
                format!("Game Over! Your score is {}. Try again.", score)
            }
        }
    }
}
