//! Game state module - the turn state machine
//!
//! Owns the deck and every counter. The display surface only talks to it
//! through [`GameState::apply_action`] (or the individual operations),
//! [`GameState::tick`] and [`GameState::take_notice`], and reads it back via
//! snapshots.

use tracing::{debug, info};

use crate::deck::{random_color_except, Deck};
use crate::rng::SimpleRng;
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::types::*;

/// Where the current turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// No card chosen.
    Idle,
    /// One card chosen, waiting for the second.
    OneChosen,
    /// Two cards chosen and input locked (mismatch delay running).
    Resolving,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Deck,
    rng: SimpleRng,
    turns: u32,
    score: u32,
    chances: u32,
    choice_one: Option<CardId>,
    choice_two: Option<CardId>,
    input_locked: bool,
    /// One-shot countdown for a mismatched pair. `Some` while running.
    mismatch_timer_ms: Option<u32>,
    mismatch_delay_ms: u32,
    /// Monotonic deal id (increments on every regeneration).
    episode_id: u32,
    /// Pending win/loss notice (consumed by the display surface).
    notice: Option<GameNotice>,
}

impl GameState {
    /// Create a new game and deal the first deck from `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let deck = Deck::generate(&mut rng);
        Self::with_rng(deck, rng)
    }

    /// Start from a fixed first deck. Later deals still come from `seed`.
    pub fn from_deck(deck: Deck, seed: u32) -> Self {
        Self::with_rng(deck, SimpleRng::new(seed))
    }

    fn with_rng(deck: Deck, rng: SimpleRng) -> Self {
        Self {
            deck,
            rng,
            turns: 0,
            score: 0,
            chances: STARTING_CHANCES,
            choice_one: None,
            choice_two: None,
            input_locked: false,
            mismatch_timer_ms: None,
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            episode_id: 0,
            notice: None,
        }
    }

    pub fn with_mismatch_delay_ms(mut self, delay_ms: u32) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn chances(&self) -> u32 {
        self.chances
    }

    pub fn choice_one(&self) -> Option<CardId> {
        self.choice_one
    }

    pub fn choice_two(&self) -> Option<CardId> {
        self.choice_two
    }

    pub fn input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn mismatch_delay_ms(&self) -> u32 {
        self.mismatch_delay_ms
    }

    pub fn phase(&self) -> TurnPhase {
        match (self.choice_one, self.choice_two) {
            (Some(_), Some(_)) => TurnPhase::Resolving,
            (Some(_), None) => TurnPhase::OneChosen,
            _ => TurnPhase::Idle,
        }
    }

    /// Face up: chosen this turn, or already matched.
    pub fn is_flipped(&self, id: CardId) -> bool {
        self.choice_one == Some(id)
            || self.choice_two == Some(id)
            || self.deck.get(id).map(|c| c.matched).unwrap_or(false)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (slot, card) in out.cards.iter_mut().zip(self.deck.cards().iter()) {
            *slot = CardSnapshot {
                flipped: self.is_flipped(card.id),
                ..CardSnapshot::from(*card)
            };
        }
        out.turns = self.turns;
        out.score = self.score;
        out.chances = self.chances;
        out.choice_one = self.choice_one;
        out.choice_two = self.choice_two;
        out.input_locked = self.input_locked;
        out.mismatch_ms = self.mismatch_timer_ms.unwrap_or(0);
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Choose a card. Returns false when the choice is ignored.
    ///
    /// Ignored while input is locked, for unknown ids, for matched cards, and
    /// for a card that is already one of the pending choices.
    pub fn select_card(&mut self, id: CardId) -> bool {
        if self.input_locked {
            debug!(card = id, "selection ignored: input locked");
            return false;
        }
        let Some(card) = self.deck.get(id) else {
            debug!(card = id, "selection ignored: no such card");
            return false;
        };
        if card.matched || self.choice_one == Some(id) || self.choice_two == Some(id) {
            debug!(card = id, "selection ignored: already face up");
            return false;
        }

        if self.choice_one.is_none() {
            debug!(card = id, color = card.color.as_str(), "first card chosen");
            self.choice_one = Some(id);
        } else {
            debug!(card = id, color = card.color.as_str(), "second card chosen");
            self.choice_two = Some(id);
            self.resolve_selection();
        }
        true
    }

    /// Evaluate the two pending choices.
    fn resolve_selection(&mut self) {
        let (Some(first), Some(second)) = (self.choice_one, self.choice_two) else {
            return;
        };
        let (Some(a), Some(b)) = (self.deck.get(first), self.deck.get(second)) else {
            return;
        };
        let (color, other) = (a.color, b.color);

        self.input_locked = true;

        if color == other {
            for card in self.deck.iter_mut() {
                if card.color == color {
                    card.matched = true;
                    card.color = random_color_except(&mut self.rng, card.color);
                }
            }
            self.score += 1;
            debug!(
                first,
                second,
                color = color.as_str(),
                score = self.score,
                "pair matched"
            );

            self.finish_turn();
            self.check_win();
        } else {
            self.chances = self.chances.saturating_sub(1);
            debug!(first, second, chances = self.chances, "pair mismatched");

            if self.mismatch_delay_ms == 0 {
                self.complete_mismatch();
            } else {
                self.mismatch_timer_ms = Some(self.mismatch_delay_ms);
            }
        }
    }

    /// Advance the clock. Returns true when a pending mismatch resolved.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.mismatch_timer_ms else {
            return false;
        };

        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining > 0 {
            self.mismatch_timer_ms = Some(remaining);
            return false;
        }

        self.complete_mismatch();
        true
    }

    fn complete_mismatch(&mut self) {
        self.mismatch_timer_ms = None;
        self.finish_turn();
        self.check_loss();
    }

    fn finish_turn(&mut self) {
        self.choice_one = None;
        self.choice_two = None;
        self.turns += 1;
        self.input_locked = false;
    }

    /// Reset with a win notice once the score reaches [`WIN_SCORE`].
    pub fn check_win(&mut self) -> bool {
        if self.score != WIN_SCORE {
            return false;
        }

        info!(turns = self.turns, "game won");
        self.notice = Some(GameNotice::Won { turns: self.turns });
        self.regenerate();
        self.turns = 0;
        self.score = 0;
        self.chances = WIN_RESET_CHANCES;
        true
    }

    /// Reset with a loss notice once no chances are left.
    pub fn check_loss(&mut self) -> bool {
        if self.chances != 0 {
            return false;
        }

        info!(score = self.score, "game lost");
        self.notice = Some(GameNotice::Lost { score: self.score });
        self.regenerate();
        self.turns = 0;
        self.score = 0;
        self.chances = LOSS_RESET_CHANCES;
        true
    }

    /// Deal a fresh deck. Turns, score and chances are left alone.
    ///
    /// Pending choices are dropped since their ids now name different cards.
    /// A running mismatch delay still completes its turn.
    pub fn new_game(&mut self) {
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.deck = Deck::generate(&mut self.rng);
        self.choice_one = None;
        self.choice_two = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "new deck dealt");
    }

    /// Take the notice emitted by the last win or loss, if any.
    pub fn take_notice(&mut self) -> Option<GameNotice> {
        self.notice.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(id) => self.select_card(id),
            GameAction::NewGame => {
                self.new_game();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
