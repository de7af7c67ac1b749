use crate::deck::Card;
use crate::types::{CardColor, CardId, DECK_SIZE, STARTING_CHANCES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub id: CardId,
    pub color: CardColor,
    pub matched: bool,
    /// Face up: a pending choice or already matched.
    pub flipped: bool,
}

impl From<Card> for CardSnapshot {
    fn from(value: Card) -> Self {
        Self {
            id: value.id,
            color: value.color,
            matched: value.matched,
            flipped: value.matched,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [CardSnapshot; DECK_SIZE],
    pub turns: u32,
    pub score: u32,
    pub chances: u32,
    pub choice_one: Option<CardId>,
    pub choice_two: Option<CardId>,
    pub input_locked: bool,
    /// Remaining mismatch delay, 0 when no delay is running.
    pub mismatch_ms: u32,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            *card = CardSnapshot {
                id: i as CardId,
                color: CardColor::Red,
                matched: false,
                flipped: false,
            };
        }
        self.turns = 0;
        self.score = 0;
        self.chances = STARTING_CHANCES;
        self.choice_one = None;
        self.choice_two = None;
        self.input_locked = false;
        self.mismatch_ms = 0;
        self.episode_id = 0;
    }

    pub fn card(&self, id: CardId) -> Option<&CardSnapshot> {
        self.cards.get(id as usize)
    }

    /// True while nothing is animating, so a redraw can wait for a change.
    pub fn is_static(&self) -> bool {
        self.mismatch_ms == 0
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let blank = CardSnapshot {
            id: 0,
            color: CardColor::Red,
            matched: false,
            flipped: false,
        };
        let mut s = Self {
            cards: [blank; DECK_SIZE],
            turns: 0,
            score: 0,
            chances: 0,
            choice_one: None,
            choice_two: None,
            input_locked: false,
            mismatch_ms: 0,
            episode_id: 0,
        };
        s.clear();
        s
    }
}
