//! Deck generation.
//!
//! A deck is the palette dealt twice and shuffled. Card ids are the positions
//! in the shuffled order, so `deck.cards()[id]` is always the card with `id`.

use crate::rng::SimpleRng;
use crate::types::{CardColor, CardId, DECK_SIZE, PAIR_COUNT, PALETTE};

/// A single card in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub color: CardColor,
    pub matched: bool,
}

/// The 12 cards of one deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
}

impl Deck {
    /// Deal a fresh shuffled deck.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut colors = [CardColor::Red; DECK_SIZE];
        for (i, slot) in colors.iter_mut().enumerate() {
            *slot = PALETTE[i % PAIR_COUNT];
        }
        rng.shuffle(&mut colors);

        Self::from_colors(colors)
    }

    /// Build a deck with a fixed layout (ids follow array order).
    pub fn from_colors(colors: [CardColor; DECK_SIZE]) -> Self {
        let mut cards = [Card {
            id: 0,
            color: CardColor::Red,
            matched: false,
        }; DECK_SIZE];
        for (i, (card, color)) in cards.iter_mut().zip(colors).enumerate() {
            *card = Card {
                id: i as CardId,
                color,
                matched: false,
            };
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id as usize)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// How many cards currently show each palette colour.
    pub fn color_counts(&self) -> [usize; PAIR_COUNT] {
        let mut counts = [0usize; PAIR_COUNT];
        for card in &self.cards {
            counts[card.color.palette_index()] += 1;
        }
        counts
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }
}

/// Pick a palette colour different from `current`, uniformly.
pub fn random_color_except(rng: &mut SimpleRng, current: CardColor) -> CardColor {
    let pick = rng.next_range((PAIR_COUNT - 1) as u32) as usize;
    let skip = current.palette_index();
    // Index into the palette with `current` removed.
    if pick >= skip {
        PALETTE[pick + 1]
    } else {
        PALETTE[pick]
    }
}
