//! Property tests for dealing and the turn state machine.

use memory_match::core::{Deck, GameState, SimpleRng, TurnPhase};
use memory_match::types::{CardId, GameAction, GameNotice, DECK_SIZE, PALETTE, TICK_MS, WIN_SCORE};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Select(CardId),
    Tick(u32),
    NewGame,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        6 => (0..DECK_SIZE as CardId).prop_map(Step::Select),
        3 => (1u32..=400).prop_map(Step::Tick),
        1 => Just(Step::NewGame),
    ]
}

proptest! {
    /// Property: every deal holds each palette colour exactly twice.
    #[test]
    fn prop_deck_has_each_colour_twice(seed in any::<u32>(), deals in 1usize..5) {
        let mut rng = SimpleRng::new(seed);
        for _ in 0..deals {
            let deck = Deck::generate(&mut rng);
            prop_assert_eq!(deck.cards().len(), DECK_SIZE);
            for color in PALETTE {
                let n = deck.cards().iter().filter(|c| c.color == color).count();
                prop_assert_eq!(n, 2, "colour {:?}", color);
            }
        }
    }

    /// Property: across arbitrary input, choices never alias, score stays in
    /// bounds and only drops on a reset, and turns only drop on a reset.
    #[test]
    fn prop_state_machine_invariants(
        seed in any::<u32>(),
        steps in proptest::collection::vec(step(), 1..200),
    ) {
        let mut game = GameState::new(seed);

        for s in steps {
            let before = game.snapshot();
            match s {
                Step::Select(id) => { game.apply_action(GameAction::Select(id)); }
                Step::Tick(ms) => { game.tick(ms); }
                Step::NewGame => { game.apply_action(GameAction::NewGame); }
            }
            let notice = game.take_notice();
            let after = game.snapshot();

            if let (Some(a), Some(b)) = (after.choice_one, after.choice_two) {
                prop_assert_ne!(a, b);
                prop_assert!(after.input_locked);
                prop_assert_eq!(game.phase(), TurnPhase::Resolving);
            }
            prop_assert!(after.score < WIN_SCORE);

            match notice {
                Some(GameNotice::Won { .. }) | Some(GameNotice::Lost { .. }) => {
                    prop_assert_eq!(after.score, 0);
                    prop_assert_eq!(after.turns, 0);
                }
                None => {
                    prop_assert!(after.score >= before.score);
                    prop_assert!(after.turns >= before.turns);
                    prop_assert!(after.turns - before.turns <= 1);
                }
            }

            for card in after.cards.iter() {
                if before.cards[card.id as usize].matched && after.episode_id == before.episode_id {
                    prop_assert!(card.matched && card.flipped);
                }
            }
        }
    }

    /// Property: a locked game ignores every selection until the delay ends.
    #[test]
    fn prop_locked_game_ignores_selection(seed in any::<u32>(), id in 0..DECK_SIZE as CardId) {
        let mut game = GameState::new(seed);
        let snap = game.snapshot();
        let first = snap.cards[0];
        let other = snap.cards.iter().find(|c| c.color != first.color).unwrap().id;
        game.select_card(0);
        game.select_card(other);

        prop_assert!(!game.select_card(id));
        prop_assert_eq!(game.choice_one(), Some(0));
        prop_assert_eq!(game.choice_two(), Some(other));

        while game.input_locked() {
            game.tick(TICK_MS);
        }
        prop_assert_eq!(game.turns(), 1);
    }
}
