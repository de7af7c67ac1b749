//! Integration tests for full game flows through the facade crate.

use memory_match::core::{GameSnapshot, GameState, TurnPhase};
use memory_match::types::{
    CardId, GameAction, GameNotice, DECK_SIZE, LOSS_RESET_CHANCES, MISMATCH_DELAY_MS,
    STARTING_CHANCES, TICK_MS, WIN_RESET_CHANCES, WIN_SCORE,
};

/// First face-down card and its face-down partner.
fn unmatched_pair(snap: &GameSnapshot) -> (CardId, CardId) {
    let first = snap.cards.iter().find(|c| !c.matched).unwrap();
    let partner = snap
        .cards
        .iter()
        .find(|c| !c.matched && c.id != first.id && c.color == first.color)
        .unwrap();
    (first.id, partner.id)
}

/// Two face-down cards with different colours.
fn unmatched_mismatch(snap: &GameSnapshot) -> (CardId, CardId) {
    let first = snap.cards.iter().find(|c| !c.matched).unwrap();
    let other = snap
        .cards
        .iter()
        .find(|c| !c.matched && c.color != first.color)
        .unwrap();
    (first.id, other.id)
}

fn play_match(game: &mut GameState) {
    let (a, b) = unmatched_pair(&game.snapshot());
    assert!(game.apply_action(GameAction::Select(a)));
    assert!(game.apply_action(GameAction::Select(b)));
}

fn play_mismatch(game: &mut GameState) {
    let (a, b) = unmatched_mismatch(&game.snapshot());
    assert!(game.apply_action(GameAction::Select(a)));
    assert!(game.apply_action(GameAction::Select(b)));
    run_clock(game, MISMATCH_DELAY_MS);
}

/// Advance in fixed ticks like the binary does.
fn run_clock(game: &mut GameState, ms: u32) {
    let mut elapsed = 0;
    while elapsed < ms {
        game.tick(TICK_MS);
        elapsed += TICK_MS;
    }
}

#[test]
fn test_fresh_game() {
    let game = GameState::new(12345);
    let snap = game.snapshot();

    assert_eq!(snap.turns, 0);
    assert_eq!(snap.score, 0);
    assert_eq!(snap.chances, STARTING_CHANCES);
    assert!(snap.cards.iter().all(|c| !c.flipped && !c.matched));
    assert_eq!(game.phase(), TurnPhase::Idle);
}

#[test]
fn test_selecting_same_card_twice_never_pairs_it() {
    let mut game = GameState::new(9);

    assert!(game.select_card(7));
    assert!(!game.select_card(7));

    assert_eq!(game.phase(), TurnPhase::OneChosen);
    assert_eq!(game.choice_one(), Some(7));
    assert_eq!(game.choice_two(), None);
}

#[test]
fn test_matched_cards_stay_face_up_and_locked() {
    let mut game = GameState::new(31);
    let (a, b) = unmatched_pair(&game.snapshot());
    game.select_card(a);
    game.select_card(b);

    for _ in 0..3 {
        assert!(!game.select_card(a));
        assert!(!game.select_card(b));
        play_mismatch(&mut game);
        let snap = game.snapshot();
        assert!(snap.cards[a as usize].flipped && snap.cards[a as usize].matched);
        assert!(snap.cards[b as usize].flipped && snap.cards[b as usize].matched);
    }
}

#[test]
fn test_win_from_score_five() {
    let mut game = GameState::new(2024);
    for _ in 0..WIN_SCORE - 1 {
        play_match(&mut game);
    }
    assert_eq!(game.score(), 5);
    let episode = game.episode_id();

    play_match(&mut game);

    assert_eq!(game.take_notice(), Some(GameNotice::Won { turns: 6 }));
    assert_eq!(game.turns(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.chances(), WIN_RESET_CHANCES);
    assert_eq!(game.episode_id(), episode + 1);
    assert!(game.snapshot().cards.iter().all(|c| !c.flipped));
}

#[test]
fn test_loss_from_one_chance() {
    let mut game = GameState::new(77);
    play_match(&mut game);
    for _ in 0..STARTING_CHANCES - 1 {
        play_mismatch(&mut game);
    }
    assert_eq!(game.chances(), 1);

    let (a, b) = unmatched_mismatch(&game.snapshot());
    game.select_card(a);
    game.select_card(b);
    assert!(game.input_locked());
    assert!(game.take_notice().is_none());

    run_clock(&mut game, MISMATCH_DELAY_MS);

    assert_eq!(game.take_notice(), Some(GameNotice::Lost { score: 1 }));
    assert_eq!(game.turns(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.chances(), LOSS_RESET_CHANCES);
    assert!(!game.input_locked());
}

#[test]
fn test_input_ignored_during_mismatch_delay() {
    let mut game = GameState::new(404);
    let (a, b) = unmatched_mismatch(&game.snapshot());
    game.select_card(a);
    game.select_card(b);

    let free = (0..DECK_SIZE as CardId)
        .find(|id| *id != a && *id != b)
        .unwrap();
    run_clock(&mut game, MISMATCH_DELAY_MS / 2);
    assert!(game.input_locked());
    assert!(!game.apply_action(GameAction::Select(free)));
    assert_eq!(game.choice_one(), Some(a));
    assert_eq!(game.choice_two(), Some(b));

    run_clock(&mut game, MISMATCH_DELAY_MS / 2);
    assert!(!game.input_locked());
    assert!(game.apply_action(GameAction::Select(free)));
}

#[test]
fn test_every_resolution_counts_one_turn() {
    let mut game = GameState::new(8);

    play_mismatch(&mut game);
    assert_eq!(game.turns(), 1);
    play_match(&mut game);
    assert_eq!(game.turns(), 2);
    play_mismatch(&mut game);
    assert_eq!(game.turns(), 3);

    // A single pending choice is not a turn.
    let (a, _) = unmatched_pair(&game.snapshot());
    game.select_card(a);
    assert_eq!(game.turns(), 3);
}

#[test]
fn test_new_game_button_keeps_stats() {
    let mut game = GameState::new(1);
    play_match(&mut game);
    play_mismatch(&mut game);
    let before = game.snapshot();

    assert!(game.apply_action(GameAction::NewGame));
    let after = game.snapshot();

    assert_eq!(after.turns, before.turns);
    assert_eq!(after.score, before.score);
    assert_eq!(after.chances, before.chances);
    assert_eq!(after.episode_id, before.episode_id + 1);
    assert!(after.cards.iter().all(|c| !c.matched));
    assert!(game.take_notice().is_none());
}

#[test]
fn test_win_after_new_game_counts_carried_score() {
    let mut game = GameState::new(55);
    play_match(&mut game);
    play_match(&mut game);
    game.new_game();

    for _ in 0..WIN_SCORE - 3 {
        play_match(&mut game);
    }
    assert!(game.take_notice().is_none());
    play_match(&mut game);
    assert!(matches!(game.take_notice(), Some(GameNotice::Won { .. })));
    assert_eq!(game.score(), 0);
}

#[test]
fn test_many_games_in_a_row() {
    let mut game = GameState::new(3);
    for _ in 0..3 {
        for _ in 0..WIN_SCORE {
            play_match(&mut game);
        }
        assert!(matches!(game.take_notice(), Some(GameNotice::Won { .. })));
    }
    assert_eq!(game.episode_id(), 3);
}
