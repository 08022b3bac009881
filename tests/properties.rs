//! Property tests for the engine's structural invariants.

use klondike_engine::{Game, GameConfig, GameStatus, Pile};
use proptest::prelude::*;

/// Take one scripted step: a draw on some picks or when stuck, otherwise
/// a pick-indexed legal move. Returns whether anything mutated.
fn step(game: &mut Game, pick: usize) -> bool {
    if game.status() != GameStatus::Playing {
        return false;
    }
    let moves = game.legal_moves();
    if moves.is_empty() || pick % 4 == 0 {
        game.draw_from_stock().is_ok()
    } else {
        game.apply_move(moves[pick % moves.len()]).is_ok()
    }
}

proptest! {
    #[test]
    fn deal_partitions_the_full_deck(seed in any::<u64>()) {
        let game = Game::with_seed(GameConfig::draw_one(), seed);
        let state = game.state();

        prop_assert!(state.is_consistent());
        prop_assert_eq!(state.stock().len(), 24);
        prop_assert!(state.stock().iter().all(|card| !card.is_face_up()));
        prop_assert!(state.waste().is_empty());
        prop_assert!(state.foundations().iter().all(Pile::is_empty));
        for (index, column) in state.tableau().iter().enumerate() {
            prop_assert_eq!(column.len(), index + 1);
            prop_assert_eq!(column.face_up_len(), 1);
        }
    }

    #[test]
    fn same_seed_deals_the_same_game(seed in any::<u64>()) {
        let first = Game::with_seed(GameConfig::draw_one(), seed);
        let second = Game::with_seed(GameConfig::draw_one(), seed);

        prop_assert_eq!(first.state(), second.state());
    }

    #[test]
    fn play_never_breaks_the_card_partition(
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..1000, 0..60),
    ) {
        let mut game = Game::with_seed(GameConfig::draw_three(), seed);

        for &pick in &picks {
            step(&mut game, pick);
            prop_assert!(game.state().is_consistent());
        }
    }

    #[test]
    fn undo_is_a_one_step_inverse(
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..1000, 0..30),
    ) {
        let mut game = Game::with_seed(GameConfig::draw_one(), seed);

        for &pick in &picks {
            let before = game.state().clone();
            if step(&mut game, pick) {
                game.undo().unwrap();
                prop_assert_eq!(game.state(), &before);
                // The state is back to `before`, so the same pick repeats
                // the same mutation and the walk continues.
                step(&mut game, pick);
            }
        }
    }

    #[test]
    fn save_and_load_round_trip(
        seed in any::<u64>(),
        picks in proptest::collection::vec(0usize..1000, 0..40),
    ) {
        let mut game = Game::with_seed(GameConfig::draw_three(), seed);
        for &pick in &picks {
            step(&mut game, pick);
        }

        let restored = Game::from_json(&game.to_json()).unwrap();

        prop_assert_eq!(restored.state(), game.state());
        prop_assert_eq!(restored.config(), game.config());
        prop_assert_eq!(restored.undo_depth(), game.undo_depth());
    }
}
