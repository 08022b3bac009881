//! Move legality: pure checks over a game state.
//!
//! `validate` never mutates — it is safe to call repeatedly (hover
//! highlighting, hint generation) and its verdict is exactly what
//! `Game::apply_move` enforces before touching any pile.

use crate::core::{Card, GameError, Result};
use crate::game::GameState;
use crate::piles::{Pile, PileId};

use super::moves::Move;

/// Check a candidate move against the rules.
///
/// `Ok(())` means [`Game::apply_move`](crate::Game::apply_move) would
/// accept the identical move; any error identifies the first rule the
/// move breaks, and repeating the same move yields the same error.
pub fn validate(state: &GameState, mv: Move) -> Result<()> {
    if mv.source == mv.target {
        return Err(GameError::NoOpMove);
    }
    let source = state.pile(mv.source).ok_or(GameError::UnknownPile)?;
    let target = state.pile(mv.target).ok_or(GameError::UnknownPile)?;

    let first = eligible_run_head(source, mv.count)?;
    target.accepts_run(first, mv.count)
}

/// Verify that the top `count` cards of `source` form a movable run and
/// return the run's deepest card.
///
/// Non-tableau sources move exactly one card; the run itself must be
/// entirely face-up and a valid descending alternating-color sequence.
/// Stock cards are face-down by definition, so the stock never yields an
/// eligible run — the only way out of the stock is a draw.
fn eligible_run_head(source: &Pile, count: usize) -> Result<Card> {
    if count == 0 || count > source.len() {
        return Err(GameError::IllegalRun);
    }
    if !source.kind().is_tableau() && count != 1 {
        return Err(GameError::IllegalRun);
    }

    let start = source.len() - count;
    let first = source.get(start).ok_or(GameError::IllegalRun)?;
    if !first.is_face_up() {
        return Err(GameError::IllegalRun);
    }

    let mut previous = first;
    for card in source.iter().skip(start + 1) {
        if !card.stacks_on(previous) {
            return Err(GameError::IllegalRun);
        }
        previous = card;
    }
    Ok(first)
}

/// Enumerate every card move `validate` currently accepts.
///
/// Draw/recycle is not part of the enumeration — it is a separate
/// operation that is available whenever the stock and waste are not both
/// empty.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut destinations = Vec::with_capacity(11);
    destinations.extend(PileId::FOUNDATIONS);
    destinations.extend(PileId::TABLEAU);

    let mut sources: Vec<(PileId, usize)> = vec![(PileId::Waste, 1)];
    sources.extend(PileId::FOUNDATIONS.into_iter().map(|id| (id, 1)));
    for id in PileId::TABLEAU {
        let movable = state.pile(id).map_or(0, Pile::face_up_len);
        sources.push((id, movable));
    }

    let mut moves = Vec::new();
    for (source, max_count) in sources {
        for count in 1..=max_count {
            for &target in &destinations {
                let mv = Move {
                    source,
                    count,
                    target,
                };
                if validate(state, mv).is_ok() {
                    moves.push(mv);
                }
            }
        }
    }
    moves
}
