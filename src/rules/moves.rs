//! The move value handed to the validator and the state machine.

use std::fmt;

use crate::piles::PileId;

/// A candidate move: `count` cards off the top of `source`, onto `target`.
///
/// Moves are ephemeral values built per attempt — typically by an input
/// layer translating a drag gesture — and are never persisted. `count`
/// greater than one is only meaningful for tableau sources; every other
/// source moves exactly one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: PileId,
    pub count: usize,
    pub target: PileId,
}

impl Move {
    /// Single-card move.
    #[must_use]
    pub const fn single(source: PileId, target: PileId) -> Self {
        Self {
            source,
            count: 1,
            target,
        }
    }

    /// A run of `count` cards between tableau columns.
    #[must_use]
    pub const fn run(from_column: u8, count: usize, to_column: u8) -> Self {
        Self {
            source: PileId::Tableau(from_column),
            count,
            target: PileId::Tableau(to_column),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{} -> {}", self.source, self.target)
        } else {
            write!(f, "{} cards {} -> {}", self.count, self.source, self.target)
        }
    }
}
