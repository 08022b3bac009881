//! Undo snapshots: a bounded history of pre-mutation states.
//!
//! Snapshots hold `im` pile clones, so each entry shares structure with
//! the live state and costs a handful of handle copies, not a deck copy.

use im::Vector;

use crate::piles::Pile;

use super::state::{FOUNDATION_PILES, TABLEAU_COLUMNS};

/// A restorable copy of the layout and counters, captured just before a
/// mutation. Elapsed time is not captured: undo never rewinds the clock.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Snapshot {
    pub stock: Pile,
    pub waste: Pile,
    pub foundations: [Pile; FOUNDATION_PILES],
    pub tableau: [Pile; TABLEAU_COLUMNS],
    pub score: u32,
    pub move_count: u32,
    pub recycles: u32,
}

/// Bounded stack of snapshots; pushing past the cap discards the oldest.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct History {
    entries: Vector<Snapshot>,
    limit: usize,
}

impl History {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            entries: Vector::new(),
            limit,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub(crate) fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Snapshot> + '_ {
        self.entries.iter()
    }
}
