//! The authoritative game state: thirteen piles plus statistics.
//!
//! A `GameState` is owned exclusively by a [`Game`](super::Game) and only
//! mutated through it; everything public here is a read-only query. The
//! cards across all piles are always exactly the 52-card deck partitioned
//! with no overlap — cards move, they are never copied or dropped.

use rustc_hash::FxHashSet;

use crate::core::{Card, GameRng, Rank, Suit, DECK_SIZE};
use crate::piles::{Pile, PileId};

use super::history::Snapshot;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;
/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 4;

/// Lifecycle of a single game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// The opening deal is in progress.
    Dealing,
    /// Moves are being accepted.
    Playing,
    /// All four foundations are complete. Terminal.
    Won,
    /// The player walked away before finishing. Terminal.
    Abandoned,
}

impl GameStatus {
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    /// Whether the game can no longer be mutated.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Abandoned)
    }
}

/// Scalar counters carried alongside the piles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct GameStats {
    pub score: u32,
    pub move_count: u32,
    pub recycles: u32,
    pub elapsed_seconds: u64,
    pub seed: u64,
}

/// Full layout and statistics for one game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    stock: Pile,
    waste: Pile,
    foundations: [Pile; FOUNDATION_PILES],
    tableau: [Pile; TABLEAU_COLUMNS],
    score: u32,
    move_count: u32,
    recycles: u32,
    elapsed_seconds: u64,
    seed: u64,
    status: GameStatus,
}

impl GameState {
    /// Shuffle a fresh deck from `seed` and deal the opening layout:
    /// column `i` takes the next `i + 1` cards with only the last one
    /// face-up, and the remaining 24 cards form the face-down stock.
    pub(crate) fn deal(seed: u64) -> Self {
        let mut state = Self::empty(seed);

        let mut rng = GameRng::new(seed);
        let mut deck = Card::standard_deck();
        rng.shuffle(&mut deck);

        let mut cursor = 0;
        for (index, column) in state.tableau.iter_mut().enumerate() {
            for _ in 0..=index {
                column.push_top(deck[cursor]);
                cursor += 1;
            }
            column.expose_top();
        }
        for &card in &deck[cursor..] {
            state.stock.push_top(card);
        }

        log::info!("dealt new game from seed {seed}");
        state.status = GameStatus::Playing;
        state
    }

    fn empty(seed: u64) -> Self {
        Self {
            stock: Pile::new(PileId::Stock),
            waste: Pile::new(PileId::Waste),
            foundations: std::array::from_fn(|i| Pile::new(PileId::Foundation(Suit::ALL[i]))),
            tableau: std::array::from_fn(|i| Pile::new(PileId::Tableau(i as u8))),
            score: 0,
            move_count: 0,
            recycles: 0,
            elapsed_seconds: 0,
            seed,
            status: GameStatus::Dealing,
        }
    }

    pub(crate) fn from_parts(
        stock: Pile,
        waste: Pile,
        foundations: [Pile; FOUNDATION_PILES],
        tableau: [Pile; TABLEAU_COLUMNS],
        stats: GameStats,
    ) -> Self {
        let mut state = Self {
            stock,
            waste,
            foundations,
            tableau,
            score: stats.score,
            move_count: stats.move_count,
            recycles: stats.recycles,
            elapsed_seconds: stats.elapsed_seconds,
            seed: stats.seed,
            status: GameStatus::Playing,
        };
        if state.check_win() {
            state.status = GameStatus::Won;
        }
        state
    }

    // === Pile access ===

    /// Resolve a pile identifier; `None` for an out-of-range tableau
    /// index.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(suit) => Some(&self.foundations[suit.index()]),
            PileId::Tableau(index) => self.tableau.get(usize::from(index)),
        }
    }

    fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(suit) => Some(&mut self.foundations[suit.index()]),
            PileId::Tableau(index) => self.tableau.get_mut(usize::from(index)),
        }
    }

    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &Pile {
        &self.foundations[suit.index()]
    }

    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    #[must_use]
    pub fn tableau_column(&self, index: usize) -> Option<&Pile> {
        self.tableau.get(index)
    }

    /// Iterate all thirteen piles.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        [&self.stock, &self.waste]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableau.iter())
    }

    // === Statistics ===

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Completed waste-to-stock recycles.
    #[must_use]
    pub fn recycles(&self) -> u32 {
        self.recycles
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// The seed this game was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    // === Queries ===

    /// True exactly when every foundation holds all thirteen ranks.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.foundations
            .iter()
            .all(|pile| pile.len() == Rank::ALL.len())
    }

    /// Whether the piles together hold exactly the 52 unique cards.
    ///
    /// Moves transfer cards rather than copying them, so this holds after
    /// every operation; debug builds re-check it after each mutation.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen: FxHashSet<(Rank, Suit)> = FxHashSet::default();
        let mut total = 0usize;
        for pile in self.piles() {
            for card in pile.iter() {
                total += 1;
                if !seen.insert((card.rank(), card.suit())) {
                    return false;
                }
            }
        }
        total == DECK_SIZE
    }

    // === Mutation (crate-internal; every caller validates first) ===

    /// Move the validated top `count` cards of `source` onto `target`,
    /// exposing the card left uncovered.
    pub(crate) fn transfer(&mut self, source: PileId, count: usize, target: PileId) {
        let run = {
            let pile = self.pile_mut(source).expect("move was validated");
            let run = pile.split_top(count);
            pile.expose_top();
            run
        };
        self.pile_mut(target)
            .expect("move was validated")
            .append_run(run);
    }

    /// Turn up to `max` cards from the stock onto the waste, face-up.
    /// Returns how many actually moved.
    pub(crate) fn draw_to_waste(&mut self, max: usize) -> usize {
        let mut drawn = 0;
        while drawn < max {
            match self.stock.pop_top() {
                Some(card) => {
                    self.waste.push_top(card.turned_up());
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Move the whole waste back into the empty stock, face-down, in
    /// reversed order, so drawing again repeats the original sequence.
    pub(crate) fn recycle_waste(&mut self) -> usize {
        let cards = self.waste.take_all();
        let count = cards.len();
        for card in cards.iter().rev() {
            self.stock.push_top(card.turned_down());
        }
        count
    }

    /// Apply a score delta against the zero floor; returns the effective
    /// delta.
    pub(crate) fn add_score(&mut self, delta: i32) -> i32 {
        let before = i64::from(self.score);
        let after = (before + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        self.score = after as u32;
        (after - before) as i32
    }

    pub(crate) fn bump_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn bump_recycles(&mut self) {
        self.recycles += 1;
    }

    pub(crate) fn add_elapsed(&mut self, seconds: u64) {
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(seconds);
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            stock: self.stock.clone(),
            waste: self.waste.clone(),
            foundations: self.foundations.clone(),
            tableau: self.tableau.clone(),
            score: self.score,
            move_count: self.move_count,
            recycles: self.recycles,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            stock,
            waste,
            foundations,
            tableau,
            score,
            move_count,
            recycles,
        } = snapshot;
        self.stock = stock;
        self.waste = waste;
        self.foundations = foundations;
        self.tableau = tableau;
        self.score = score;
        self.move_count = move_count;
        self.recycles = recycles;
    }
}
