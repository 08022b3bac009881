//! The game state machine: validation-gated mutation of one owned state.
//!
//! Control flow for every mutation is the same: check the lifecycle
//! state, validate, snapshot, mutate, update statistics. A failed step
//! returns before anything changes, so callers always observe either the
//! old state or the fully updated one.

use crate::core::{GameConfig, GameError, GameRng, Result};
use crate::rules::{self, Move};
use crate::save;

use super::history::History;
use super::state::{GameState, GameStatus};

/// What a call to [`Game::draw_from_stock`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Cards were turned from the stock onto the waste.
    Drawn(usize),
    /// The stock was empty: the waste was recycled back into it.
    Recycled(usize),
}

/// A live Klondike game.
///
/// Owns its [`GameState`] exclusively. The presentation layer reads
/// through [`state`](Game::state) and mutates only through the methods
/// here; every mutating method either fully applies or leaves the state
/// untouched and reports why.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    history: History,
}

impl Game {
    /// Start a game from a fresh random seed.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_seed(config, GameRng::from_entropy().seed())
    }

    /// Start a game from an explicit seed. The same seed always deals
    /// the same layout.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            state: GameState::deal(seed),
            history: History::new(config.history_limit),
        }
    }

    pub(crate) fn from_parts(config: GameConfig, state: GameState, history: History) -> Self {
        Self {
            config,
            state,
            history,
        }
    }

    /// Read-only view of the layout and statistics.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Number of undoable steps currently retained.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Whether [`undo`](Game::undo) currently has anything to pop.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub(crate) fn history(&self) -> &History {
        &self.history
    }

    /// True exactly when every foundation holds Ace through King.
    #[must_use]
    pub fn check_win(&self) -> bool {
        self.state.check_win()
    }

    /// Every card move the rules currently allow.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.state)
    }

    /// Validate and apply a move. Returns the effective score delta.
    ///
    /// On any error the state is untouched, and retrying the identical
    /// illegal move returns the identical error.
    pub fn apply_move(&mut self, mv: Move) -> Result<i32> {
        self.check_playing()?;
        rules::validate(&self.state, mv)?;

        self.history.push(self.state.snapshot());
        self.state.transfer(mv.source, mv.count, mv.target);
        self.state.bump_move_count();
        let delta = self.state.add_score(rules::move_delta(mv.source, mv.target));

        debug_assert!(self.state.is_consistent());
        log::debug!("applied {mv}, score delta {delta}");

        if self.state.check_win() {
            self.state.set_status(GameStatus::Won);
            log::info!("game won in {} moves", self.state.move_count());
        }
        Ok(delta)
    }

    /// Turn cards from the stock onto the waste, or recycle the waste
    /// back into an exhausted stock. Counts as a move and is undoable.
    ///
    /// Fails with [`GameError::EmptyStockAndWaste`] only when there is
    /// nothing left to turn or recycle.
    pub fn draw_from_stock(&mut self) -> Result<DrawOutcome> {
        self.check_playing()?;
        if self.state.stock().is_empty() && self.state.waste().is_empty() {
            return Err(GameError::EmptyStockAndWaste);
        }

        self.history.push(self.state.snapshot());
        let outcome = if self.state.stock().is_empty() {
            let delta = rules::recycle_delta(self.state.recycles(), &self.config);
            let count = self.state.recycle_waste();
            self.state.bump_recycles();
            self.state.add_score(delta);
            DrawOutcome::Recycled(count)
        } else {
            DrawOutcome::Drawn(self.state.draw_to_waste(self.config.draw_mode.count()))
        };
        self.state.bump_move_count();

        debug_assert!(self.state.is_consistent());
        log::debug!("draw: {outcome:?}");
        Ok(outcome)
    }

    /// Restore the state as it was before the last move or draw.
    ///
    /// Undo itself is not undoable: the popped snapshot is gone.
    pub fn undo(&mut self) -> Result<()> {
        self.check_playing()?;
        let snapshot = self.history.pop().ok_or(GameError::NoHistory)?;
        self.state.restore(snapshot);
        log::debug!("undo to move {}", self.state.move_count());
        Ok(())
    }

    /// Give up the current game. Terminal; typically followed by
    /// constructing a fresh [`Game`].
    pub fn abandon(&mut self) {
        if !self.state.status().is_finished() {
            self.state.set_status(GameStatus::Abandoned);
        }
    }

    /// Re-deal the same seed from scratch, clearing history and counters.
    pub fn restart(&mut self) {
        self.state = GameState::deal(self.state.seed());
        self.history.clear();
    }

    /// Fold wall-clock seconds into the statistics. The embedding owns
    /// the timer; the engine only accounts for it.
    pub fn advance_clock(&mut self, seconds: u64) {
        self.state.add_elapsed(seconds);
    }

    /// Serialize to the JSON save format.
    #[must_use]
    pub fn to_json(&self) -> String {
        save::encode(self)
    }

    /// Load a game from the JSON save format, validating the layout.
    pub fn from_json(text: &str) -> Result<Self> {
        save::decode(text)
    }

    fn check_playing(&self) -> Result<()> {
        if self.state.status().is_playing() {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }
}
