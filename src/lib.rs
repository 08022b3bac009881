//! # klondike-engine
//!
//! A Klondike solitaire rule engine and game-state machine.
//!
//! The engine owns the authoritative layout — stock, waste, four
//! foundations, seven tableau columns — validates and applies moves,
//! tracks score/move/time statistics, supports bounded undo, and
//! round-trips whole games through a human-readable JSON save format.
//! Rendering, input handling, and animation live outside this crate:
//! they read the state and call the operations, but hold no rules of
//! their own.
//!
//! ## Design Principles
//!
//! 1. **One mutation entry point**: every change flows through
//!    [`Game::apply_move`], [`Game::draw_from_stock`], or
//!    [`Game::undo`]; each call either fully applies or leaves the
//!    state untouched and returns the reason.
//!
//! 2. **Deterministic deals**: shuffles are seeded, so a seed fully
//!    reproduces a game — restarts and regression tests replay exactly.
//!
//! 3. **Cheap snapshots**: pile contents are persistent vectors via
//!    `im`, so undo snapshots share structure with the live state
//!    instead of copying the deck.
//!
//! ## Modules
//!
//! - `core`: cards, configuration, errors, RNG
//! - `piles`: the ordered pile abstraction and per-pile acceptance rules
//! - `rules`: move values, the validator, the scoring table
//! - `game`: the game state and the state machine driving it
//! - `save`: the JSON persistence codec
//!
//! ## Example
//!
//! ```
//! use klondike_engine::{Game, GameConfig};
//!
//! let mut game = Game::with_seed(GameConfig::draw_one(), 7);
//! game.draw_from_stock().unwrap();
//!
//! if let Some(&mv) = game.legal_moves().first() {
//!     let delta = game.apply_move(mv).unwrap();
//!     println!("played {mv} for {delta} points");
//!     game.undo().unwrap();
//! }
//!
//! let text = game.to_json();
//! let restored = Game::from_json(&text).unwrap();
//! assert_eq!(restored.state(), game.state());
//! ```

pub mod core;
pub mod game;
pub mod piles;
pub mod rules;
pub mod save;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, DrawMode, GameConfig, GameError, GameRng, Rank, Result, SaveDefect, Suit,
    DECK_SIZE,
};

pub use crate::game::{DrawOutcome, Game, GameState, GameStatus, FOUNDATION_PILES, TABLEAU_COLUMNS};

pub use crate::piles::{Pile, PileId};

pub use crate::rules::{legal_moves, move_delta, recycle_delta, validate, Move};
