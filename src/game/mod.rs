//! Game state and the state machine driving it.

pub mod engine;
pub(crate) mod history;
pub mod state;

pub use engine::{DrawOutcome, Game};
pub use state::{GameState, GameStatus, FOUNDATION_PILES, TABLEAU_COLUMNS};
