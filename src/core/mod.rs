//! Core building blocks: cards, configuration, errors, and RNG.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{Card, Color, Rank, Suit, DECK_SIZE};
pub use config::{DrawMode, GameConfig};
pub use error::{GameError, Result, SaveDefect};
pub use rng::GameRng;
