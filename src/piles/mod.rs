//! The ordered pile abstraction shared by every pile on the board.

pub mod pile;

pub use pile::{Pile, PileId};
