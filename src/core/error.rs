//! Error taxonomy for the engine.
//!
//! Every kind is recoverable and local: a failed operation returns the
//! reason and leaves the game state untouched. Nothing here aborts the
//! process.

use thiserror::Error;

/// Why an engine operation was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("that foundation cannot accept the card")]
    IllegalFoundationMove,
    #[error("that tableau column cannot accept the run")]
    IllegalTableauMove,
    #[error("cards can never be placed on that pile")]
    IllegalDestination,
    #[error("the requested cards are not a movable face-up run")]
    IllegalRun,
    #[error("source and destination are the same pile")]
    NoOpMove,
    #[error("no such pile")]
    UnknownPile,
    #[error("both the stock and the waste are empty")]
    EmptyStockAndWaste,
    #[error("nothing to undo")]
    NoHistory,
    #[error("the game is already finished")]
    GameOver,
    #[error("save data is corrupt: {0}")]
    CorruptSave(SaveDefect),
}

/// What exactly a rejected save document got wrong.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDefect {
    #[error("not a well-formed save document")]
    Syntax,
    #[error("wrong number of piles")]
    PileShape,
    #[error("card count is not exactly 52")]
    CardCount,
    #[error("duplicate card identity")]
    DuplicateCard,
    #[error("foundation cards out of order")]
    FoundationOrder,
}

pub type Result<T> = std::result::Result<T, GameError>;
