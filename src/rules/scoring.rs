//! The classic Klondike scoring table, expressed as deltas.
//!
//! The state machine applies these on top of a zero floor: the running
//! score never goes negative, however many foundation cards come back
//! down or recycles pile up.

use crate::core::GameConfig;
use crate::piles::PileId;

/// Score delta for a legal card move, before the zero floor is applied.
///
/// Waste→Tableau +5, Waste→Foundation +10, Tableau→Foundation +10,
/// Foundation→Tableau −15; every other legal move scores nothing.
#[must_use]
pub fn move_delta(source: PileId, target: PileId) -> i32 {
    match (source, target) {
        (PileId::Waste, PileId::Tableau(_)) => 5,
        (PileId::Waste, PileId::Foundation(_)) => 10,
        (PileId::Tableau(_), PileId::Foundation(_)) => 10,
        (PileId::Foundation(_), PileId::Tableau(_)) => -15,
        _ => 0,
    }
}

/// Score delta for a recycle, given how many recycles happened before it.
#[must_use]
pub fn recycle_delta(prior_recycles: u32, config: &GameConfig) -> i32 {
    if prior_recycles < config.free_recycles {
        0
    } else {
        0i32.saturating_sub_unsigned(config.recycle_penalty)
    }
}
