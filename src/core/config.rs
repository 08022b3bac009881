//! Game configuration: draw count, recycle penalties, and undo depth.
//!
//! The stock draw count and the recycle penalty are presets rather than
//! fixed rules; classic scoring uses draw-one with the first recycle free.

use serde::{Deserialize, Serialize};

/// How many cards a single stock draw turns over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawMode {
    #[default]
    DrawOne,
    DrawThree,
}

impl DrawMode {
    /// Number of cards turned over per draw.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            DrawMode::DrawOne => 1,
            DrawMode::DrawThree => 3,
        }
    }
}

/// Engine configuration.
///
/// Unknown fields in a serialized config are ignored and missing fields
/// fall back to the defaults, so older save documents keep loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Cards per stock draw.
    pub draw_mode: DrawMode,
    /// Recycles allowed before the penalty applies.
    pub free_recycles: u32,
    /// Points deducted per penalized recycle.
    pub recycle_penalty: u32,
    /// Maximum retained undo snapshots; the oldest are discarded beyond
    /// this. Zero disables undo entirely.
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::DrawOne,
            free_recycles: 1,
            recycle_penalty: 100,
            history_limit: 128,
        }
    }
}

impl GameConfig {
    /// Classic draw-one configuration.
    #[must_use]
    pub fn draw_one() -> Self {
        Self::default()
    }

    /// Classic draw-three configuration.
    #[must_use]
    pub fn draw_three() -> Self {
        Self {
            draw_mode: DrawMode::DrawThree,
            ..Self::default()
        }
    }

    /// Override the undo depth.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Override the recycle penalty schedule.
    #[must_use]
    pub fn with_recycle_penalty(mut self, free_recycles: u32, penalty: u32) -> Self {
        self.free_recycles = free_recycles;
        self.recycle_penalty = penalty;
        self
    }
}
