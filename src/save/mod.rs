//! The persistence codec: JSON save documents.
//!
//! ## Document shape
//!
//! ```json
//! {
//!   "config": { "drawMode": "drawOne", "historyLimit": 128 },
//!   "seed": 17,
//!   "piles": {
//!     "stock": [ { "rank": "king", "suit": "spades", "faceUp": false } ],
//!     "waste": [],
//!     "foundations": [ [], [], [], [] ],
//!     "tableau": [ [], [], [], [], [], [], [] ]
//!   },
//!   "score": 15,
//!   "moveCount": 12,
//!   "elapsedSeconds": 94,
//!   "recycles": 0,
//!   "history": [ { "piles": { "...": [] }, "score": 10, "moveCount": 11 } ]
//! }
//! ```
//!
//! Unknown fields are ignored on load and every field except `piles` has
//! a default, so documents survive engine upgrades in both directions.
//! The undo history is included: it is bounded by the history cap before
//! it ever reaches the codec, so the encoding is bounded-depth by
//! construction and undo survives a reload.
//!
//! Loading validates the layout — exactly the 52 unique cards across all
//! piles, foundations ascending from their ace — and refuses the whole
//! document on any defect rather than loading an inconsistent game.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, GameConfig, GameError, Rank, Result, SaveDefect, Suit, DECK_SIZE};
use crate::game::history::{History, Snapshot};
use crate::game::state::{GameState, GameStats};
use crate::game::{Game, FOUNDATION_PILES, TABLEAU_COLUMNS};
use crate::piles::{Pile, PileId};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveDoc {
    #[serde(default)]
    config: GameConfig,
    #[serde(default)]
    seed: u64,
    piles: PileSet,
    #[serde(default)]
    score: u32,
    #[serde(default)]
    move_count: u32,
    #[serde(default)]
    elapsed_seconds: u64,
    #[serde(default)]
    recycles: u32,
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PileSet {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: Vec<Vec<Card>>,
    tableau: Vec<Vec<Card>>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HistoryEntry {
    piles: PileSet,
    #[serde(default)]
    score: u32,
    #[serde(default)]
    move_count: u32,
    #[serde(default)]
    recycles: u32,
}

/// Serialize a game to the JSON save format.
#[must_use]
pub fn encode(game: &Game) -> String {
    let state = game.state();
    let doc = SaveDoc {
        config: *game.config(),
        seed: state.seed(),
        piles: pile_set(state),
        score: state.score(),
        move_count: state.move_count(),
        elapsed_seconds: state.elapsed_seconds(),
        recycles: state.recycles(),
        history: game.history().iter().map(history_entry).collect(),
    };
    serde_json::to_string_pretty(&doc).expect("save document always serializes")
}

/// Deserialize and validate a save document.
///
/// Fails with [`GameError::CorruptSave`] on malformed JSON or on any
/// structural defect; no partially loaded state ever escapes.
pub fn decode(text: &str) -> Result<Game> {
    let doc: SaveDoc = serde_json::from_str(text).map_err(|err| {
        log::warn!("unreadable save document: {err}");
        GameError::CorruptSave(SaveDefect::Syntax)
    })?;

    validate_pile_set(&doc.piles)?;
    for entry in &doc.history {
        validate_pile_set(&entry.piles)?;
    }

    let state = GameState::from_parts(
        pile_from(PileId::Stock, &doc.piles.stock),
        pile_from(PileId::Waste, &doc.piles.waste),
        foundation_piles(&doc.piles),
        tableau_piles(&doc.piles),
        GameStats {
            score: doc.score,
            move_count: doc.move_count,
            recycles: doc.recycles,
            elapsed_seconds: doc.elapsed_seconds,
            seed: doc.seed,
        },
    );

    let mut history = History::new(doc.config.history_limit);
    for entry in doc.history {
        history.push(snapshot_from(entry));
    }

    Ok(Game::from_parts(doc.config, state, history))
}

fn pile_set(state: &GameState) -> PileSet {
    PileSet {
        stock: state.stock().iter().collect(),
        waste: state.waste().iter().collect(),
        foundations: state
            .foundations()
            .iter()
            .map(|pile| pile.iter().collect())
            .collect(),
        tableau: state
            .tableau()
            .iter()
            .map(|pile| pile.iter().collect())
            .collect(),
    }
}

fn history_entry(snapshot: &Snapshot) -> HistoryEntry {
    HistoryEntry {
        piles: PileSet {
            stock: snapshot.stock.iter().collect(),
            waste: snapshot.waste.iter().collect(),
            foundations: snapshot
                .foundations
                .iter()
                .map(|pile| pile.iter().collect())
                .collect(),
            tableau: snapshot
                .tableau
                .iter()
                .map(|pile| pile.iter().collect())
                .collect(),
        },
        score: snapshot.score,
        move_count: snapshot.move_count,
        recycles: snapshot.recycles,
    }
}

fn pile_from(kind: PileId, cards: &[Card]) -> Pile {
    Pile::with_cards(kind, cards.iter().copied().collect::<Vector<Card>>())
}

fn foundation_piles(piles: &PileSet) -> [Pile; FOUNDATION_PILES] {
    std::array::from_fn(|i| pile_from(PileId::Foundation(Suit::ALL[i]), &piles.foundations[i]))
}

fn tableau_piles(piles: &PileSet) -> [Pile; TABLEAU_COLUMNS] {
    std::array::from_fn(|i| pile_from(PileId::Tableau(i as u8), &piles.tableau[i]))
}

fn snapshot_from(entry: HistoryEntry) -> Snapshot {
    Snapshot {
        stock: pile_from(PileId::Stock, &entry.piles.stock),
        waste: pile_from(PileId::Waste, &entry.piles.waste),
        foundations: foundation_piles(&entry.piles),
        tableau: tableau_piles(&entry.piles),
        score: entry.score,
        move_count: entry.move_count,
        recycles: entry.recycles,
    }
}

fn validate_pile_set(piles: &PileSet) -> Result<()> {
    if piles.foundations.len() != FOUNDATION_PILES || piles.tableau.len() != TABLEAU_COLUMNS {
        return Err(GameError::CorruptSave(SaveDefect::PileShape));
    }

    let mut seen: FxHashSet<(Rank, Suit)> = FxHashSet::default();
    let mut total = 0usize;
    for card in all_cards(piles) {
        total += 1;
        if !seen.insert((card.rank(), card.suit())) {
            return Err(GameError::CorruptSave(SaveDefect::DuplicateCard));
        }
    }
    if total != DECK_SIZE {
        return Err(GameError::CorruptSave(SaveDefect::CardCount));
    }

    for (index, cards) in piles.foundations.iter().enumerate() {
        let suit = Suit::ALL[index];
        for (position, card) in cards.iter().enumerate() {
            if card.suit() != suit || usize::from(card.rank().value()) != position + 1 {
                return Err(GameError::CorruptSave(SaveDefect::FoundationOrder));
            }
        }
    }
    Ok(())
}

fn all_cards(piles: &PileSet) -> impl Iterator<Item = &Card> + '_ {
    piles
        .stock
        .iter()
        .chain(&piles.waste)
        .chain(piles.foundations.iter().flatten())
        .chain(piles.tableau.iter().flatten())
}
