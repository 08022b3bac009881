//! Piles: the ordered card sequences making up the layout.
//!
//! One `Pile` type backs all thirteen piles; the `PileId` kind tag selects
//! the insertion rule. Pile contents are `im::Vector`s, so cloning a pile
//! for an undo snapshot shares structure instead of copying cards.

use std::fmt;

use im::Vector;

use crate::core::{Card, GameError, Rank, Result, Suit};

/// Identifies one of the thirteen piles on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// Face-down draw pile.
    Stock,
    /// Face-up pile fed by stock draws.
    Waste,
    /// Ascending suit pile; the win condition.
    Foundation(Suit),
    /// One of the seven main columns, indexed `0..=6`.
    Tableau(u8),
}

impl PileId {
    /// The four foundation piles, in suit order.
    pub const FOUNDATIONS: [PileId; 4] = [
        PileId::Foundation(Suit::Clubs),
        PileId::Foundation(Suit::Diamonds),
        PileId::Foundation(Suit::Hearts),
        PileId::Foundation(Suit::Spades),
    ];

    /// The seven tableau columns, left to right.
    pub const TABLEAU: [PileId; 7] = [
        PileId::Tableau(0),
        PileId::Tableau(1),
        PileId::Tableau(2),
        PileId::Tableau(3),
        PileId::Tableau(4),
        PileId::Tableau(5),
        PileId::Tableau(6),
    ];

    /// Whether this is a tableau column.
    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }

    /// Whether this is a foundation pile.
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(suit) => write!(f, "{suit:?} foundation"),
            PileId::Tableau(index) => write!(f, "tableau {index}"),
        }
    }
}

/// An ordered pile of cards. The top of the pile is the back of the
/// sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Pile {
    kind: PileId,
    cards: Vector<Card>,
}

impl Pile {
    /// Create an empty pile of the given kind.
    #[must_use]
    pub(crate) fn new(kind: PileId) -> Self {
        Self {
            kind,
            cards: Vector::new(),
        }
    }

    pub(crate) fn with_cards(kind: PileId, cards: Vector<Card>) -> Self {
        Self { kind, cards }
    }

    #[must_use]
    pub const fn kind(&self) -> PileId {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Card at `index`, counting from the bottom.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Length of the contiguous face-up suffix.
    #[must_use]
    pub fn face_up_len(&self) -> usize {
        self.cards
            .iter()
            .rev()
            .take_while(|card| card.is_face_up())
            .count()
    }

    /// Destination rule for this pile kind, applied to the first (deepest)
    /// card of an incoming run of `run_len` cards.
    ///
    /// Stock and waste never accept moved cards; foundations accept a
    /// single next-in-suit card (the ace on an empty pile); tableau
    /// columns accept alternating-color descent (a king-led run on an
    /// empty column).
    pub fn accepts_run(&self, incoming: Card, run_len: usize) -> Result<()> {
        match self.kind {
            PileId::Stock | PileId::Waste => Err(GameError::IllegalDestination),
            PileId::Foundation(suit) => {
                if run_len != 1 {
                    return Err(GameError::IllegalFoundationMove);
                }
                let accepted = match self.top() {
                    None => {
                        incoming.is_face_up()
                            && incoming.suit() == suit
                            && incoming.rank() == Rank::Ace
                    }
                    Some(top) => incoming.follows_on_foundation(top),
                };
                if accepted {
                    Ok(())
                } else {
                    Err(GameError::IllegalFoundationMove)
                }
            }
            PileId::Tableau(_) => {
                let accepted = match self.top() {
                    None => incoming.is_face_up() && incoming.rank() == Rank::King,
                    Some(top) => incoming.stacks_on(top),
                };
                if accepted {
                    Ok(())
                } else {
                    Err(GameError::IllegalTableauMove)
                }
            }
        }
    }

    pub(crate) fn push_top(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    pub(crate) fn append_run(&mut self, run: Vector<Card>) {
        self.cards.append(run);
    }

    pub(crate) fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove the top `count` cards, preserving their order.
    pub(crate) fn split_top(&mut self, count: usize) -> Vector<Card> {
        debug_assert!(count <= self.cards.len());
        let at = self.cards.len() - count;
        self.cards.split_off(at)
    }

    /// Flip a face-down top card face-up. Returns whether a flip happened.
    pub(crate) fn expose_top(&mut self) -> bool {
        if let Some(card) = self.cards.back_mut() {
            if !card.is_face_up() {
                *card = card.turned_up();
                return true;
            }
        }
        false
    }

    /// Remove every card, bottom-to-top order preserved.
    pub(crate) fn take_all(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit).turned_up()
    }

    #[test]
    fn test_empty_foundation_accepts_only_its_ace() {
        let foundation = Pile::new(PileId::Foundation(Suit::Hearts));

        assert!(foundation.accepts_run(card(Rank::Ace, Suit::Hearts), 1).is_ok());
        assert_eq!(
            foundation.accepts_run(card(Rank::Ace, Suit::Spades), 1),
            Err(GameError::IllegalFoundationMove)
        );
        assert_eq!(
            foundation.accepts_run(card(Rank::Two, Suit::Hearts), 1),
            Err(GameError::IllegalFoundationMove)
        );
    }

    #[test]
    fn test_foundation_succession() {
        let mut foundation = Pile::new(PileId::Foundation(Suit::Spades));
        foundation.push_top(card(Rank::Ace, Suit::Spades));

        assert!(foundation.accepts_run(card(Rank::Two, Suit::Spades), 1).is_ok());
        assert_eq!(
            foundation.accepts_run(card(Rank::Three, Suit::Spades), 1),
            Err(GameError::IllegalFoundationMove)
        );
        assert_eq!(
            foundation.accepts_run(card(Rank::Two, Suit::Clubs), 1),
            Err(GameError::IllegalFoundationMove)
        );
    }

    #[test]
    fn test_foundation_rejects_runs() {
        let foundation = Pile::new(PileId::Foundation(Suit::Hearts));

        assert_eq!(
            foundation.accepts_run(card(Rank::Ace, Suit::Hearts), 2),
            Err(GameError::IllegalFoundationMove)
        );
    }

    #[test]
    fn test_empty_tableau_accepts_only_kings() {
        let column = Pile::new(PileId::Tableau(3));

        assert!(column.accepts_run(card(Rank::King, Suit::Clubs), 1).is_ok());
        assert!(column.accepts_run(card(Rank::King, Suit::Hearts), 3).is_ok());
        assert_eq!(
            column.accepts_run(card(Rank::Queen, Suit::Clubs), 1),
            Err(GameError::IllegalTableauMove)
        );
    }

    #[test]
    fn test_tableau_descent_and_alternation() {
        let mut column = Pile::new(PileId::Tableau(0));
        column.push_top(card(Rank::Eight, Suit::Spades));

        assert!(column.accepts_run(card(Rank::Seven, Suit::Hearts), 1).is_ok());
        assert_eq!(
            column.accepts_run(card(Rank::Seven, Suit::Clubs), 1),
            Err(GameError::IllegalTableauMove)
        );
        assert_eq!(
            column.accepts_run(card(Rank::Six, Suit::Hearts), 1),
            Err(GameError::IllegalTableauMove)
        );
    }

    #[test]
    fn test_stock_and_waste_are_never_destinations() {
        let stock = Pile::new(PileId::Stock);
        let waste = Pile::new(PileId::Waste);

        assert_eq!(
            stock.accepts_run(card(Rank::King, Suit::Clubs), 1),
            Err(GameError::IllegalDestination)
        );
        assert_eq!(
            waste.accepts_run(card(Rank::King, Suit::Clubs), 1),
            Err(GameError::IllegalDestination)
        );
    }

    #[test]
    fn test_face_up_len_counts_suffix_only() {
        let mut column = Pile::new(PileId::Tableau(1));
        column.push_top(Card::new(Rank::Nine, Suit::Clubs));
        column.push_top(Card::new(Rank::Five, Suit::Hearts));
        column.push_top(card(Rank::Four, Suit::Spades));
        column.push_top(card(Rank::Three, Suit::Diamonds));

        assert_eq!(column.face_up_len(), 2);
    }

    #[test]
    fn test_split_top_preserves_order() {
        let mut column = Pile::new(PileId::Tableau(2));
        column.push_top(card(Rank::Nine, Suit::Clubs));
        column.push_top(card(Rank::Eight, Suit::Hearts));
        column.push_top(card(Rank::Seven, Suit::Spades));

        let run = column.split_top(2);

        let taken: Vec<Rank> = run.iter().map(|c| c.rank()).collect();
        assert_eq!(taken, vec![Rank::Eight, Rank::Seven]);
        assert_eq!(column.top().map(Card::rank), Some(Rank::Nine));
    }

    #[test]
    fn test_expose_top_flips_once() {
        let mut column = Pile::new(PileId::Tableau(4));
        column.push_top(Card::new(Rank::Ten, Suit::Diamonds));

        assert!(column.expose_top());
        assert!(!column.expose_top());
        assert!(column.top().is_some_and(Card::is_face_up));
    }
}
