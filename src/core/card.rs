//! Card identity: ranks, suits, colors, and the face-up flag.
//!
//! A `Card` is identified by its rank and suit; `face_up` is the only
//! mutable piece of state and is owned by whichever pile currently holds
//! the card. The stacking predicates used by the move rules live here so
//! they can be tested in isolation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All four suits, in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Red or black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Index of this suit's foundation pile.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, `Ace` low through `King` high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks, ascending.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value, `Ace = 1` through `King = 13`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A single playing card.
///
/// Identity is `(rank, suit)`; `face_up` is positional state owned by the
/// holding pile. Serialized with the external field name `faceUp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    /// Whether the holding pile currently shows this card.
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub(crate) fn turned_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub(crate) fn turned_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// Tableau stacking: `self` may be placed on `below` when both cards
    /// are face-up, `self` is one rank lower, and the colors alternate.
    #[must_use]
    pub fn stacks_on(self, below: Card) -> bool {
        self.face_up
            && below.face_up
            && self.rank.value() + 1 == below.rank.value()
            && self.color() != below.color()
    }

    /// Foundation succession: `self` may be placed on `top` when it is
    /// face-up, the suits match, and it is exactly one rank higher.
    #[must_use]
    pub fn follows_on_foundation(self, top: Card) -> bool {
        self.face_up && self.suit == top.suit && self.rank.value() == top.rank.value() + 1
    }

    /// The full 52-card deck, face-down, suit by suit.
    #[must_use]
    pub fn standard_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(rank, suit));
            }
        }
        deck
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_is_complete() {
        let deck = Card::standard_deck();

        assert_eq!(deck.len(), DECK_SIZE);
        assert!(deck.iter().all(|card| !card.is_face_up()));

        let unique: std::collections::HashSet<_> =
            deck.iter().map(|card| (card.rank(), card.suit())).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Suit::Spades.color(), Color::Black);
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert!(Rank::Queen < Rank::King);
    }

    #[test]
    fn test_stacks_on_requires_descent_and_alternation() {
        let red_queen = Card::new(Rank::Queen, Suit::Hearts).turned_up();
        let black_king = Card::new(Rank::King, Suit::Spades).turned_up();
        let black_queen = Card::new(Rank::Queen, Suit::Clubs).turned_up();
        let red_jack = Card::new(Rank::Jack, Suit::Diamonds).turned_up();

        assert!(red_queen.stacks_on(black_king));
        assert!(!black_queen.stacks_on(black_king));
        assert!(!red_jack.stacks_on(black_king));
        assert!(red_jack.stacks_on(black_queen));
    }

    #[test]
    fn test_stacks_on_requires_face_up() {
        let face_down_queen = Card::new(Rank::Queen, Suit::Hearts);
        let black_king = Card::new(Rank::King, Suit::Spades).turned_up();

        assert!(!face_down_queen.stacks_on(black_king));
        assert!(!face_down_queen.turned_up().stacks_on(black_king.turned_down()));
    }

    #[test]
    fn test_follows_on_foundation() {
        let ace = Card::new(Rank::Ace, Suit::Spades).turned_up();
        let two = Card::new(Rank::Two, Suit::Spades).turned_up();
        let two_hearts = Card::new(Rank::Two, Suit::Hearts).turned_up();

        assert!(two.follows_on_foundation(ace));
        assert!(!two_hearts.follows_on_foundation(ace));
        assert!(!ace.follows_on_foundation(two));
        assert!(!two.turned_down().follows_on_foundation(ace));
    }

    #[test]
    fn test_serde_field_names() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        let value = serde_json::to_value(card).unwrap();

        assert_eq!(value["rank"], "ace");
        assert_eq!(value["suit"], "spades");
        assert_eq!(value["faceUp"], false);
    }
}
