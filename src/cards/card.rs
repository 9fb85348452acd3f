//! Card values.
//!
//! A deck supplies [`CardFace`] values (suit and number). The engine wraps
//! each one into a [`Card`] that carries a stable [`CardId`] and the mutable
//! face-up flag. Cards are owned by whichever place currently holds them.

use serde::{Deserialize, Serialize};

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Get the color of this suit.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

/// Lowest card number (ace).
pub const ACE: u8 = 1;
/// Highest card number (king).
pub const KING: u8 = 13;

/// Face value of a card as supplied by a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFace {
    pub suit: Suit,
    /// 1 (ace) through 13 (king).
    pub number: u8,
}

impl CardFace {
    /// Create a face value.
    #[must_use]
    pub const fn new(suit: Suit, number: u8) -> Self {
        Self { suit, number }
    }
}

impl std::fmt::Display for CardFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.number {
            1 => write!(f, "A")?,
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            n => write!(f, "{n}")?,
        }
        write!(f, "{}", self.suit.symbol())
    }
}

/// Identity of a card within one engine instance.
///
/// Assigned from the card's index in the deck given to the constructor and
/// never changed afterwards, so it stays valid across moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub number: u8,
    /// Face-up?
    pub visible: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(id: CardId, face: CardFace) -> Self {
        Self {
            id,
            suit: face.suit,
            number: face.number,
            visible: false,
        }
    }

    /// Get the face value.
    #[must_use]
    pub const fn face(&self) -> CardFace {
        CardFace::new(self.suit, self.number)
    }

    /// Get the color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }
}
