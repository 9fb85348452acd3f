//! Card values and deck helpers.
//!
//! ## Key Types
//!
//! - `CardFace`: suit and number, as supplied by a deck
//! - `CardId`: stable identity of a card inside one engine instance
//! - `Card`: a card on the table, including its face-up flag

pub mod card;
pub mod deck;

pub use card::{Card, CardFace, CardId, Color, Suit, ACE, KING};
pub use deck::{shuffle_deck, shuffled_deck, standard_deck, DECK_SIZE};
