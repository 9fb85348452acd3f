//! Deck construction and shuffling.
//!
//! The rules engine accepts any 52 faces in any order; these helpers build
//! the usual one.

use super::card::{CardFace, Suit, ACE, KING};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build the 52 faces in suit-major, ace-to-king order.
#[must_use]
pub fn standard_deck() -> Vec<CardFace> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for number in ACE..=KING {
            deck.push(CardFace::new(suit, number));
        }
    }
    deck
}

/// Build a standard deck and shuffle it with the given RNG.
pub fn shuffle_deck(rng: &mut GameRng) -> Vec<CardFace> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

/// Build a standard deck shuffled from a seed.
///
/// The same seed always yields the same order.
#[must_use]
pub fn shuffled_deck(seed: u64) -> Vec<CardFace> {
    shuffle_deck(&mut GameRng::new(seed))
}
