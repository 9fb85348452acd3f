//! Error type shared by the whole engine.
//!
//! Every variant is a precondition violation by the caller (or, for
//! `InternalInvariant`, a defect in the predicate chain). No legal game
//! sequence produces one, so callers are expected to fail fast on them.

use thiserror::Error;

use crate::cards::CardId;
use crate::places::PlaceId;

/// Errors raised by [`KlondikeRules`](crate::rules::KlondikeRules) and its
/// collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The constructor received a deck that is not exactly 52 cards.
    #[error("expected {expected} cards, got {actual} cards")]
    InvalidDeck { expected: usize, actual: usize },

    /// A pick count other than 1 or 3.
    #[error("pick count must be 1 or 3, got {0}")]
    InvalidPickCount(u8),

    /// A place id outside the declared topology.
    #[error("unknown card place id: {0}")]
    UnknownPlace(String),

    /// The card is not in the place the caller claimed it is in.
    #[error("card {card} is not in place {place}")]
    CardNotInPlace { card: CardId, place: PlaceId },

    /// The legality checks reached a state they should never reach.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),

    /// `deal` was called on an instance whose cards are already on the table.
    #[error("cards have already been dealt")]
    AlreadyDealt,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RulesError>;
