//! # klondike-rules
//!
//! Rules engine for single-deck Klondike patience.
//!
//! The engine defines the legal placements of cards, the dealing procedure,
//! card visibility transitions and win detection. Rendering, input handling
//! and persistence belong to the caller.
//!
//! ## Architecture
//!
//! - **Composition over inheritance**: `KlondikeRules` owns a generic
//!   `PlaceRegistry` and calls its transfer primitives explicitly.
//!
//! - **Owned cards**: each place owns the cards in its sequence. A move is a
//!   single transfer of ownership, never a copy, so the 52 cards are always
//!   accounted for exactly once.
//!
//! - **Persistent sequences**: places are `im` vectors, so cloning an engine
//!   is O(1).
//!
//! - **Fixed scan orders**: auto-moves try places in the documented orders
//!   on `Topology`, which keeps auto-play deterministic.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG
//! - `cards`: card values and deck helpers
//! - `places`: place ids, board topology, the place registry
//! - `rules`: the Klondike rules engine
//!
//! ## Example
//!
//! ```
//! use klondike_rules::{KlondikeConfig, KlondikeRules};
//! use klondike_rules::cards::shuffled_deck;
//!
//! let mut game = KlondikeRules::new(shuffled_deck(7), KlondikeConfig::default()).unwrap();
//! game.deal().unwrap();
//!
//! while game.move_any_card_to_any_foundation().unwrap() {}
//! assert!(!game.check_win());
//! assert_eq!(game.places().total_cards(), 52);
//! ```

pub mod core;
pub mod cards;
pub mod places;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, KlondikeConfig, PickCount, RulesError};

pub use crate::cards::{Card, CardFace, CardId, Color, Suit};

pub use crate::places::{PlaceId, PlaceKind, PlaceRegistry, Slot, Topology};

pub use crate::rules::{KlondikeRules, StockDraw};
