//! Klondike rules.
//!
//! `KlondikeRules` decides which moves are legal and performs them on the
//! places it owns:
//! - Dealing and stock draws
//! - Legality of single-card and run moves
//! - Revealing newly exposed tableau cards
//! - Auto-moves to the foundations
//! - Win detection

pub mod klondike;

pub use klondike::{KlondikeRules, StockDraw};
