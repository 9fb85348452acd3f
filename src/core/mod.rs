//! Core engine types: configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{KlondikeConfig, PickCount};
pub use error::{Result, RulesError};
pub use rng::GameRng;
