//! Engine configuration.
//!
//! Klondike has a single construction-time option: how many cards a draw
//! from the stock turns over. Callers build a `KlondikeConfig` and hand it
//! to `KlondikeRules::new`.

use serde::{Deserialize, Serialize};

use super::error::RulesError;

/// Number of cards revealed per stock draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickCount {
    /// Draw one card at a time.
    #[default]
    One,
    /// Draw three cards at a time.
    Three,
}

impl PickCount {
    /// Get the number of cards as a count.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            PickCount::One => 1,
            PickCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for PickCount {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PickCount::One),
            3 => Ok(PickCount::Three),
            other => Err(RulesError::InvalidPickCount(other)),
        }
    }
}

impl std::fmt::Display for PickCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// Configuration for a Klondike engine instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KlondikeConfig {
    /// Cards turned over per stock draw.
    pub pick_count: PickCount,
}

impl KlondikeConfig {
    /// Create the default configuration (draw one).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pick count.
    #[must_use]
    pub fn with_pick_count(mut self, pick_count: PickCount) -> Self {
        self.pick_count = pick_count;
        self
    }
}
