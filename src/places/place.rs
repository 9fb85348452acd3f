//! Place identifiers and the static board topology.
//!
//! The Klondike board has thirteen places laid out in two rows:
//!
//! ```text
//! stock discard - foundation foundation foundation foundation
//! tableau tableau tableau tableau tableau tableau tableau
//! ```
//!
//! Place ids print and parse as `stock`, `discard`, `foundation0`..`foundation3`
//! and `tableau0`..`tableau6`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::RulesError;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: u8 = 4;
/// Number of tableau columns.
pub const TABLEAU_COUNT: u8 = 7;

/// Kind of a place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceKind {
    Stock,
    Discard,
    Foundation,
    Tableau,
}

impl PlaceKind {
    /// Layout name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlaceKind::Stock => "stock",
            PlaceKind::Discard => "discard",
            PlaceKind::Foundation => "foundation",
            PlaceKind::Tableau => "tableau",
        }
    }

    /// How many places of this kind exist.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            PlaceKind::Stock | PlaceKind::Discard => 1,
            PlaceKind::Foundation => FOUNDATION_COUNT,
            PlaceKind::Tableau => TABLEAU_COUNT,
        }
    }
}

/// Identifier of a single place.
///
/// Indexed variants are only meaningful inside the topology bounds; use
/// [`PlaceId::validate`] before trusting an id from outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceId {
    Stock,
    Discard,
    Foundation(u8),
    Tableau(u8),
}

impl PlaceId {
    /// Get the kind of this place.
    #[must_use]
    pub const fn kind(self) -> PlaceKind {
        match self {
            PlaceId::Stock => PlaceKind::Stock,
            PlaceId::Discard => PlaceKind::Discard,
            PlaceId::Foundation(_) => PlaceKind::Foundation,
            PlaceId::Tableau(_) => PlaceKind::Tableau,
        }
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PlaceId::Foundation(_))
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PlaceId::Tableau(_))
    }

    /// Check that the id is part of the topology.
    pub fn validate(self) -> Result<Self, RulesError> {
        let in_bounds = match self {
            PlaceId::Stock | PlaceId::Discard => true,
            PlaceId::Foundation(i) => i < FOUNDATION_COUNT,
            PlaceId::Tableau(i) => i < TABLEAU_COUNT,
        };
        if in_bounds {
            Ok(self)
        } else {
            Err(RulesError::UnknownPlace(self.to_string()))
        }
    }
}

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceId::Stock => write!(f, "stock"),
            PlaceId::Discard => write!(f, "discard"),
            PlaceId::Foundation(i) => write!(f, "foundation{i}"),
            PlaceId::Tableau(i) => write!(f, "tableau{i}"),
        }
    }
}

impl FromStr for PlaceId {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || RulesError::UnknownPlace(s.to_string());

        let id = match s {
            "stock" => PlaceId::Stock,
            "discard" => PlaceId::Discard,
            _ => {
                if let Some(rest) = s.strip_prefix("foundation") {
                    PlaceId::Foundation(rest.parse().map_err(|_| unknown())?)
                } else if let Some(rest) = s.strip_prefix("tableau") {
                    PlaceId::Tableau(rest.parse().map_err(|_| unknown())?)
                } else {
                    return Err(unknown());
                }
            }
        };

        // "tableau01", "tableau+1" parse to a valid index but are not canonical
        if id.to_string() != s {
            return Err(unknown());
        }
        id.validate()
    }
}

/// One cell of the board layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Place(PlaceKind),
    /// Empty cell between discard and the foundations.
    Gap,
}

impl Slot {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Slot::Place(kind) => kind.name(),
            Slot::Gap => "-",
        }
    }
}

/// Static description of the Klondike board.
///
/// Consumed by layout code that needs to know where each place goes.
pub struct Topology;

impl Topology {
    /// Foundations in the order auto-moves try them.
    pub const FOUNDATION_ORDER: [PlaceId; 4] = [
        PlaceId::Foundation(0),
        PlaceId::Foundation(1),
        PlaceId::Foundation(2),
        PlaceId::Foundation(3),
    ];

    /// Tableau columns in dealing order.
    pub const TABLEAU_ORDER: [PlaceId; 7] = [
        PlaceId::Tableau(0),
        PlaceId::Tableau(1),
        PlaceId::Tableau(2),
        PlaceId::Tableau(3),
        PlaceId::Tableau(4),
        PlaceId::Tableau(5),
        PlaceId::Tableau(6),
    ];

    /// Places scanned, in order, when looking for any card to auto-move.
    pub const AUTO_MOVE_SCAN_ORDER: [PlaceId; 8] = [
        PlaceId::Tableau(0),
        PlaceId::Tableau(1),
        PlaceId::Tableau(2),
        PlaceId::Tableau(3),
        PlaceId::Tableau(4),
        PlaceId::Tableau(5),
        PlaceId::Tableau(6),
        PlaceId::Discard,
    ];

    /// The two layout rows.
    #[must_use]
    pub fn rows() -> [Vec<Slot>; 2] {
        let mut first = vec![
            Slot::Place(PlaceKind::Stock),
            Slot::Place(PlaceKind::Discard),
            Slot::Gap,
        ];
        first.extend((0..FOUNDATION_COUNT).map(|_| Slot::Place(PlaceKind::Foundation)));
        let second = (0..TABLEAU_COUNT)
            .map(|_| Slot::Place(PlaceKind::Tableau))
            .collect();
        [first, second]
    }

    /// The layout rows as space-separated strings.
    #[must_use]
    pub fn row_strings() -> [String; 2] {
        Self::rows().map(|row| {
            row.iter()
                .map(|slot| slot.name())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Ids of all places of a kind, in enumeration order.
    #[must_use]
    pub fn place_ids(kind: PlaceKind) -> SmallVec<[PlaceId; 7]> {
        match kind {
            PlaceKind::Stock => SmallVec::from_slice(&[PlaceId::Stock]),
            PlaceKind::Discard => SmallVec::from_slice(&[PlaceId::Discard]),
            PlaceKind::Foundation => SmallVec::from_slice(&Self::FOUNDATION_ORDER),
            PlaceKind::Tableau => SmallVec::from_slice(&Self::TABLEAU_ORDER),
        }
    }

    /// Ids of all thirteen places, row by row.
    pub fn all_place_ids() -> impl Iterator<Item = PlaceId> {
        [PlaceKind::Stock, PlaceKind::Discard, PlaceKind::Foundation, PlaceKind::Tableau]
            .into_iter()
            .flat_map(Self::place_ids)
    }
}
