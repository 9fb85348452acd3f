//! Places: where cards live.
//!
//! ## Key Types
//!
//! - `PlaceId` / `PlaceKind`: the thirteen Klondike places
//! - `Topology`: static board layout and fixed enumeration orders
//! - `PlaceRegistry`: ordered card sequence per place, with transfer primitives

pub mod place;
pub mod registry;

pub use place::{PlaceId, PlaceKind, Slot, Topology, FOUNDATION_COUNT, TABLEAU_COUNT};
pub use registry::PlaceRegistry;
