//! Place registry: ordered card sequences and transfers between them.
//!
//! The `PlaceRegistry` owns every card on the table. Each place holds an
//! ordered sequence where index 0 is the bottom and the last element is the
//! topmost (accessible) card. Cards move by ownership transfer: a card is
//! taken out of one sequence and appended to another, never copied.
//!
//! Sequences are `im::Vector`s, so cloning a registry is O(1).
//!
//! ```
//! use klondike_rules::cards::{Card, CardFace, CardId, Suit};
//! use klondike_rules::places::{PlaceId, PlaceRegistry};
//!
//! let mut registry = PlaceRegistry::new();
//! registry.init_place(PlaceId::Tableau(0));
//! registry.init_place(PlaceId::Tableau(1));
//!
//! let king = Card::new(CardId(0), CardFace::new(Suit::Spades, 13));
//! registry.push(PlaceId::Tableau(0), king).unwrap();
//!
//! let moved = registry.transfer(CardId(0), PlaceId::Tableau(0), PlaceId::Tableau(1)).unwrap();
//! assert_eq!(moved, 1);
//! assert_eq!(registry.locate(CardId(0)), Some(PlaceId::Tableau(1)));
//! ```

use im::Vector;
use rustc_hash::FxHashMap;

use super::place::PlaceId;
use crate::cards::{Card, CardId};
use crate::core::error::{Result, RulesError};

/// Owns the card sequence of every place.
///
/// Only places registered with [`PlaceRegistry::init_place`] hold cards.
/// The read helpers [`len`](Self::len), [`is_empty`](Self::is_empty) and
/// [`top`](Self::top) treat an unregistered place as empty, so callers that
/// need to tell "empty" from "missing" must use [`cards`](Self::cards) or
/// [`contains_place`](Self::contains_place). Everything that reads a whole
/// sequence or moves cards returns [`RulesError::UnknownPlace`] instead.
#[derive(Clone, Debug, Default)]
pub struct PlaceRegistry {
    /// Card locations: card_id -> place_id
    locations: FxHashMap<CardId, PlaceId>,

    /// Ordered card sequence per place, bottom first.
    places: FxHashMap<PlaceId, Vector<Card>>,
}

impl PlaceRegistry {
    /// Create an empty registry with no places.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty place.
    ///
    /// Registering an existing place is a no-op.
    pub fn init_place(&mut self, place: PlaceId) {
        self.places.entry(place).or_default();
    }

    /// Check if a place has been registered.
    #[must_use]
    pub fn contains_place(&self, place: PlaceId) -> bool {
        self.places.contains_key(&place)
    }

    /// Get the cards of a place, bottom first.
    pub fn cards(&self, place: PlaceId) -> Result<&Vector<Card>> {
        self.places.get(&place).ok_or_else(|| unknown(place))
    }

    fn cards_mut(&mut self, place: PlaceId) -> Result<&mut Vector<Card>> {
        self.places.get_mut(&place).ok_or_else(|| unknown(place))
    }

    /// Number of cards in a place. Unknown places count as empty.
    #[must_use]
    pub fn len(&self, place: PlaceId) -> usize {
        self.places.get(&place).map_or(0, Vector::len)
    }

    /// Check if a place holds no cards. Unknown places count as empty.
    #[must_use]
    pub fn is_empty(&self, place: PlaceId) -> bool {
        self.len(place) == 0
    }

    /// Get the topmost card of a place.
    #[must_use]
    pub fn top(&self, place: PlaceId) -> Option<&Card> {
        self.places.get(&place)?.back()
    }

    /// Get mutable access to the topmost card of a place.
    ///
    /// Only the visibility flag should be changed through this.
    pub fn top_mut(&mut self, place: PlaceId) -> Option<&mut Card> {
        self.places.get_mut(&place)?.back_mut()
    }

    /// Index of a card within a place, counted from the bottom.
    #[must_use]
    pub fn position(&self, place: PlaceId, card: CardId) -> Option<usize> {
        if self.locations.get(&card) != Some(&place) {
            return None;
        }
        self.places.get(&place)?.iter().position(|c| c.id == card)
    }

    /// Get the place a card is in.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<PlaceId> {
        self.locations.get(&card).copied()
    }

    /// Look up a card wherever it is.
    #[must_use]
    pub fn card(&self, card: CardId) -> Option<&Card> {
        let place = self.locate(card)?;
        self.places.get(&place)?.iter().find(|c| c.id == card)
    }

    /// Append a single card on top of a place.
    pub fn push(&mut self, place: PlaceId, card: Card) -> Result<()> {
        self.cards_mut(place)?.push_back(card);
        self.locations.insert(card.id, place);
        Ok(())
    }

    /// Append cards on top of a place, keeping their order.
    pub fn append(&mut self, place: PlaceId, cards: Vector<Card>) -> Result<()> {
        let sequence = self.cards_mut(place)?;
        let ids: Vec<CardId> = cards.iter().map(|c| c.id).collect();
        sequence.append(cards);
        for id in ids {
            self.locations.insert(id, place);
        }
        Ok(())
    }

    /// Remove the card at `index` and everything above it.
    ///
    /// An index at or past the end yields an empty sequence.
    pub fn take_from(&mut self, place: PlaceId, index: usize) -> Result<Vector<Card>> {
        let sequence = self.cards_mut(place)?;
        let index = index.min(sequence.len());
        let taken = sequence.split_off(index);
        self.forget(&taken);
        Ok(taken)
    }

    /// Remove up to `count` cards from the top of a place.
    pub fn take_back(&mut self, place: PlaceId, count: usize) -> Result<Vector<Card>> {
        let len = self.len(place);
        self.take_from(place, len.saturating_sub(count))
    }

    /// Remove up to `count` cards from the bottom of a place.
    pub fn take_front(&mut self, place: PlaceId, count: usize) -> Result<Vector<Card>> {
        let sequence = self.cards_mut(place)?;
        let count = count.min(sequence.len());
        let rest = sequence.split_off(count);
        let taken = std::mem::replace(sequence, rest);
        self.forget(&taken);
        Ok(taken)
    }

    /// Remove every card from a place.
    pub fn drain(&mut self, place: PlaceId) -> Result<Vector<Card>> {
        let taken = std::mem::take(self.cards_mut(place)?);
        self.forget(&taken);
        Ok(taken)
    }

    /// Move a card and everything stacked above it from `source` onto `dest`.
    ///
    /// Relative order is preserved. Returns how many cards moved. Nothing
    /// changes if the card is not in `source` or `dest` is unknown.
    pub fn transfer(&mut self, card: CardId, source: PlaceId, dest: PlaceId) -> Result<usize> {
        for place in [source, dest] {
            if !self.contains_place(place) {
                return Err(unknown(place));
            }
        }
        let index = self
            .position(source, card)
            .ok_or(RulesError::CardNotInPlace { card, place: source })?;

        let moved = self.take_from(source, index)?;
        let count = moved.len();
        self.append(dest, moved)?;
        Ok(count)
    }

    /// Total number of cards in all places.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Iterate over every card in every place (place order unspecified).
    pub fn iter(&self) -> impl Iterator<Item = (PlaceId, &Card)> + '_ {
        self.places
            .iter()
            .flat_map(|(&place, cards)| cards.iter().map(move |card| (place, card)))
    }

    fn forget(&mut self, cards: &Vector<Card>) {
        for card in cards {
            self.locations.remove(&card.id);
        }
    }
}

fn unknown(place: PlaceId) -> RulesError {
    RulesError::UnknownPlace(place.to_string())
}
