//! Klondike rules engine.
//!
//! `KlondikeRules` owns a [`PlaceRegistry`] and decides which transfers
//! between its places are legal. It also deals, draws from the stock,
//! flips newly exposed tableau cards, and detects the win.
//!
//! ## Usage
//!
//! ```
//! use klondike_rules::cards::shuffled_deck;
//! use klondike_rules::core::{KlondikeConfig, PickCount};
//! use klondike_rules::places::PlaceId;
//! use klondike_rules::rules::KlondikeRules;
//!
//! let config = KlondikeConfig::new().with_pick_count(PickCount::Three);
//! let mut game = KlondikeRules::new(shuffled_deck(42), config).unwrap();
//! game.deal().unwrap();
//!
//! assert_eq!(game.cards(PlaceId::Stock).unwrap().len(), 24);
//! game.stock_to_discard().unwrap();
//! assert_eq!(game.cards(PlaceId::Discard).unwrap().len(), 3);
//! ```

use im::Vector;
use log::{debug, trace, warn};

use crate::cards::{Card, CardFace, CardId, ACE, DECK_SIZE, KING};
use crate::core::config::{KlondikeConfig, PickCount};
use crate::core::error::{Result, RulesError};
use crate::places::{PlaceId, PlaceRegistry, Topology};

/// Number of cards in a complete foundation.
const FULL_FOUNDATION: usize = KING as usize;

/// What a stock draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockDraw {
    /// This many cards were turned over onto the discard pile.
    Drew(usize),
    /// The stock was empty; this many discard cards went back face-down.
    Recycled(usize),
}

/// Stateful Klondike rules over the thirteen board places.
///
/// ## Lifecycle
///
/// 1. `new` takes exactly 52 faces; every card starts face-down and off the
///    board.
/// 2. `deal` puts them on the board.
/// 3. The caller checks `can_maybe_move_somewhere` / `can_move` before
///    calling `move_card`, draws with `stock_to_discard`, and polls
///    `check_win`.
///
/// The engine trusts its caller: `move_card` does not re-check legality.
#[derive(Clone, Debug)]
pub struct KlondikeRules {
    config: KlondikeConfig,
    places: PlaceRegistry,
    /// Cards not yet dealt, in deck order. Empty once dealt.
    undealt: Vec<Card>,
    dealt: bool,
}

impl KlondikeRules {
    /// Create an engine from a 52-card deck.
    ///
    /// Card ids are the faces' indices in `deck`.
    pub fn new(deck: impl IntoIterator<Item = CardFace>, config: KlondikeConfig) -> Result<Self> {
        let faces: Vec<CardFace> = deck.into_iter().collect();
        if faces.len() != DECK_SIZE {
            return Err(RulesError::InvalidDeck {
                expected: DECK_SIZE,
                actual: faces.len(),
            });
        }

        let undealt = faces
            .into_iter()
            .enumerate()
            .map(|(i, face)| Card::new(CardId(i as u8), face))
            .collect();

        let mut places = PlaceRegistry::new();
        for place in Topology::all_place_ids() {
            places.init_place(place);
        }

        debug!("new klondike game, pick count {}", config.pick_count);
        Ok(Self {
            config,
            places,
            undealt,
            dealt: false,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &KlondikeConfig {
        &self.config
    }

    #[must_use]
    pub fn pick_count(&self) -> PickCount {
        self.config.pick_count
    }

    #[must_use]
    pub fn is_dealt(&self) -> bool {
        self.dealt
    }

    /// The registry holding the board.
    #[must_use]
    pub fn places(&self) -> &PlaceRegistry {
        &self.places
    }

    /// Cards of a place, bottom first.
    pub fn cards(&self, place: PlaceId) -> Result<&Vector<Card>> {
        self.places.cards(place.validate()?)
    }

    /// Topmost card of a place.
    #[must_use]
    pub fn top_card(&self, place: PlaceId) -> Option<&Card> {
        self.places.top(place)
    }

    /// Look up a card, dealt or not.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.places
            .card(id)
            .or_else(|| self.undealt.iter().find(|c| c.id == id))
    }

    /// Place a card is in. `None` before dealing.
    #[must_use]
    pub fn locate(&self, id: CardId) -> Option<PlaceId> {
        self.places.locate(id)
    }

    /// Id of the card with the given face.
    #[must_use]
    pub fn find(&self, face: CardFace) -> Option<CardId> {
        self.all_cards().find(|c| c.face() == face).map(|c| c.id)
    }

    /// Every card owned by the engine, dealt or not.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.undealt
            .iter()
            .chain(self.places.iter().map(|(_, card)| card))
    }

    // === Dealing ===

    /// Deal the deck.
    ///
    /// Everything goes into the stock face-down in deck order. Column `i`
    /// then receives the last `i + 1` stock cards, with only its top card
    /// turned face-up. The stock keeps the remaining 24.
    pub fn deal(&mut self) -> Result<()> {
        if self.dealt {
            warn!("deal called on an already dealt game");
            return Err(RulesError::AlreadyDealt);
        }

        for mut card in std::mem::take(&mut self.undealt) {
            card.visible = false;
            self.places.push(PlaceId::Stock, card)?;
        }

        for (i, column) in Topology::TABLEAU_ORDER.into_iter().enumerate() {
            let cards = self.places.take_back(PlaceId::Stock, i + 1)?;
            self.places.append(column, cards)?;
            if let Some(top) = self.places.top_mut(column) {
                top.visible = true;
            }
        }

        self.dealt = true;
        debug!(
            "dealt {} cards to the tableau, {} left in stock",
            DECK_SIZE - self.places.len(PlaceId::Stock),
            self.places.len(PlaceId::Stock)
        );
        Ok(())
    }

    // === Legality ===

    /// Cheap check whether `card` could move anywhere at all.
    ///
    /// - stock: never (drawing is `stock_to_discard`)
    /// - discard, foundation: only the topmost card
    /// - tableau: any face-up card
    pub fn can_maybe_move_somewhere(&self, card: CardId, source: PlaceId) -> Result<bool> {
        let result = match source.validate()? {
            PlaceId::Stock => false,
            PlaceId::Discard | PlaceId::Foundation(_) => {
                self.places.top(source).is_some_and(|top| top.id == card)
            }
            PlaceId::Tableau(_) => self.card(card).is_some_and(|c| c.visible),
        };
        trace!("can_maybe_move_somewhere({card}, {source}) = {result}");
        Ok(result)
    }

    /// Check whether moving `card` (with everything above it) from `source`
    /// to `dest` is legal. Has no side effects.
    pub fn can_move(&self, card: CardId, source: PlaceId, dest: PlaceId) -> Result<bool> {
        let result = self.check_move(card, source.validate()?, dest.validate()?)?;
        trace!("can_move({card}, {source}, {dest}) = {result}");
        Ok(result)
    }

    fn check_move(&self, card: CardId, source: PlaceId, dest: PlaceId) -> Result<bool> {
        let source_cards = self.places.cards(source)?;
        let dest_top = self.places.top(dest);

        let (index, moving) = source_cards
            .iter()
            .enumerate()
            .find(|(_, c)| c.id == card)
            .ok_or(RulesError::CardNotInPlace { card, place: source })?;
        let is_topmost = index + 1 == source_cards.len();

        if is_topmost {
            if matches!(dest, PlaceId::Stock | PlaceId::Discard) || !moving.visible {
                return Ok(false);
            }
            if dest.is_foundation() {
                return Ok(match dest_top {
                    None => moving.number == ACE,
                    Some(top) => {
                        moving.suit == top.suit && top.number.checked_add(1) == Some(moving.number)
                    }
                });
            }
        } else if !(source.is_tableau() && dest.is_tableau() && moving.visible) {
            // A run can only be lifted tableau to tableau, from a face-up card
            return Ok(false);
        }

        if !dest.is_tableau() {
            return Err(RulesError::InternalInvariant(
                "non-tableau destination reached the tableau check",
            ));
        }

        Ok(match dest_top {
            None => moving.number == KING,
            Some(top) => {
                moving.color() != top.color() && top.number.checked_sub(1) == Some(moving.number)
            }
        })
    }

    // === Mutation ===

    /// Move `card` and everything above it from `source` onto `dest`.
    ///
    /// Legality is not re-checked; call `can_move` first. When the source
    /// is a tableau column that still has cards, its new top card is turned
    /// face-up. Returns how many cards moved.
    pub fn move_card(&mut self, card: CardId, source: PlaceId, dest: PlaceId) -> Result<usize> {
        let moved = self
            .places
            .transfer(card, source.validate()?, dest.validate()?)?;

        if source.is_tableau() {
            if let Some(top) = self.places.top_mut(source) {
                top.visible = true;
            }
        }

        debug!("moved {moved} card(s) starting at {card} from {source} to {dest}");
        Ok(moved)
    }

    /// Move if legal. Returns whether the move happened.
    pub fn try_move(&mut self, card: CardId, source: PlaceId, dest: PlaceId) -> Result<bool> {
        if !self.can_move(card, source, dest)? {
            return Ok(false);
        }
        self.move_card(card, source, dest)?;
        Ok(true)
    }

    /// Draw from the stock.
    ///
    /// With cards in the stock, up to `pick_count` cards are taken from the
    /// front of the stock and appended face-up to the discard pile, in the
    /// same order. With an empty stock, the whole discard pile goes back
    /// into the stock face-down, in its current order.
    pub fn stock_to_discard(&mut self) -> Result<StockDraw> {
        if self.places.is_empty(PlaceId::Stock) {
            let mut cards = self.places.drain(PlaceId::Discard)?;
            for card in cards.iter_mut() {
                card.visible = false;
            }
            let count = cards.len();
            self.places.append(PlaceId::Stock, cards)?;

            debug!("recycled {count} discard card(s) into the stock");
            return Ok(StockDraw::Recycled(count));
        }

        let mut cards = self
            .places
            .take_front(PlaceId::Stock, self.config.pick_count.count())?;
        for card in cards.iter_mut() {
            card.visible = true;
        }
        let count = cards.len();
        self.places.append(PlaceId::Discard, cards)?;

        debug!("drew {count} card(s) from the stock");
        Ok(StockDraw::Drew(count))
    }

    /// Move `card` to the first foundation that accepts it.
    ///
    /// Foundations are tried in [`Topology::FOUNDATION_ORDER`]. A card that
    /// already sits on a foundation is not special-cased.
    pub fn move_card_to_any_foundation(&mut self, card: CardId, source: PlaceId) -> Result<bool> {
        for dest in Topology::FOUNDATION_ORDER {
            if self.can_move(card, source, dest)? {
                self.move_card(card, source, dest)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Move the first topmost card that fits onto a foundation.
    ///
    /// Places are scanned in [`Topology::AUTO_MOVE_SCAN_ORDER`] (tableau
    /// columns, then discard) and the scan stops at the first move made.
    pub fn move_any_card_to_any_foundation(&mut self) -> Result<bool> {
        for source in Topology::AUTO_MOVE_SCAN_ORDER {
            let Some(top) = self.places.top(source).map(|c| c.id) else {
                continue;
            };
            if self.move_card_to_any_foundation(top, source)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // === Win detection ===

    /// True when every foundation holds a complete suit.
    #[must_use]
    pub fn check_win(&self) -> bool {
        Topology::FOUNDATION_ORDER
            .into_iter()
            .all(|f| self.places.len(f) == FULL_FOUNDATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{standard_deck, Suit};

    fn dealt_game() -> KlondikeRules {
        let mut game = KlondikeRules::new(standard_deck(), KlondikeConfig::new()).unwrap();
        game.deal().unwrap();
        game
    }

    /// Empty every place, then lay out `layout` (bottom first, face-up).
    /// Leftover cards go face-down into the stock.
    fn arranged(layout: Vec<(PlaceId, Vec<(Suit, u8)>)>) -> KlondikeRules {
        let mut game = dealt_game();
        let mut pool = Vector::new();
        for place in Topology::all_place_ids() {
            pool.append(game.places.drain(place).unwrap());
        }

        for (place, faces) in layout {
            for (suit, number) in faces {
                let index = pool
                    .iter()
                    .position(|c: &Card| c.face() == CardFace::new(suit, number))
                    .unwrap();
                let mut card = pool.remove(index);
                card.visible = true;
                game.places.push(place, card).unwrap();
            }
        }
        for mut card in pool {
            card.visible = false;
            game.places.push(PlaceId::Stock, card).unwrap();
        }
        game
    }

    /// Turn the bottom `count` cards of a place face-down.
    fn hide_bottom(game: &mut KlondikeRules, place: PlaceId, count: usize) {
        let mut cards = game.places.drain(place).unwrap();
        for card in cards.iter_mut().take(count) {
            card.visible = false;
        }
        game.places.append(place, cards).unwrap();
    }

    fn id(game: &KlondikeRules, suit: Suit, number: u8) -> CardId {
        game.find(CardFace::new(suit, number)).unwrap()
    }

    #[test]
    fn test_new_rejects_wrong_deck_size() {
        let mut deck = standard_deck();
        deck.pop();

        let err = KlondikeRules::new(deck, KlondikeConfig::new()).unwrap_err();
        assert_eq!(err, RulesError::InvalidDeck { expected: 52, actual: 51 });
    }

    #[test]
    fn test_new_game_is_face_down_and_off_the_board() {
        let game = KlondikeRules::new(standard_deck(), KlondikeConfig::new()).unwrap();

        assert!(!game.is_dealt());
        assert_eq!(game.all_cards().count(), 52);
        assert!(game.all_cards().all(|c| !c.visible));
        assert_eq!(game.places().total_cards(), 0);
        assert_eq!(game.card(CardId(0)).map(|c| c.face()), Some(CardFace::new(Suit::Hearts, 1)));
    }

    #[test]
    fn test_deal_layout() {
        let game = dealt_game();

        let stock = game.cards(PlaceId::Stock).unwrap();
        assert_eq!(stock.len(), 24);
        assert!(stock.iter().all(|c| !c.visible));

        for (i, column) in Topology::TABLEAU_ORDER.into_iter().enumerate() {
            let cards = game.cards(column).unwrap();
            assert_eq!(cards.len(), i + 1);
            for (j, card) in cards.iter().enumerate() {
                assert_eq!(card.visible, j == i, "{column} card {j}");
            }
        }
    }

    #[test]
    fn test_deal_takes_from_the_end_of_the_stock() {
        let game = dealt_game();

        // Column 0 gets the very last deck card, column 1 the two before it
        let ids = |place: PlaceId| -> Vec<u8> {
            game.cards(place).unwrap().iter().map(|c| c.id.0).collect()
        };
        assert_eq!(ids(PlaceId::Tableau(0)), vec![51]);
        assert_eq!(ids(PlaceId::Tableau(1)), vec![49, 50]);
        assert_eq!(ids(PlaceId::Tableau(6)), vec![24, 25, 26, 27, 28, 29, 30]);
        assert_eq!(ids(PlaceId::Stock), (0..24u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_deal_twice_is_rejected() {
        let mut game = dealt_game();
        assert_eq!(game.deal(), Err(RulesError::AlreadyDealt));
        assert_eq!(game.places().total_cards(), 52);
    }

    #[test]
    fn test_can_maybe_move_somewhere() {
        let game = arranged(vec![
            (PlaceId::Discard, vec![(Suit::Hearts, 5), (Suit::Clubs, 9)]),
            (PlaceId::Foundation(0), vec![(Suit::Spades, 1)]),
            (PlaceId::Tableau(0), vec![(Suit::Hearts, 13)]),
        ]);

        let stock_top = game.top_card(PlaceId::Stock).unwrap().id;
        assert_eq!(game.can_maybe_move_somewhere(stock_top, PlaceId::Stock), Ok(false));

        assert_eq!(
            game.can_maybe_move_somewhere(id(&game, Suit::Clubs, 9), PlaceId::Discard),
            Ok(true)
        );
        assert_eq!(
            game.can_maybe_move_somewhere(id(&game, Suit::Hearts, 5), PlaceId::Discard),
            Ok(false)
        );
        assert_eq!(
            game.can_maybe_move_somewhere(id(&game, Suit::Spades, 1), PlaceId::Foundation(0)),
            Ok(true)
        );
        assert_eq!(
            game.can_maybe_move_somewhere(id(&game, Suit::Hearts, 13), PlaceId::Tableau(0)),
            Ok(true)
        );
        assert_eq!(
            game.can_maybe_move_somewhere(stock_top, PlaceId::Tableau(7)),
            Err(RulesError::UnknownPlace("tableau7".to_string()))
        );
    }

    #[test]
    fn test_can_maybe_move_somewhere_face_down_tableau_card() {
        let game = dealt_game();
        let bottom = game.cards(PlaceId::Tableau(3)).unwrap()[0].id;
        let top = game.top_card(PlaceId::Tableau(3)).unwrap().id;

        assert_eq!(game.can_maybe_move_somewhere(bottom, PlaceId::Tableau(3)), Ok(false));
        assert_eq!(game.can_maybe_move_somewhere(top, PlaceId::Tableau(3)), Ok(true));
    }

    #[test]
    fn test_can_move_card_not_in_place() {
        let game = dealt_game();
        let card = game.top_card(PlaceId::Tableau(0)).unwrap().id;

        assert_eq!(
            game.can_move(card, PlaceId::Tableau(1), PlaceId::Foundation(0)),
            Err(RulesError::CardNotInPlace {
                card,
                place: PlaceId::Tableau(1),
            })
        );
    }

    #[test]
    fn test_foundation_sequence() {
        let mut game = arranged(vec![
            (PlaceId::Tableau(0), vec![(Suit::Hearts, 2)]),
            (PlaceId::Tableau(1), vec![(Suit::Hearts, 1)]),
            (PlaceId::Tableau(2), vec![(Suit::Hearts, 3)]),
        ]);
        let two = id(&game, Suit::Hearts, 2);
        let ace = id(&game, Suit::Hearts, 1);
        let three = id(&game, Suit::Hearts, 3);
        let foundation = PlaceId::Foundation(0);

        assert_eq!(game.can_move(two, PlaceId::Tableau(0), foundation), Ok(false));
        assert_eq!(game.can_move(ace, PlaceId::Tableau(1), foundation), Ok(true));

        game.move_card(ace, PlaceId::Tableau(1), foundation).unwrap();
        assert_eq!(game.top_card(foundation).map(|c| c.id), Some(ace));

        assert_eq!(game.can_move(three, PlaceId::Tableau(2), foundation), Ok(false));
        assert_eq!(game.can_move(two, PlaceId::Tableau(0), foundation), Ok(true));
    }

    #[test]
    fn test_foundation_requires_same_suit() {
        let game = arranged(vec![
            (PlaceId::Foundation(0), vec![(Suit::Hearts, 1)]),
            (PlaceId::Tableau(0), vec![(Suit::Diamonds, 2)]),
        ]);
        let two = id(&game, Suit::Diamonds, 2);

        assert_eq!(game.can_move(two, PlaceId::Tableau(0), PlaceId::Foundation(0)), Ok(false));
        assert_eq!(game.can_move(two, PlaceId::Tableau(0), PlaceId::Foundation(1)), Ok(false));
    }

    #[test]
    fn test_tableau_sequence() {
        let mut game = arranged(vec![
            (PlaceId::Discard, vec![(Suit::Spades, 12)]),
            (PlaceId::Tableau(1), vec![(Suit::Spades, 13)]),
            (PlaceId::Tableau(2), vec![(Suit::Hearts, 12)]),
        ]);
        let queen_spades = id(&game, Suit::Spades, 12);
        let king_spades = id(&game, Suit::Spades, 13);
        let queen_hearts = id(&game, Suit::Hearts, 12);
        let empty = PlaceId::Tableau(0);

        assert_eq!(game.can_move(queen_spades, PlaceId::Discard, empty), Ok(false));
        assert_eq!(game.can_move(king_spades, PlaceId::Tableau(1), empty), Ok(true));

        game.move_card(king_spades, PlaceId::Tableau(1), empty).unwrap();

        assert_eq!(game.can_move(queen_spades, PlaceId::Discard, empty), Ok(false));
        assert_eq!(game.can_move(queen_hearts, PlaceId::Tableau(2), empty), Ok(true));
    }

    #[test]
    fn test_topmost_cannot_go_to_stock_or_discard() {
        let game = arranged(vec![(PlaceId::Tableau(0), vec![(Suit::Clubs, 4)])]);
        let four = id(&game, Suit::Clubs, 4);

        assert_eq!(game.can_move(four, PlaceId::Tableau(0), PlaceId::Stock), Ok(false));
        assert_eq!(game.can_move(four, PlaceId::Tableau(0), PlaceId::Discard), Ok(false));
    }

    #[test]
    fn test_face_down_topmost_cannot_move() {
        let mut game = arranged(vec![(PlaceId::Tableau(0), vec![(Suit::Clubs, 13)])]);
        game.places.top_mut(PlaceId::Tableau(0)).unwrap().visible = false;
        let king = id(&game, Suit::Clubs, 13);

        assert_eq!(game.can_move(king, PlaceId::Tableau(0), PlaceId::Tableau(1)), Ok(false));
    }

    #[test]
    fn test_run_moves_between_tableau_columns() {
        let mut game = arranged(vec![
            (
                PlaceId::Tableau(0),
                vec![(Suit::Hearts, 2), (Suit::Spades, 9), (Suit::Hearts, 8), (Suit::Clubs, 7)],
            ),
            (PlaceId::Tableau(1), vec![(Suit::Diamonds, 10)]),
        ]);
        hide_bottom(&mut game, PlaceId::Tableau(0), 1);
        let nine = id(&game, Suit::Spades, 9);
        let eight = id(&game, Suit::Hearts, 8);

        // Runs never go to a foundation, even when the base card would fit
        assert_eq!(game.can_move(eight, PlaceId::Tableau(0), PlaceId::Foundation(0)), Ok(false));
        assert_eq!(game.can_move(eight, PlaceId::Tableau(0), PlaceId::Tableau(1)), Ok(false));
        assert_eq!(game.can_move(nine, PlaceId::Tableau(0), PlaceId::Tableau(1)), Ok(true));

        assert_eq!(game.move_card(nine, PlaceId::Tableau(0), PlaceId::Tableau(1)), Ok(3));

        let column: Vec<_> = game
            .cards(PlaceId::Tableau(1))
            .unwrap()
            .iter()
            .map(|c| c.number)
            .collect();
        assert_eq!(column, vec![10, 9, 8, 7]);

        // The card left behind is turned face-up
        let left = game.top_card(PlaceId::Tableau(0)).unwrap();
        assert_eq!(left.face(), CardFace::new(Suit::Hearts, 2));
        assert!(left.visible);
    }

    #[test]
    fn test_run_from_face_down_card_is_illegal() {
        let game = dealt_game();
        let column = game.cards(PlaceId::Tableau(2)).unwrap();
        let hidden = column[1].id;

        for dest in Topology::all_place_ids() {
            assert_eq!(game.can_move(hidden, PlaceId::Tableau(2), dest), Ok(false), "{dest}");
        }
    }

    #[test]
    fn test_move_reveals_only_tableau_sources() {
        let mut game = arranged(vec![(
            PlaceId::Discard,
            vec![(Suit::Hearts, 7), (Suit::Hearts, 1)],
        )]);
        // A discard move must not flip the card underneath
        hide_bottom(&mut game, PlaceId::Discard, 1);
        let under = id(&game, Suit::Hearts, 7);
        let ace = id(&game, Suit::Hearts, 1);
        game.move_card(ace, PlaceId::Discard, PlaceId::Foundation(0)).unwrap();

        let top = game.top_card(PlaceId::Discard).unwrap();
        assert_eq!(top.id, under);
        assert!(!top.visible);
    }

    #[test]
    fn test_can_move_is_pure() {
        let game = dealt_game();
        let before: Vec<_> = game.all_cards().copied().collect();
        let top = game.top_card(PlaceId::Tableau(4)).unwrap().id;

        let first = game.can_move(top, PlaceId::Tableau(4), PlaceId::Tableau(5));
        for _ in 0..5 {
            assert_eq!(game.can_move(top, PlaceId::Tableau(4), PlaceId::Tableau(5)), first);
        }
        let after: Vec<_> = game.all_cards().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_try_move() {
        let mut game = arranged(vec![
            (PlaceId::Tableau(0), vec![(Suit::Clubs, 1)]),
            (PlaceId::Tableau(1), vec![(Suit::Clubs, 3)]),
        ]);
        let ace = id(&game, Suit::Clubs, 1);
        let three = id(&game, Suit::Clubs, 3);

        assert_eq!(game.try_move(three, PlaceId::Tableau(1), PlaceId::Foundation(2)), Ok(false));
        assert_eq!(game.try_move(ace, PlaceId::Tableau(0), PlaceId::Foundation(2)), Ok(true));
        assert_eq!(game.locate(ace), Some(PlaceId::Foundation(2)));
        assert_eq!(game.locate(three), Some(PlaceId::Tableau(1)));
    }

    #[test]
    fn test_stock_to_discard_draws_from_the_front() {
        let config = KlondikeConfig::new().with_pick_count(PickCount::Three);
        let mut game = KlondikeRules::new(standard_deck(), config).unwrap();
        game.deal().unwrap();

        assert_eq!(game.stock_to_discard(), Ok(StockDraw::Drew(3)));

        let discard = game.cards(PlaceId::Discard).unwrap();
        let ids: Vec<_> = discard.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(discard.iter().all(|c| c.visible));
        assert_eq!(game.cards(PlaceId::Stock).unwrap().len(), 21);
    }

    #[test]
    fn test_stock_to_discard_partial_draw_and_recycle() {
        let config = KlondikeConfig::new().with_pick_count(PickCount::Three);
        let mut game = KlondikeRules::new(standard_deck(), config).unwrap();
        game.deal().unwrap();

        // 24 cards: eight full draws
        for _ in 0..8 {
            assert_eq!(game.stock_to_discard(), Ok(StockDraw::Drew(3)));
        }
        let order: Vec<_> = game.cards(PlaceId::Discard).unwrap().iter().map(|c| c.id).collect();

        assert_eq!(game.stock_to_discard(), Ok(StockDraw::Recycled(24)));
        assert!(game.cards(PlaceId::Discard).unwrap().is_empty());

        let stock = game.cards(PlaceId::Stock).unwrap();
        assert!(stock.iter().all(|c| !c.visible));
        assert_eq!(stock.iter().map(|c| c.id).collect::<Vec<_>>(), order);

        // Play one card off the discard pile so the last draw of the next pass is short
        for _ in 0..8 {
            game.stock_to_discard().unwrap();
        }
        let top = game.top_card(PlaceId::Discard).unwrap().id;
        assert_eq!(game.move_card(top, PlaceId::Discard, PlaceId::Tableau(0)), Ok(1));

        assert_eq!(game.stock_to_discard(), Ok(StockDraw::Recycled(23)));
        for _ in 0..7 {
            assert_eq!(game.stock_to_discard(), Ok(StockDraw::Drew(3)));
        }
        assert_eq!(game.stock_to_discard(), Ok(StockDraw::Drew(2)));
        assert_eq!(game.stock_to_discard(), Ok(StockDraw::Recycled(23)));
    }

    #[test]
    fn test_stock_to_discard_with_both_empty() {
        let mut game = arranged(vec![]);
        game.places.drain(PlaceId::Stock).unwrap();

        assert_eq!(game.stock_to_discard(), Ok(StockDraw::Recycled(0)));
    }

    #[test]
    fn test_move_card_to_any_foundation_uses_first_accepting() {
        let mut game = arranged(vec![
            (PlaceId::Foundation(0), vec![(Suit::Hearts, 1)]),
            (PlaceId::Tableau(0), vec![(Suit::Spades, 1)]),
            (PlaceId::Tableau(1), vec![(Suit::Hearts, 2)]),
            (PlaceId::Tableau(2), vec![(Suit::Hearts, 4)]),
        ]);
        let ace_spades = id(&game, Suit::Spades, 1);
        let two_hearts = id(&game, Suit::Hearts, 2);
        let four_hearts = id(&game, Suit::Hearts, 4);

        assert_eq!(game.move_card_to_any_foundation(ace_spades, PlaceId::Tableau(0)), Ok(true));
        assert_eq!(game.locate(ace_spades), Some(PlaceId::Foundation(1)));

        assert_eq!(game.move_card_to_any_foundation(two_hearts, PlaceId::Tableau(1)), Ok(true));
        assert_eq!(game.locate(two_hearts), Some(PlaceId::Foundation(0)));

        assert_eq!(game.move_card_to_any_foundation(four_hearts, PlaceId::Tableau(2)), Ok(false));
        assert_eq!(game.locate(four_hearts), Some(PlaceId::Tableau(2)));
    }

    #[test]
    fn test_move_any_card_scans_tableau_before_discard() {
        let mut game = arranged(vec![
            (PlaceId::Discard, vec![(Suit::Clubs, 1)]),
            (PlaceId::Tableau(5), vec![(Suit::Diamonds, 1)]),
        ]);
        let ace_clubs = id(&game, Suit::Clubs, 1);
        let ace_diamonds = id(&game, Suit::Diamonds, 1);

        assert_eq!(game.move_any_card_to_any_foundation(), Ok(true));
        assert_eq!(game.locate(ace_diamonds), Some(PlaceId::Foundation(0)));
        assert_eq!(game.locate(ace_clubs), Some(PlaceId::Discard));

        assert_eq!(game.move_any_card_to_any_foundation(), Ok(true));
        assert_eq!(game.locate(ace_clubs), Some(PlaceId::Foundation(1)));

        assert_eq!(game.move_any_card_to_any_foundation(), Ok(false));
    }

    #[test]
    fn test_check_win() {
        let mut layout: Vec<(PlaceId, Vec<(Suit, u8)>)> = Vec::new();
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            layout.push((PlaceId::Foundation(i as u8), (1..=13).map(|n| (suit, n)).collect()));
        }
        let game = arranged(layout);
        assert!(game.check_win());
        assert!(!dealt_game().check_win());
    }

    #[test]
    fn test_check_win_needs_every_foundation() {
        let mut layout: Vec<(PlaceId, Vec<(Suit, u8)>)> = Vec::new();
        for (i, suit) in Suit::ALL.into_iter().enumerate().take(3) {
            layout.push((PlaceId::Foundation(i as u8), (1..=13).map(|n| (suit, n)).collect()));
        }
        layout.push((PlaceId::Foundation(3), (1..=12).map(|n| (Suit::Spades, n)).collect()));
        assert!(!arranged(layout).check_win());
    }
}
