//! Per-game mutable state: draw pile, hand, discard pile, turn counter.
//!
//! ## Draw pile as a bag
//!
//! The deck holds no meaningful order. Every draw removes a uniformly
//! random element (one lazy Fisher-Yates step: pick a uniform index,
//! swap-remove), which makes each draw an unbiased sample without
//! replacement. Returning cards to the deck is a plain insertion - with
//! no order there is no reshuffle to forget and no positional
//! information to leak.
//!
//! ## Ownership
//!
//! A `GameState` is built fresh from a `DeckSpec` for each simulated
//! game and discarded afterwards. It owns its cards and its RNG; nothing
//! is shared across games.

use log::warn;
use smallvec::SmallVec;

use crate::cards::{Card, CardType, DeckSpec};

use super::rng::GameRng;

/// Cards drawn for the opening hand.
pub const OPENING_HAND_SIZE: usize = 5;

/// One game's card locations and turn counter.
#[derive(Clone, Debug)]
pub struct GameState {
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
    turn: u32,
    rng: GameRng,
}

impl GameState {
    /// Build a fresh state from the canonical spec: full deck, empty
    /// hand, turn 0.
    #[must_use]
    pub fn new(spec: &DeckSpec, rng: GameRng) -> Self {
        Self {
            deck: spec.cards(),
            hand: Vec::new(),
            discard: Vec::new(),
            turn: 0,
            rng,
        }
    }

    /// Assemble a state from explicit zones.
    ///
    /// Exists for effect harnesses and tests that need a known hand;
    /// the simulation engine always goes through `new`.
    #[must_use]
    pub fn from_parts(deck: Vec<Card>, hand: Vec<Card>, turn: u32, rng: GameRng) -> Self {
        Self {
            deck,
            hand,
            discard: Vec::new(),
            turn,
            rng,
        }
    }

    // === Accessors ===

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Cards currently held.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Cards consumed by play.
    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Current turn; 0 is the opening-hand turn.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Total cards across deck, hand and discard.
    ///
    /// Conservation invariant: equals the spec total at every
    /// observation point of a game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Hand contents as names, for snapshots.
    #[must_use]
    pub fn hand_names(&self) -> Vec<String> {
        self.hand.iter().map(|c| c.name.clone()).collect()
    }

    /// Whether the hand holds at least one copy of `name`.
    #[must_use]
    pub fn hand_contains(&self, name: &str) -> bool {
        self.hand.iter().any(|c| c.is_named(name))
    }

    /// Copies of `name` in hand.
    #[must_use]
    pub fn count_in_hand(&self, name: &str) -> usize {
        self.hand.iter().filter(|c| c.is_named(name)).count()
    }

    /// Copies of `name` in the deck.
    #[must_use]
    pub fn count_in_deck(&self, name: &str) -> usize {
        self.deck.iter().filter(|c| c.is_named(name)).count()
    }

    /// Type of the held card named `name`, if any copy is in hand.
    #[must_use]
    pub fn card_type_in_hand(&self, name: &str) -> Option<CardType> {
        self.hand
            .iter()
            .find(|c| c.is_named(name))
            .map(|c| c.card_type)
    }

    // === Draw operations ===

    /// Draw up to `count` cards into hand; returns the number actually
    /// drawn. Drawing from an empty deck draws nothing - a normal
    /// terminal condition, not a failure.
    pub fn draw(&mut self, count: usize) -> usize {
        let n = count.min(self.deck.len());
        for _ in 0..n {
            let idx = self.rng.gen_range_usize(0..self.deck.len());
            let card = self.deck.swap_remove(idx);
            self.hand.push(card);
        }
        n
    }

    /// Draw the opening hand, mulliganing until it holds a Basic
    /// Pokemon or the attempt budget runs out.
    ///
    /// Each attempt returns the whole hand to the deck and redraws 5 -
    /// with a bag this is exactly the full-reshuffle redraw, so every
    /// attempt is statistically independent. Returns `false` (and the
    /// game should be marked invalid) when the budget is exhausted.
    pub fn initial_draw(&mut self, max_attempts: u32) -> bool {
        for _ in 0..max_attempts {
            self.return_hand_to_deck();
            self.draw(OPENING_HAND_SIZE);
            if self.hand.iter().any(|c| c.card_type.is_basic()) {
                return true;
            }
        }
        warn!(
            "no Basic Pokemon after {} mulligan attempts; game is invalid",
            max_attempts
        );
        false
    }

    /// Advance to the next turn and draw the turn's card.
    ///
    /// Turn 0 is the opening hand and is never "advanced into"; every
    /// later turn starts with exactly one draw.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.draw(1);
    }

    // === Card movement ===

    /// Remove one copy of `name` from hand by identity.
    pub fn take_from_hand(&mut self, name: &str) -> Option<Card> {
        let idx = self.hand.iter().position(|c| c.is_named(name))?;
        Some(self.hand.swap_remove(idx))
    }

    /// Put a card into hand.
    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Move one copy of `name` from hand to the discard pile.
    /// Returns `false` if no copy is held.
    pub fn discard_from_hand(&mut self, name: &str) -> bool {
        match self.take_from_hand(name) {
            Some(card) => {
                self.discard.push(card);
                true
            }
            None => false,
        }
    }

    /// Remove a uniformly random deck card matching the predicate.
    pub fn take_random_from_deck_where(
        &mut self,
        pred: impl Fn(&Card) -> bool,
    ) -> Option<Card> {
        let matching: SmallVec<[usize; 8]> = self
            .deck
            .iter()
            .enumerate()
            .filter(|(_, c)| pred(c))
            .map(|(i, _)| i)
            .collect();
        let idx = *self.rng.choose(&matching)?;
        Some(self.deck.swap_remove(idx))
    }

    /// Insert a card into the deck bag.
    pub fn return_to_deck(&mut self, card: Card) {
        self.deck.push(card);
    }

    /// Move the entire hand into the deck bag; returns how many cards
    /// moved.
    pub fn return_hand_to_deck(&mut self) -> usize {
        let n = self.hand.len();
        self.deck.append(&mut self.hand);
        n
    }
}
