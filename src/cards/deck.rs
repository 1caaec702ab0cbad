//! Deck specification and construction.
//!
//! A `DeckSpec` is the canonical, immutable description of a deck:
//! per-name type and count. It is only ever used to *construct* fresh
//! per-game card multisets - a live game never holds a reference into
//! the spec, so games cannot alias each other's cards.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

use super::card::{Card, CardType};

/// Number of cards in a legal Pocket deck.
pub const DECK_SIZE: usize = 20;

/// Maximum copies of one card name allowed by the format.
pub const MAX_COPIES: u8 = 2;

/// One deck-list line: a card name with its type and copy count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub name: String,
    pub card_type: CardType,
    pub count: u8,
}

/// Declarative deck composition, keyed by card name.
///
/// Entries keep insertion order so introspection reports names in deck
/// order. Adding a name twice replaces the earlier entry, mirroring
/// assignment into a name-keyed map.
///
/// ## Example
///
/// ```
/// use pocket_sim::cards::{CardType, DeckSpec};
///
/// let spec = DeckSpec::new()
///     .with_card("Pikachu", CardType::BasicPokemon, 2)
///     .with_card("Poke Ball", CardType::Item, 2);
///
/// assert_eq!(spec.total_count(), 4);
/// assert_eq!(spec.count_of("Pikachu"), 2);
/// assert_eq!(spec.count_of("Mew"), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSpec {
    entries: Vec<DeckEntry>,
}

impl DeckSpec {
    /// Create an empty spec.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card line (builder pattern). Replaces any existing entry
    /// with the same name.
    #[must_use]
    pub fn with_card(mut self, name: impl Into<String>, card_type: CardType, count: u8) -> Self {
        self.add_card(name, card_type, count);
        self
    }

    /// Add a card line. Replaces any existing entry with the same name.
    pub fn add_card(&mut self, name: impl Into<String>, card_type: CardType, count: u8) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.name == name) {
            entry.card_type = card_type;
            entry.count = count;
        } else {
            self.entries.push(DeckEntry {
                name,
                card_type,
                count,
            });
        }
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    /// Total number of cards across all entries.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    /// Copy count for a name, 0 if absent.
    #[must_use]
    pub fn count_of(&self, name: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map_or(0, |e| e.count as usize)
    }

    /// Declared type for a name, `None` if absent.
    #[must_use]
    pub fn card_type_of(&self, name: &str) -> Option<CardType> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.card_type)
    }

    /// Total cards across entries matching a predicate.
    pub fn count_matching(&self, pred: impl Fn(&DeckEntry) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|e| pred(e))
            .map(|e| e.count as usize)
            .sum()
    }

    /// Expand into a fresh card multiset.
    ///
    /// Always allocates a new `Vec` - spec and game never share cards.
    /// Use `build_deck` when the 20-card invariant still needs checking.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        let mut deck = Vec::with_capacity(self.total_count());
        for entry in &self.entries {
            for _ in 0..entry.count {
                deck.push(Card::new(entry.name.clone(), entry.card_type));
            }
        }
        deck
    }

    /// Expand into a fresh card multiset, checking the deck-size rule.
    pub fn build_deck(&self) -> Result<Vec<Card>, ConfigError> {
        let total = self.total_count();
        if total != DECK_SIZE {
            return Err(ConfigError::DeckSize { total });
        }
        Ok(self.cards())
    }
}
