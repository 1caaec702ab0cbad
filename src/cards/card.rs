//! Card identity - name and type category.
//!
//! A `Card` is a pure value: two cards are equal iff both name and type
//! match. Instance state (which zone a card sits in) lives in the
//! structures that hold the card, never on the card itself.

use serde::{Deserialize, Serialize};

/// Card type categories of the Pocket format.
///
/// Parsed from the human-readable strings used by deck lists
/// ("Basic Pokemon", "Stage1 Pokemon", ...). Strings outside the known
/// set map to `Unknown` rather than failing - a deck list may carry
/// card types this engine has no rules for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[serde(rename = "Basic Pokemon")]
    BasicPokemon,
    #[serde(rename = "Stage1 Pokemon")]
    Stage1Pokemon,
    #[serde(rename = "Stage2 Pokemon")]
    Stage2Pokemon,
    #[serde(rename = "Item")]
    Item,
    #[serde(rename = "Supporter")]
    Supporter,
    #[serde(rename = "Tool")]
    Tool,
    #[serde(rename = "Basic Energy")]
    BasicEnergy,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl CardType {
    /// Parse a deck-list type string. Unrecognized strings become `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Basic Pokemon" => Self::BasicPokemon,
            "Stage1 Pokemon" => Self::Stage1Pokemon,
            "Stage2 Pokemon" => Self::Stage2Pokemon,
            "Item" => Self::Item,
            "Supporter" => Self::Supporter,
            "Tool" => Self::Tool,
            "Basic Energy" => Self::BasicEnergy,
            _ => Self::Unknown,
        }
    }

    /// The deck-list string for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BasicPokemon => "Basic Pokemon",
            Self::Stage1Pokemon => "Stage1 Pokemon",
            Self::Stage2Pokemon => "Stage2 Pokemon",
            Self::Item => "Item",
            Self::Supporter => "Supporter",
            Self::Tool => "Tool",
            Self::BasicEnergy => "Basic Energy",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether this is any Pokemon tier (Basic, Stage1 or Stage2).
    #[must_use]
    pub const fn is_pokemon(self) -> bool {
        matches!(
            self,
            Self::BasicPokemon | Self::Stage1Pokemon | Self::Stage2Pokemon
        )
    }

    /// Whether this is a Basic Pokemon (the mulligan-relevant tier).
    #[must_use]
    pub const fn is_basic(self) -> bool {
        matches!(self, Self::BasicPokemon)
    }

    /// Evolution stage for Pokemon tiers (0-2), `None` for non-Pokemon.
    #[must_use]
    pub const fn stage(self) -> Option<u8> {
        match self {
            Self::BasicPokemon => Some(0),
            Self::Stage1Pokemon => Some(1),
            Self::Stage2Pokemon => Some(2),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single card: immutable name and type.
///
/// ## Example
///
/// ```
/// use pocket_sim::cards::{Card, CardType};
///
/// let ball = Card::new("Poke Ball", CardType::Item);
/// assert_eq!(format!("{}", ball), "Poke Ball (Item)");
/// assert!(!ball.card_type.is_pokemon());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card name (the identity used by deck lists and draw orders).
    pub name: String,

    /// Type category.
    pub card_type: CardType,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            name: name.into(),
            card_type,
        }
    }

    /// Whether this card is named `name`.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.card_type)
    }
}
