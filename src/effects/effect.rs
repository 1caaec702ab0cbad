//! Draw-effect vocabulary.
//!
//! Every draw card's behavior is one of a small set of shapes, so the
//! effect itself is data: a [`DrawEffect`] value looked up from the
//! registry and interpreted by the resolver. Adding a card with an
//! existing shape is a registry entry; only a genuinely new shape needs
//! a new variant and a resolver arm.

use smallvec::SmallVec;

use crate::cards::CardType;

/// What a draw card does when played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawEffect {
    /// Fetch a uniformly random deck card of the given type.
    TutorByType { target: CardType },
    /// Fetch a uniformly random deck card whose name is in `targets`.
    TutorByName { targets: SmallVec<[String; 2]> },
    /// Draw a fixed number of cards from the top of the deck.
    DrawFixed { count: u32 },
    /// Trade a Pokemon from hand for a random Pokemon from the deck.
    ExchangeWithDeck,
    /// Return the whole hand to the deck and draw that many cards.
    HandRefresh,
}

impl DrawEffect {
    /// Exchange effects resolve in their own phase, after every other
    /// effect has been chained.
    #[must_use]
    pub fn is_exchange(&self) -> bool {
        matches!(self, Self::ExchangeWithDeck)
    }

    /// Refresh effects are only worth playing in specific hand shapes,
    /// so the engine consults a policy before resolving them.
    #[must_use]
    pub fn is_refresh(&self) -> bool {
        matches!(self, Self::HandRefresh)
    }
}

/// Outcome of resolving one draw card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectOutcome {
    /// The card that was played.
    pub card_name: String,
    /// Whether the effect did anything.
    pub success: bool,
    /// Human-readable account of what happened.
    pub description: String,
    /// Structured account, for assertions and records.
    pub detail: EffectDetail,
}

impl EffectOutcome {
    #[must_use]
    pub fn success(
        card_name: impl Into<String>,
        description: impl Into<String>,
        detail: EffectDetail,
    ) -> Self {
        Self {
            card_name: card_name.into(),
            success: true,
            description: description.into(),
            detail,
        }
    }

    #[must_use]
    pub fn failure(card_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            card_name: card_name.into(),
            success: false,
            description: description.into(),
            detail: EffectDetail::None,
        }
    }
}

/// Structured payload of an [`EffectOutcome`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectDetail {
    /// Nothing moved (failed effects).
    None,
    /// A tutor fetched this card into hand.
    Fetched { name: String },
    /// A fixed draw put this many cards into hand.
    Drawn { count: u32 },
    /// An exchange sent `sacrificed` to the deck and fetched `fetched`.
    Exchanged { sacrificed: String, fetched: String },
    /// A refresh returned and redrew this many cards.
    Refreshed { returned: usize, drawn: usize },
}
