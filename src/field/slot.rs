//! One in-play Pokemon: its evolution stack and attached tool.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardType};

/// A Basic Pokemon in play, plus whatever has been stacked onto it.
///
/// Ownership moves on failure too: every fallible operation hands the
/// card back through `Err` instead of dropping it, so callers can
/// return it to hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSlot {
    base: Card,
    evolutions: SmallVec<[Card; 2]>,
    tool: Option<Card>,
    placed_this_turn: bool,
}

impl PokemonSlot {
    /// Open a slot with a Basic Pokemon. Anything else is refused and
    /// returned.
    ///
    /// A freshly placed Pokemon cannot evolve until the next turn.
    pub fn new(basic: Card) -> Result<Self, Card> {
        if !basic.card_type.is_basic() {
            return Err(basic);
        }
        Ok(Self {
            base: basic,
            evolutions: SmallVec::new(),
            tool: None,
            placed_this_turn: true,
        })
    }

    /// The card currently on top of the stack.
    #[must_use]
    pub fn top(&self) -> &Card {
        self.evolutions.last().unwrap_or(&self.base)
    }

    /// Evolution stage of the top card: 0 for a Basic, up to 2.
    #[must_use]
    pub fn stage(&self) -> u8 {
        self.top().card_type.stage().unwrap_or(0)
    }

    /// Whether `card` may be stacked on right now: exactly one stage
    /// above the top card, and the slot has not been placed or evolved
    /// this turn.
    #[must_use]
    pub fn can_evolve_into(&self, card: &Card) -> bool {
        if self.placed_this_turn {
            return false;
        }
        match card.card_type.stage() {
            Some(stage) => stage == self.stage() + 1,
            None => false,
        }
    }

    /// Stack an evolution on. Evolving counts as this turn's placement,
    /// so a slot evolves at most once per turn.
    pub fn evolve(&mut self, card: Card) -> Result<(), Card> {
        if !self.can_evolve_into(&card) {
            return Err(card);
        }
        self.evolutions.push(card);
        self.placed_this_turn = true;
        Ok(())
    }

    /// Attach a Tool. One per Pokemon; a second is refused.
    pub fn attach_tool(&mut self, tool: Card) -> Result<(), Card> {
        if tool.card_type != CardType::Tool || self.tool.is_some() {
            return Err(tool);
        }
        self.tool = Some(tool);
        Ok(())
    }

    #[must_use]
    pub fn tool(&self) -> Option<&Card> {
        self.tool.as_ref()
    }

    /// Clear the placement flag at the start of a new turn.
    pub fn mark_turn_start(&mut self) {
        self.placed_this_turn = false;
    }

    #[must_use]
    pub fn placed_this_turn(&self) -> bool {
        self.placed_this_turn
    }

    /// Every card committed to this slot: the stack bottom-up, then the
    /// tool.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        std::iter::once(&self.base)
            .chain(self.evolutions.iter())
            .chain(self.tool.iter())
    }
}
