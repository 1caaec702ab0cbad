//! The player's side of the field: one active slot and a short bench.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

use super::slot::PokemonSlot;

/// Bench positions available in the Pocket format.
pub const BENCH_SIZE: usize = 3;

/// Position on the board: 0 is the active spot, 1..=3 the bench.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotIndex(pub u8);

impl SlotIndex {
    /// The active spot.
    pub const ACTIVE: SlotIndex = SlotIndex(0);

    /// Bench position `i` (0-based). `None` past the bench.
    #[must_use]
    pub const fn bench(i: u8) -> Option<SlotIndex> {
        if (i as usize) < BENCH_SIZE {
            Some(SlotIndex(i + 1))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_bench(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_active() {
            write!(f, "Active")
        } else {
            write!(f, "Bench {}", self.0)
        }
    }
}

/// One player's in-play Pokemon.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: [Option<PokemonSlot>; 1 + BENCH_SIZE],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a Basic into the active spot. Refused (card returned) when
    /// the spot is taken or the card is not a Basic.
    pub fn place_active(&mut self, basic: Card) -> Result<(), Card> {
        if self.slots[0].is_some() {
            return Err(basic);
        }
        self.slots[0] = Some(PokemonSlot::new(basic)?);
        Ok(())
    }

    /// Put a Basic on the first free bench spot and say which one.
    pub fn place_bench(&mut self, basic: Card) -> Result<SlotIndex, Card> {
        let Some(free) = (1..self.slots.len()).find(|&i| self.slots[i].is_none()) else {
            return Err(basic);
        };
        self.slots[free] = Some(PokemonSlot::new(basic)?);
        Ok(SlotIndex(free as u8))
    }

    #[must_use]
    pub fn slot(&self, index: SlotIndex) -> Option<&PokemonSlot> {
        self.slots.get(index.raw() as usize)?.as_ref()
    }

    #[must_use]
    pub fn slot_mut(&mut self, index: SlotIndex) -> Option<&mut PokemonSlot> {
        self.slots.get_mut(index.raw() as usize)?.as_mut()
    }

    /// Occupied positions, active first.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotIndex, &PokemonSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|s| (SlotIndex(i as u8), s)))
    }

    /// Number of Pokemon in play.
    #[must_use]
    pub fn pokemon_in_play(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Start-of-turn upkeep: every slot becomes eligible to evolve.
    pub fn start_turn(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.mark_turn_start();
        }
    }
}
