//! Per-game trace records.
//!
//! A simulated game produces a [`GameRecord`]: one [`TurnRecord`] per
//! turn plus the final hand. Probability predicates read these records
//! instead of poking at engine internals, which keeps the estimators
//! decoupled from how games are run.

use serde::{Deserialize, Serialize};

/// What happened on one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number; 0 is the opening hand.
    pub turn: u32,
    /// Hand after this turn's draw, before any effects.
    pub hand_before: Vec<String>,
    /// Draw cards consumed this turn, in play order.
    pub cards_used: Vec<String>,
    /// Hand once resolution settled.
    pub hand_after: Vec<String>,
    /// True when resolution hit the iteration ceiling instead of
    /// reaching a steady state.
    pub forced_termination: bool,
}

/// Full trace of one simulated game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// False when the mulligan budget ran out; invalid games carry no
    /// turns and are excluded from probability denominators.
    pub valid: bool,
    pub turns: Vec<TurnRecord>,
    pub final_hand: Vec<String>,
    /// Every draw card consumed across the game.
    pub cards_used: Vec<String>,
}

impl GameRecord {
    /// Record for a game that never produced a legal opening hand.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            valid: false,
            turns: Vec::new(),
            final_hand: Vec::new(),
            cards_used: Vec::new(),
        }
    }

    /// The opening hand (turn 0, before effects). Empty for invalid
    /// games.
    #[must_use]
    pub fn opening_hand(&self) -> &[String] {
        self.turns
            .first()
            .map(|t| t.hand_before.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the final hand holds at least one copy of `name`.
    #[must_use]
    pub fn final_hand_contains(&self, name: &str) -> bool {
        self.final_hand.iter().any(|c| c == name)
    }

    /// Whether any turn's resolution was cut short by the iteration
    /// ceiling.
    #[must_use]
    pub fn forced_termination(&self) -> bool {
        self.turns.iter().any(|t| t.forced_termination)
    }
}
