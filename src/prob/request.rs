//! Probability questions.
//!
//! A [`CalculationRequest`] is a self-contained, serializable question
//! about a configured deck. The three shapes mirror what deck builders
//! actually ask: "do I open with the Basic I want", "do I open with
//! only a fallback Basic", and "do I assemble this set of cards by
//! turn N".

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ConfigError;

/// Most target cards a multi-card request may track.
pub const MAX_TARGET_CARDS: usize = 3;

/// Latest turn a multi-card request may ask about.
pub const MAX_TARGET_TURN: u32 = 3;

/// A draw-probability question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalculationRequest {
    /// Chance the opening hand holds at least one of these Basics.
    PreferredOpening { preferred_basics: Vec<String> },
    /// Chance every Basic in the opening hand comes from this list.
    NonPreferredOpening { non_preferred_basics: Vec<String> },
    /// Chance the hand holds every target card at the end of `turn`.
    MultiCard {
        target_cards: SmallVec<[String; 3]>,
        turn: u32,
    },
}

impl CalculationRequest {
    #[must_use]
    pub fn preferred_opening<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::PreferredOpening {
            preferred_basics: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn non_preferred_opening<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NonPreferredOpening {
            non_preferred_basics: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn multi_card<I, S>(names: I, turn: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiCard {
            target_cards: names.into_iter().map(Into::into).collect(),
            turn,
        }
    }

    /// Wire name of the request shape.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PreferredOpening { .. } => "preferred_opening",
            Self::NonPreferredOpening { .. } => "non_preferred_opening",
            Self::MultiCard { .. } => "multi_card",
        }
    }

    /// Check the request's own bounds. Deck-dependent checks happen at
    /// setup; this is purely shape validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::PreferredOpening { preferred_basics } => {
                if preferred_basics.is_empty() {
                    return Err(ConfigError::EmptyCardList {
                        field: "preferred_basics",
                    });
                }
            }
            Self::NonPreferredOpening {
                non_preferred_basics,
            } => {
                if non_preferred_basics.is_empty() {
                    return Err(ConfigError::EmptyCardList {
                        field: "non_preferred_basics",
                    });
                }
            }
            Self::MultiCard { target_cards, turn } => {
                if target_cards.is_empty() {
                    return Err(ConfigError::EmptyCardList {
                        field: "target_cards",
                    });
                }
                if target_cards.len() > MAX_TARGET_CARDS {
                    return Err(ConfigError::TooManyTargets {
                        count: target_cards.len(),
                    });
                }
                if *turn == 0 || *turn > MAX_TARGET_TURN {
                    return Err(ConfigError::TurnOutOfRange { turn: *turn });
                }
            }
        }
        Ok(())
    }

    /// Last turn a simulation of this request must play. Opening-hand
    /// questions stop at turn 0.
    #[must_use]
    pub fn max_turn(&self) -> u32 {
        match self {
            Self::PreferredOpening { .. } | Self::NonPreferredOpening { .. } => 0,
            Self::MultiCard { turn, .. } => *turn,
        }
    }

    /// Target cards for effect decisions, when the request tracks any.
    #[must_use]
    pub fn targets(&self) -> Option<&[String]> {
        match self {
            Self::MultiCard { target_cards, .. } => Some(target_cards),
            _ => None,
        }
    }
}
