//! Configuration errors.
//!
//! Everything here is detected eagerly at setup or request-validation
//! time, before any simulation runs. Per-game irregularities (mulligan
//! exhaustion, an effect finding no target, the resolution loop hitting
//! its ceiling) are *not* errors - they are ordinary outcomes carried
//! on records and effect results.

use thiserror::Error;

use crate::cards::{DECK_SIZE, MAX_COPIES};

/// A setup or request rejected before any simulation ran.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("deck must contain exactly {DECK_SIZE} cards, got {total}")]
    DeckSize { total: usize },

    #[error("at most {MAX_COPIES} copies of one card allowed, got {count} of \"{name}\"")]
    TooManyCopies { name: String, count: u8 },

    #[error("\"{name}\" in the draw order is not a known draw-effect card")]
    UnknownDrawCard { name: String },

    #[error("\"{name}\" in the draw order is not in the deck")]
    DrawCardNotInDeck { name: String },

    #[error("{field} must name at least one card")]
    EmptyCardList { field: &'static str },

    #[error("at most 3 target cards supported, got {count}")]
    TooManyTargets { count: usize },

    #[error("target turn must be between 1 and 3, got {turn}")]
    TurnOutOfRange { turn: u32 },

    #[error("simulation count must be positive")]
    NoTrials,

    #[error("no deck configured; call setup first")]
    NotConfigured,

    #[error("multi-card requests have no closed-form solution; use simulation")]
    UnsupportedClosedForm,
}
