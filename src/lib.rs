//! # pocket-sim
//!
//! A Monte Carlo draw-probability engine for Pocket-format trading
//! card games: 20-card decks, 5-card opening hands, and the chained
//! draw effects that decide whether a combo comes together on time.
//!
//! ## Design Principles
//!
//! 1. **Spec In, Cards Out**: A deck is described once as an immutable
//!    `DeckSpec`; every simulated game expands its own fresh card
//!    multiset from it. Games never share state.
//!
//! 2. **Deck as a Bag**: The draw pile is unordered. Drawing takes a
//!    uniformly random card, so shuffling is never simulated and
//!    insertions are plain pushes.
//!
//! 3. **Effects as Data**: Draw cards map to a small vocabulary of
//!    effect shapes in a registry. Adding a card with a known shape is
//!    one registration, not new engine code.
//!
//! 4. **Reproducible Runs**: Every game derives its RNG stream from
//!    `(seed, game index)`, so batch results are identical across runs
//!    and across thread counts.
//!
//! ## Architecture
//!
//! Requests flow down, records flow back up: the `PocketSimulator`
//! facade validates a deck and a question, the engine plays seeded
//! games turn by turn, the resolver interprets draw effects, and the
//! calculator turns the resulting records into a probability - or
//! short-circuits to the exact hypergeometric answer for opening-hand
//! questions.
//!
//! ## Modules
//!
//! - `core`: seeded RNG, per-game state, error type
//! - `cards`: card types, deck specification, format constants
//! - `effects`: draw-effect vocabulary, registry, resolver, policies
//! - `sim`: the game engine and its trace records
//! - `prob`: requests, reports, Monte Carlo and closed-form math
//! - `field`: in-play model (evolution stacks, bench positions)
//! - `simulator`: the configure-once, ask-many facade

pub mod cards;
pub mod core;
pub mod effects;
pub mod field;
pub mod prob;
pub mod sim;
pub mod simulator;

// Re-export commonly used types
pub use crate::cards::{Card, CardType, DeckEntry, DeckSpec, DECK_SIZE, MAX_COPIES};

pub use crate::core::{ConfigError, GameRng, GameState, OPENING_HAND_SIZE};

pub use crate::effects::{
    CardEffectDef, DrawEffect, EffectDetail, EffectOutcome, EffectRegistry, EffectResolver,
    ExchangeDecision, GreedyPolicy, PlayPolicy, RefreshDecision,
};

pub use crate::sim::{GameRecord, SimConfig, SimulationEngine, TurnRecord};

pub use crate::prob::{
    CalculationRequest, ClosedFormTerms, Method, ProbabilityCalculator, ProbabilityReport,
    MAX_TARGET_CARDS, MAX_TARGET_TURN,
};

pub use crate::field::{Board, PokemonSlot, SlotIndex, BENCH_SIZE};

pub use crate::simulator::PocketSimulator;
