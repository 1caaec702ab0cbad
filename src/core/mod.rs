//! Core building blocks shared by every layer: the seeded RNG, the
//! per-game state, and the crate's error type.

pub mod error;
pub mod rng;
pub mod state;

pub use error::ConfigError;
pub use rng::GameRng;
pub use state::{GameState, OPENING_HAND_SIZE};
