//! Game simulation: the per-game engine and the trace records it
//! produces.

pub mod engine;
pub mod record;

pub use engine::{SimConfig, SimulationEngine};
pub use record::{GameRecord, TurnRecord};
