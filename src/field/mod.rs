//! In-play zones: evolution stacks, tools, active and bench positions.
//!
//! The draw engine never needs a board - hands and decks answer every
//! probability question - but deck analysis that reasons about what an
//! opening actually deploys does, so the field model lives alongside
//! the rest and shares the same card types.

pub mod board;
pub mod slot;

pub use board::{Board, SlotIndex, BENCH_SIZE};
pub use slot::PokemonSlot;
