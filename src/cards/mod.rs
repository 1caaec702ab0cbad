//! Card system: identity, type categories, and deck specifications.
//!
//! ## Key Types
//!
//! - `Card`: Immutable name + type value
//! - `CardType`: The Pocket format's type categories
//! - `DeckSpec`: Declarative name -> {type, count} deck composition
//! - `DeckEntry`: One line of a spec
//!
//! A spec is the single canonical description of a deck; every simulated
//! game expands it into its own fresh multiset of `Card` values.

pub mod card;
pub mod deck;

pub use card::{Card, CardType};
pub use deck::{DeckEntry, DeckSpec, DECK_SIZE, MAX_COPIES};
