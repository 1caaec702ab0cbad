//! Draw-card effects: definitions, lookup, resolution, and the
//! decision policies for the effects that are not always worth playing.

pub mod effect;
pub mod policy;
pub mod registry;
pub mod resolver;

pub use effect::{DrawEffect, EffectDetail, EffectOutcome};
pub use policy::{ExchangeDecision, GreedyPolicy, PlayPolicy, RefreshDecision};
pub use registry::{CardEffectDef, EffectRegistry};
pub use resolver::EffectResolver;
