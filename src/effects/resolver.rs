//! Effect resolution.
//!
//! The resolver interprets [`DrawEffect`] values against a
//! [`GameState`]. It validates before it mutates: a failed resolution
//! returns a failure outcome and leaves the state exactly as it was.
//! Consuming the played card (hand to discard) is the engine's job,
//! not the resolver's, so a card whose effect fizzles can still be
//! counted as used.

use crate::cards::CardType;
use crate::core::GameState;

use super::effect::{DrawEffect, EffectDetail, EffectOutcome};
use super::registry::EffectRegistry;

/// Interprets draw effects against game state.
pub struct EffectResolver<'a> {
    registry: &'a EffectRegistry,
}

impl<'a> EffectResolver<'a> {
    #[must_use]
    pub fn new(registry: &'a EffectRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `name`'s draw effect against `state`.
    ///
    /// An unregistered name fails without touching the state. Exchange
    /// effects resolved through this entry point pick their own
    /// sacrifice; the engine's exchange phase calls
    /// [`resolve_exchange`](Self::resolve_exchange) directly to pass a
    /// chosen one.
    pub fn resolve(&self, name: &str, state: &mut GameState) -> EffectOutcome {
        let Some(def) = self.registry.get(name) else {
            return EffectOutcome::failure(name, "no draw effect registered for this card");
        };
        match &def.effect {
            DrawEffect::TutorByType { target } => Self::resolve_tutor_by_type(name, *target, state),
            DrawEffect::TutorByName { targets } => {
                Self::resolve_tutor_by_name(name, targets, state)
            }
            DrawEffect::DrawFixed { count } => Self::resolve_draw_fixed(name, *count, state),
            DrawEffect::ExchangeWithDeck => self.resolve_exchange(name, state, None),
            DrawEffect::HandRefresh => Self::resolve_refresh(name, state),
        }
    }

    fn resolve_tutor_by_type(name: &str, target: CardType, state: &mut GameState) -> EffectOutcome {
        match state.take_random_from_deck_where(|c| c.card_type == target) {
            Some(card) => {
                let fetched = card.name.clone();
                state.add_to_hand(card);
                EffectOutcome::success(
                    name,
                    format!("fetched {} from the deck", fetched),
                    EffectDetail::Fetched { name: fetched },
                )
            }
            None => EffectOutcome::failure(name, format!("no {} in the deck", target)),
        }
    }

    fn resolve_tutor_by_name(name: &str, targets: &[String], state: &mut GameState) -> EffectOutcome {
        match state.take_random_from_deck_where(|c| targets.iter().any(|t| c.is_named(t))) {
            Some(card) => {
                let fetched = card.name.clone();
                state.add_to_hand(card);
                EffectOutcome::success(
                    name,
                    format!("fetched {} from the deck", fetched),
                    EffectDetail::Fetched { name: fetched },
                )
            }
            None => EffectOutcome::failure(
                name,
                format!("no {} in the deck", targets.join(" or ")),
            ),
        }
    }

    fn resolve_draw_fixed(name: &str, count: u32, state: &mut GameState) -> EffectOutcome {
        // Drawing from a short deck draws what remains; that still counts
        // as the effect resolving.
        let drawn = state.draw(count as usize) as u32;
        EffectOutcome::success(
            name,
            format!("drew {} cards", drawn),
            EffectDetail::Drawn { count: drawn },
        )
    }

    /// Resolve an exchange, optionally with a caller-chosen sacrifice.
    ///
    /// With `sacrifice: None`, the first Pokemon in hand is traded away.
    /// The sacrificed card goes into the deck before the replacement is
    /// picked, so it can be drawn straight back.
    pub fn resolve_exchange(
        &self,
        name: &str,
        state: &mut GameState,
        sacrifice: Option<&str>,
    ) -> EffectOutcome {
        let sacrifice_name = match sacrifice {
            Some(chosen) => match state.card_type_in_hand(chosen) {
                Some(t) if t.is_pokemon() => chosen.to_string(),
                _ => {
                    return EffectOutcome::failure(
                        name,
                        format!("{} is not a Pokemon in hand", chosen),
                    )
                }
            },
            None => match state.hand().iter().find(|c| c.card_type.is_pokemon()) {
                Some(card) => card.name.clone(),
                None => return EffectOutcome::failure(name, "no Pokemon in hand to exchange"),
            },
        };
        if !state.deck().iter().any(|c| c.card_type.is_pokemon()) {
            return EffectOutcome::failure(name, "no Pokemon in the deck to exchange for");
        }

        // Checks passed; nothing below can fail.
        let Some(outgoing) = state.take_from_hand(&sacrifice_name) else {
            return EffectOutcome::failure(name, "no Pokemon in hand to exchange");
        };
        let sacrificed = outgoing.name.clone();
        state.return_to_deck(outgoing);
        let Some(incoming) = state.take_random_from_deck_where(|c| c.card_type.is_pokemon()) else {
            return EffectOutcome::failure(name, "no Pokemon in the deck to exchange for");
        };
        let fetched = incoming.name.clone();
        state.add_to_hand(incoming);
        EffectOutcome::success(
            name,
            format!("exchanged {} for {}", sacrificed, fetched),
            EffectDetail::Exchanged { sacrificed, fetched },
        )
    }

    fn resolve_refresh(name: &str, state: &mut GameState) -> EffectOutcome {
        // The played copy sits out of the shuffle and comes back to hand
        // afterwards, so the engine's consume step still finds it.
        let Some(played) = state.take_from_hand(name) else {
            return EffectOutcome::failure(name, "card not in hand");
        };
        let returned = state.return_hand_to_deck();
        let drawn = state.draw(returned);
        state.add_to_hand(played);
        EffectOutcome::success(
            name,
            format!("returned {} cards and drew {}", returned, drawn),
            EffectDetail::Refreshed { returned, drawn },
        )
    }
}
