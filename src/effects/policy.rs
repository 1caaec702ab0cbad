//! Play policies for the two effects that need a decision.
//!
//! Most draw cards are always worth playing; the exchange and refresh
//! effects are not. Policies are trait-based so callers can swap in
//! their own heuristics:
//! - `decide_exchange`: whether to trade a held Pokemon for a deck one,
//!   and which to give up
//! - `decide_refresh`: whether shuffling the hand away improves the
//!   odds of holding the target cards

use crate::core::GameState;

/// Verdict on playing an exchange card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeDecision {
    pub recommended: bool,
    /// Hand Pokemon to trade away, when recommended.
    pub sacrifice: Option<String>,
    pub reason: &'static str,
}

impl ExchangeDecision {
    #[must_use]
    pub fn exchange(sacrifice: impl Into<String>, reason: &'static str) -> Self {
        Self {
            recommended: true,
            sacrifice: Some(sacrifice.into()),
            reason,
        }
    }

    #[must_use]
    pub fn decline(reason: &'static str) -> Self {
        Self {
            recommended: false,
            sacrifice: None,
            reason,
        }
    }
}

/// Verdict on playing a hand-refresh card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshDecision {
    pub recommended: bool,
    pub reason: &'static str,
}

impl RefreshDecision {
    #[must_use]
    pub fn refresh(reason: &'static str) -> Self {
        Self {
            recommended: true,
            reason,
        }
    }

    #[must_use]
    pub fn decline(reason: &'static str) -> Self {
        Self {
            recommended: false,
            reason,
        }
    }
}

/// Decides whether to play effects that can make a hand worse.
///
/// The engine opens the exchange window only on the final simulated
/// turn and consults `decide_refresh` only when target cards are being
/// tracked; policies can assume both.
pub trait PlayPolicy: Send + Sync {
    /// Whether to trade a held Pokemon for a random deck Pokemon, given
    /// the target cards the run is tracking.
    fn decide_exchange(&self, state: &GameState, targets: &[String]) -> ExchangeDecision;

    /// Whether to shuffle the hand away in the hope of drawing into the
    /// tracked targets.
    fn decide_refresh(&self, state: &GameState, targets: &[String]) -> RefreshDecision;
}

/// Default heuristics: exchange when a missing target Pokemon is in the
/// deck and a spare Pokemon is in hand; refresh when the hand holds few
/// of the targets.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl PlayPolicy for GreedyPolicy {
    fn decide_exchange(&self, state: &GameState, targets: &[String]) -> ExchangeDecision {
        let missing: Vec<&String> = targets
            .iter()
            .filter(|t| !state.hand_contains(t))
            .collect();
        if missing.is_empty() {
            return ExchangeDecision::decline("every target is already in hand");
        }
        let deck_has_needed = missing.iter().any(|t| {
            state
                .deck()
                .iter()
                .any(|c| c.is_named(t) && c.card_type.is_pokemon())
        });
        if !deck_has_needed {
            return ExchangeDecision::decline("no missing target Pokemon in the deck");
        }

        // Prefer giving up a Pokemon the run is not tracking.
        if let Some(card) = state
            .hand()
            .iter()
            .find(|c| c.card_type.is_pokemon() && !targets.iter().any(|t| c.is_named(t)))
        {
            return ExchangeDecision::exchange(
                card.name.clone(),
                "trading a spare Pokemon for a missing target",
            );
        }
        // Otherwise a duplicate copy of a held target is expendable.
        if let Some(card) = state
            .hand()
            .iter()
            .find(|c| c.card_type.is_pokemon() && state.count_in_hand(&c.name) >= 2)
        {
            return ExchangeDecision::exchange(
                card.name.clone(),
                "trading a duplicate copy of a held target",
            );
        }
        ExchangeDecision::decline("no Pokemon in hand worth trading")
    }

    fn decide_refresh(&self, state: &GameState, targets: &[String]) -> RefreshDecision {
        if targets.is_empty() {
            return RefreshDecision::decline("no target cards to chase");
        }
        let distinct_held = targets.iter().filter(|t| state.hand_contains(t)).count();
        if distinct_held == 0 {
            return RefreshDecision::refresh("hand holds none of the targets");
        }
        if distinct_held * 2 < targets.len() {
            return RefreshDecision::refresh("hand holds under half of the targets");
        }
        let others = state.hand().len().saturating_sub(1);
        if others <= 3 && distinct_held < targets.len() {
            return RefreshDecision::refresh("small hand with targets still missing");
        }
        RefreshDecision::decline("hand already holds enough targets")
    }
}
