//! Probability answers.

use serde::{Deserialize, Serialize};

use super::request::CalculationRequest;

/// How a probability was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Simulation,
    ClosedForm,
}

/// Answer to a [`CalculationRequest`].
///
/// Percentages are rounded to two decimals, the precision the engine
/// reports everywhere. Simulation counters are zero on closed-form
/// reports; `terms` is present only on closed-form ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityReport {
    pub request: CalculationRequest,
    pub method: Method,
    pub probability_percent: f64,
    pub success_count: u64,
    pub total_valid_games: u64,
    pub simulation_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<ClosedFormTerms>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Intermediate quantities behind a closed-form answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClosedFormTerms {
    /// Basic Pokemon cards in the deck.
    pub total_basics: u64,
    /// Deck cards counted for the request's list.
    pub target_count: u64,
    /// P(opening draw holds at least one Basic), the mulligan condition.
    pub p_any_basic: f64,
    /// Unrounded conditional probability.
    pub raw_probability: f64,
}

fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ProbabilityReport {
    /// Assemble a simulation report, rounding the estimate.
    ///
    /// With zero valid games the probability is reported as 0.0 and the
    /// note says why.
    #[must_use]
    pub fn from_simulation(
        request: CalculationRequest,
        success_count: u64,
        total_valid_games: u64,
        simulation_count: u64,
    ) -> Self {
        let (probability_percent, note) = if total_valid_games == 0 {
            (
                0.0,
                Some("no valid games; every attempt exhausted its mulligans".to_string()),
            )
        } else {
            (
                round_percent(success_count as f64 / total_valid_games as f64 * 100.0),
                None,
            )
        };
        Self {
            request,
            method: Method::Simulation,
            probability_percent,
            success_count,
            total_valid_games,
            simulation_count,
            terms: None,
            note,
        }
    }

    /// Assemble a closed-form report from its terms.
    #[must_use]
    pub fn from_closed_form(
        request: CalculationRequest,
        terms: ClosedFormTerms,
        note: Option<String>,
    ) -> Self {
        Self {
            request,
            method: Method::ClosedForm,
            probability_percent: round_percent(terms.raw_probability * 100.0),
            success_count: 0,
            total_valid_games: 0,
            simulation_count: 0,
            terms: Some(terms),
            note,
        }
    }
}
