//! Probability estimation.
//!
//! Monte Carlo is the general path: run seeded games through the
//! engine, test each record against the request, divide. Opening-hand
//! requests additionally have an exact closed form under the mulligan
//! condition, which the tests use to cross-check the simulator.

use crate::core::{ConfigError, GameRng, OPENING_HAND_SIZE};
use crate::sim::{GameRecord, SimulationEngine};

use super::hypergeom::at_least_one;
use super::report::{ClosedFormTerms, ProbabilityReport};
use super::request::CalculationRequest;

/// Answers [`CalculationRequest`]s against a configured engine.
pub struct ProbabilityCalculator<'a> {
    engine: &'a SimulationEngine,
}

impl<'a> ProbabilityCalculator<'a> {
    #[must_use]
    pub fn new(engine: &'a SimulationEngine) -> Self {
        Self { engine }
    }

    /// Monte Carlo estimate over `trials` games.
    ///
    /// Game `i` runs on its own stream derived from `(seed, i)`, so an
    /// estimate is reproducible from the seed alone. Games that
    /// exhaust their mulligans are excluded from the denominator.
    /// Request bounds are checked by the facade before this runs.
    #[must_use]
    pub fn estimate(
        &self,
        request: &CalculationRequest,
        trials: u64,
        seed: u64,
    ) -> ProbabilityReport {
        let max_turn = request.max_turn();
        let targets = request.targets();

        let mut success_count = 0u64;
        let mut total_valid = 0u64;
        for game_index in 0..trials {
            let rng = GameRng::for_game(seed, game_index);
            let record = self.engine.simulate_single_game(max_turn, targets, rng);
            if !record.valid {
                continue;
            }
            total_valid += 1;
            if self.satisfies(request, &record) {
                success_count += 1;
            }
        }
        ProbabilityReport::from_simulation(request.clone(), success_count, total_valid, trials)
    }

    /// Whether one simulated game answers the request's question with
    /// yes.
    fn satisfies(&self, request: &CalculationRequest, record: &GameRecord) -> bool {
        let spec = self.engine.spec();
        match request {
            CalculationRequest::PreferredOpening { preferred_basics } => {
                // At least one preferred Basic in the opening hand.
                record.opening_hand().iter().any(|name| {
                    spec.card_type_of(name).is_some_and(|t| t.is_basic())
                        && preferred_basics.iter().any(|p| p == name)
                })
            }
            CalculationRequest::NonPreferredOpening {
                non_preferred_basics,
            } => {
                // Every Basic in the opening hand is from the list. The
                // mulligan already guarantees there is at least one.
                record.opening_hand().iter().all(|name| {
                    match spec.card_type_of(name) {
                        Some(t) if t.is_basic() => {
                            non_preferred_basics.iter().any(|p| p == name)
                        }
                        _ => true,
                    }
                })
            }
            CalculationRequest::MultiCard { target_cards, .. } => {
                // Every target held at once, at the end of the final
                // turn. A target consumed along the way does not count.
                target_cards.iter().all(|t| record.final_hand_contains(t))
            }
        }
    }

    /// Exact answer for opening-hand requests.
    ///
    /// Both shapes are conditional on the mulligan succeeding:
    /// P(hand matches | hand holds a Basic). Multi-card requests depend
    /// on effect play and have no closed form.
    pub fn closed_form(
        &self,
        request: &CalculationRequest,
    ) -> Result<ProbabilityReport, ConfigError> {
        request.validate()?;
        let spec = self.engine.spec();
        let population = spec.total_count() as u64;
        let draws = OPENING_HAND_SIZE as u64;
        let total_basics = spec.count_matching(|e| e.card_type.is_basic()) as u64;
        let p_any_basic = at_least_one(population, total_basics, draws);

        let (target_count, raw_probability, note) = match request {
            CalculationRequest::PreferredOpening { preferred_basics } => {
                let preferred = spec.count_matching(|e| {
                    e.card_type.is_basic() && preferred_basics.iter().any(|n| n == &e.name)
                }) as u64;
                if total_basics == 0 {
                    (
                        preferred,
                        0.0,
                        Some("deck has no Basic Pokemon; every game mulligans out".to_string()),
                    )
                } else if preferred == 0 {
                    (
                        0,
                        0.0,
                        Some("none of the preferred Basics are in the deck".to_string()),
                    )
                } else {
                    (
                        preferred,
                        at_least_one(population, preferred, draws) / p_any_basic,
                        None,
                    )
                }
            }
            CalculationRequest::NonPreferredOpening {
                non_preferred_basics,
            } => {
                let listed = spec.count_matching(|e| {
                    e.card_type.is_basic() && non_preferred_basics.iter().any(|n| n == &e.name)
                }) as u64;
                if total_basics == 0 {
                    (
                        listed,
                        0.0,
                        Some("deck has no Basic Pokemon; every game mulligans out".to_string()),
                    )
                } else if listed == 0 {
                    (
                        0,
                        0.0,
                        Some("none of the non-preferred Basics are in the deck".to_string()),
                    )
                } else {
                    let complement = total_basics - listed;
                    if complement == 0 {
                        (
                            listed,
                            1.0,
                            Some("every Basic in the deck is on the non-preferred list"
                                .to_string()),
                        )
                    } else {
                        (
                            listed,
                            1.0 - at_least_one(population, complement, draws) / p_any_basic,
                            None,
                        )
                    }
                }
            }
            CalculationRequest::MultiCard { .. } => {
                return Err(ConfigError::UnsupportedClosedForm)
            }
        };

        Ok(ProbabilityReport::from_closed_form(
            request.clone(),
            ClosedFormTerms {
                total_basics,
                target_count,
                p_any_basic,
                raw_probability,
            },
            note,
        ))
    }
}

#[cfg(feature = "parallel")]
mod par {
    //! Rayon-parallel batch estimation.

    use rayon::prelude::*;

    use super::*;

    impl<'a> ProbabilityCalculator<'a> {
        /// Parallel [`estimate`](ProbabilityCalculator::estimate).
        ///
        /// Identical results to the sequential path for a given seed,
        /// regardless of thread count, because each game derives its
        /// stream from `(seed, index)` rather than from thread state.
        #[must_use]
        pub fn estimate_par(
            &self,
            request: &CalculationRequest,
            trials: u64,
            seed: u64,
        ) -> ProbabilityReport {
            let max_turn = request.max_turn();
            let targets = request.targets();

            let (success_count, total_valid) = (0..trials)
                .into_par_iter()
                .map(|game_index| {
                    let rng = GameRng::for_game(seed, game_index);
                    let record = self.engine.simulate_single_game(max_turn, targets, rng);
                    if !record.valid {
                        (0u64, 0u64)
                    } else if self.satisfies(request, &record) {
                        (1, 1)
                    } else {
                        (0, 1)
                    }
                })
                .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

            ProbabilityReport::from_simulation(request.clone(), success_count, total_valid, trials)
        }
    }
}
