//! Top-level facade: configure a deck once, answer many questions.
//!
//! `PocketSimulator` owns the registry and simulation config,
//! validates deck and draw order eagerly at `setup`, and hands
//! validated requests to the calculator. All the invalid-input
//! surface lives here; the layers below assume well-formed input.

use log::debug;

use crate::cards::{DeckSpec, MAX_COPIES};
use crate::core::{ConfigError, GameRng};
use crate::effects::EffectRegistry;
use crate::prob::{CalculationRequest, ProbabilityCalculator, ProbabilityReport};
use crate::sim::{GameRecord, SimConfig, SimulationEngine};

/// Deck-probability simulator for the Pocket format.
///
/// ## Example
///
/// ```
/// use pocket_sim::cards::{CardType, DeckSpec};
/// use pocket_sim::prob::CalculationRequest;
/// use pocket_sim::simulator::PocketSimulator;
///
/// let spec = DeckSpec::new()
///     .with_card("Type:Null", CardType::BasicPokemon, 2)
///     .with_card("Silvally", CardType::Stage1Pokemon, 2)
///     .with_card("Poke Ball", CardType::Item, 2)
///     .with_card("Professor's Research", CardType::Supporter, 2)
///     .with_card("Potion", CardType::Item, 2)
///     .with_card("X Speed", CardType::Item, 2)
///     .with_card("Rocky Helmet", CardType::Tool, 2)
///     .with_card("Lightning Energy", CardType::BasicEnergy, 2)
///     .with_card("Giovanni", CardType::Supporter, 2)
///     .with_card("Erika", CardType::Supporter, 2);
///
/// let mut sim = PocketSimulator::new();
/// sim.setup(spec, vec!["Poke Ball".into(), "Professor's Research".into()])?;
///
/// let report = sim.run(
///     &CalculationRequest::preferred_opening(["Type:Null"]),
///     2000,
///     42,
/// )?;
/// assert!(report.probability_percent > 0.0);
/// # Ok::<(), pocket_sim::core::ConfigError>(())
/// ```
pub struct PocketSimulator {
    registry: EffectRegistry,
    config: SimConfig,
    engine: Option<SimulationEngine>,
}

impl Default for PocketSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl PocketSimulator {
    /// Simulator with the builtin draw cards and default config.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: EffectRegistry::builtin(),
            config: SimConfig::default(),
            engine: None,
        }
    }

    /// Override the simulation config. Applies to decks set up after
    /// the call.
    #[must_use]
    pub fn with_config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Swap the effect registry. Applies to decks set up after the
    /// call.
    #[must_use]
    pub fn with_registry(mut self, registry: EffectRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Validate and install a deck with its draw-card play order.
    ///
    /// Checks the deck-size rule, the copy limit, and that every
    /// draw-order name is a registered draw card actually present in
    /// the deck. A later `setup` replaces the earlier deck entirely.
    pub fn setup(&mut self, spec: DeckSpec, draw_order: Vec<String>) -> Result<(), ConfigError> {
        spec.build_deck()?;
        for entry in spec.entries() {
            if entry.count > MAX_COPIES {
                return Err(ConfigError::TooManyCopies {
                    name: entry.name.clone(),
                    count: entry.count,
                });
            }
        }
        for name in &draw_order {
            if !self.registry.is_draw_card(name) {
                return Err(ConfigError::UnknownDrawCard { name: name.clone() });
            }
            if spec.count_of(name) == 0 {
                return Err(ConfigError::DrawCardNotInDeck { name: name.clone() });
            }
        }

        debug!(
            "deck configured: {} entries, draw order {:?}",
            spec.entries().len(),
            draw_order
        );
        self.engine = Some(
            SimulationEngine::new(spec, draw_order)
                .with_registry(self.registry.clone())
                .with_config(self.config),
        );
        Ok(())
    }

    /// Whether a deck has been set up.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.engine.is_some()
    }

    fn engine(&self) -> Result<&SimulationEngine, ConfigError> {
        self.engine.as_ref().ok_or(ConfigError::NotConfigured)
    }

    /// Estimate a request by Monte Carlo over `trials` seeded games.
    pub fn run(
        &self,
        request: &CalculationRequest,
        trials: u64,
        seed: u64,
    ) -> Result<ProbabilityReport, ConfigError> {
        let engine = self.engine()?;
        request.validate()?;
        if trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(ProbabilityCalculator::new(engine).estimate(request, trials, seed))
    }

    /// [`run`](Self::run) across all cores. Same result for the same
    /// seed.
    #[cfg(feature = "parallel")]
    pub fn run_par(
        &self,
        request: &CalculationRequest,
        trials: u64,
        seed: u64,
    ) -> Result<ProbabilityReport, ConfigError> {
        let engine = self.engine()?;
        request.validate()?;
        if trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(ProbabilityCalculator::new(engine).estimate_par(request, trials, seed))
    }

    /// Exact answer for opening-hand requests.
    pub fn closed_form(
        &self,
        request: &CalculationRequest,
    ) -> Result<ProbabilityReport, ConfigError> {
        let engine = self.engine()?;
        ProbabilityCalculator::new(engine).closed_form(request)
    }

    /// Play one seeded game and return its full trace, for inspection.
    pub fn simulate_game(
        &self,
        max_turn: u32,
        targets: Option<&[String]>,
        seed: u64,
    ) -> Result<GameRecord, ConfigError> {
        let engine = self.engine()?;
        Ok(engine.simulate_single_game(max_turn, targets, GameRng::new(seed)))
    }

    /// Names in `spec` the current registry would play as draw cards,
    /// in deck-list order.
    #[must_use]
    pub fn draw_cards_in_deck(&self, spec: &DeckSpec) -> Vec<String> {
        spec.entries()
            .iter()
            .filter(|e| self.registry.is_draw_card(&e.name))
            .map(|e| e.name.clone())
            .collect()
    }

    /// Rules text of a registered draw card.
    #[must_use]
    pub fn effect_description(&self, name: &str) -> Option<&str> {
        self.registry.description_of(name)
    }

    /// The registry this simulator configures engines with.
    #[must_use]
    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    /// The configured deck, once `setup` has run.
    #[must_use]
    pub fn spec(&self) -> Option<&DeckSpec> {
        self.engine.as_ref().map(SimulationEngine::spec)
    }
}
