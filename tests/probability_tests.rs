//! Probability correctness tests.
//!
//! The closed forms are exact, so they anchor everything else:
//! - known hand-computed values for a reference deck
//! - Monte Carlo estimates agreeing with the closed form within
//!   sampling tolerance at 10k trials
//! - boundary cases that must come out exactly 0% or 100%
//! - multi-card semantics: a target consumed by its own effect does
//!   not count as obtained

use pocket_sim::cards::{CardType, DeckSpec};
use pocket_sim::prob::{CalculationRequest, Method};
use pocket_sim::simulator::PocketSimulator;

const TRIALS: u64 = 10_000;
/// Sampling tolerance for 10k-trial estimates, in percentage points.
const TOLERANCE: f64 = 3.0;

/// Alpha x2 and Beta x2 as the only Basics, 16 non-Basic filler.
fn two_basics_spec() -> DeckSpec {
    let mut spec = DeckSpec::new()
        .with_card("Alpha", CardType::BasicPokemon, 2)
        .with_card("Beta", CardType::BasicPokemon, 2);
    for i in 0..8 {
        spec.add_card(format!("Filler {}", i), CardType::Item, 2);
    }
    spec
}

fn configured(spec: DeckSpec, draw_order: Vec<String>) -> PocketSimulator {
    let mut sim = PocketSimulator::new();
    sim.setup(spec, draw_order).unwrap();
    sim
}

/// Test the hand-computed preferred-opening value:
/// (1 - C(18,5)/C(20,5)) / (1 - C(16,5)/C(20,5)) = 62.28%.
#[test]
fn test_preferred_closed_form_matches_hand_computation() {
    let sim = configured(two_basics_spec(), Vec::new());
    let report = sim
        .closed_form(&CalculationRequest::preferred_opening(["Alpha"]))
        .unwrap();

    assert_eq!(report.method, Method::ClosedForm);
    assert_eq!(report.probability_percent, 62.28);

    let terms = report.terms.expect("closed form carries its terms");
    assert_eq!(terms.total_basics, 4);
    assert_eq!(terms.target_count, 2);
    assert!((terms.raw_probability - 6936.0 / 11136.0).abs() < 1e-12);
}

/// Test that the non-preferred question is the exact complement when
/// the two lists partition the Basics.
#[test]
fn test_non_preferred_closed_form_is_complement() {
    let sim = configured(two_basics_spec(), Vec::new());
    let report = sim
        .closed_form(&CalculationRequest::non_preferred_opening(["Beta"]))
        .unwrap();
    assert_eq!(report.probability_percent, 37.72);
}

/// Test simulation against the closed form for both opening shapes.
#[test]
fn test_simulation_agrees_with_closed_form() {
    let sim = configured(two_basics_spec(), Vec::new());

    let preferred = CalculationRequest::preferred_opening(["Alpha"]);
    let exact = sim.closed_form(&preferred).unwrap().probability_percent;
    let estimated = sim.run(&preferred, TRIALS, 2024).unwrap().probability_percent;
    assert!(
        (estimated - exact).abs() < TOLERANCE,
        "preferred: simulated {} vs exact {}",
        estimated,
        exact
    );

    let non_preferred = CalculationRequest::non_preferred_opening(["Beta"]);
    let exact = sim.closed_form(&non_preferred).unwrap().probability_percent;
    let estimated = sim
        .run(&non_preferred, TRIALS, 2024)
        .unwrap()
        .probability_percent;
    assert!(
        (estimated - exact).abs() < TOLERANCE,
        "non-preferred: simulated {} vs exact {}",
        estimated,
        exact
    );
}

/// Test boundary cases that must be exact on both paths.
#[test]
fn test_boundary_cases_are_exact() {
    let sim = configured(two_basics_spec(), Vec::new());

    // A preferred Basic that is not in the deck can never be opened.
    let absent = CalculationRequest::preferred_opening(["Gamma"]);
    assert_eq!(sim.closed_form(&absent).unwrap().probability_percent, 0.0);
    let report = sim.run(&absent, 2000, 5).unwrap();
    assert_eq!(report.probability_percent, 0.0);
    assert_eq!(report.success_count, 0);

    // When every Basic is on the non-preferred list, the mulligan
    // guarantees the condition.
    let all_listed = CalculationRequest::non_preferred_opening(["Alpha", "Beta"]);
    let closed = sim.closed_form(&all_listed).unwrap();
    assert_eq!(closed.probability_percent, 100.0);
    assert!(closed.note.is_some());
    let report = sim.run(&all_listed, 2000, 5).unwrap();
    assert_eq!(report.probability_percent, 100.0);
    assert_eq!(report.success_count, report.total_valid_games);
}

/// Test that a single-copy draw card can never be "obtained" on the
/// turn it is played: its own effect consumes it before the final-hand
/// check.
#[test]
fn test_target_consumed_by_own_effect_never_counts() {
    let mut spec = DeckSpec::new()
        .with_card("Pikachu", CardType::BasicPokemon, 2)
        .with_card("Professor's Research", CardType::Supporter, 1);
    for i in 0..8 {
        spec.add_card(format!("Filler {}", i), CardType::Item, 2);
    }
    spec.add_card("Extra", CardType::Item, 1);
    let sim = configured(spec, vec!["Professor's Research".to_string()]);

    let request = CalculationRequest::multi_card(["Professor's Research"], 1);
    let report = sim.run(&request, TRIALS, 31).unwrap();
    assert_eq!(
        report.probability_percent, 0.0,
        "a drawn copy is always played and therefore never held at the end"
    );
    assert_eq!(report.success_count, 0);
    assert!(report.total_valid_games > 0);
}

/// Test the two-copy variant: the Supporter limit parks the second
/// copy in hand, so the probability is the chance of seeing both
/// copies (or drawing the second off the first).
#[test]
fn test_second_copy_survives_the_supporter_limit() {
    let mut spec = DeckSpec::new()
        .with_card("Pikachu", CardType::BasicPokemon, 2)
        .with_card("Professor's Research", CardType::Supporter, 2);
    for i in 0..8 {
        spec.add_card(format!("Filler {}", i), CardType::Item, 2);
    }
    let sim = configured(spec, vec!["Professor's Research".to_string()]);

    let request = CalculationRequest::multi_card(["Professor's Research"], 1);
    let report = sim.run(&request, TRIALS, 31).unwrap();
    // Roughly 14%: both copies among the first six cards, or the
    // played copy draws its twin.
    assert!(
        report.probability_percent > 5.0 && report.probability_percent < 30.0,
        "estimated {}",
        report.probability_percent
    );
}

/// Test that the draw suite meaningfully improves multi-card odds over
/// drawing blind.
#[test]
fn test_draw_cards_improve_multi_card_odds() {
    let spec = DeckSpec::new()
        .with_card("Type:Null", CardType::BasicPokemon, 2)
        .with_card("Silvally", CardType::Stage1Pokemon, 2)
        .with_card("Poke Ball", CardType::Item, 2)
        .with_card("Professor's Research", CardType::Supporter, 2)
        .with_card("Galdion", CardType::Supporter, 2)
        .with_card("Pokemon Communication", CardType::Item, 2)
        .with_card("Potion", CardType::Item, 2)
        .with_card("X Speed", CardType::Item, 2)
        .with_card("Rocky Helmet", CardType::Tool, 2)
        .with_card("Lightning Energy", CardType::BasicEnergy, 2);
    let request = CalculationRequest::multi_card(["Type:Null", "Silvally"], 2);

    let blind = configured(spec.clone(), Vec::new());
    let p_blind = blind.run(&request, TRIALS, 8).unwrap().probability_percent;

    let assisted = configured(
        spec,
        vec![
            "Poke Ball".to_string(),
            "Professor's Research".to_string(),
            "Galdion".to_string(),
            "Pokemon Communication".to_string(),
        ],
    );
    let p_assisted = assisted.run(&request, TRIALS, 8).unwrap().probability_percent;

    assert!(
        p_assisted > p_blind + 5.0,
        "assisted {} vs blind {}",
        p_assisted,
        p_blind
    );
}

/// Test that later target turns can only help.
#[test]
fn test_multi_card_probability_grows_with_turn() {
    let sim = configured(
        DeckSpec::new()
            .with_card("Type:Null", CardType::BasicPokemon, 2)
            .with_card("Silvally", CardType::Stage1Pokemon, 2)
            .with_card("Poke Ball", CardType::Item, 2)
            .with_card("Professor's Research", CardType::Supporter, 2)
            .with_card("Galdion", CardType::Supporter, 2)
            .with_card("Potion", CardType::Item, 2)
            .with_card("X Speed", CardType::Item, 2)
            .with_card("Rocky Helmet", CardType::Tool, 2)
            .with_card("Lightning Energy", CardType::BasicEnergy, 2)
            .with_card("Giovanni", CardType::Supporter, 2),
        vec![
            "Poke Ball".to_string(),
            "Professor's Research".to_string(),
            "Galdion".to_string(),
        ],
    );

    let mut last = 0.0;
    for turn in 1..=3 {
        let request = CalculationRequest::multi_card(["Type:Null", "Silvally"], turn);
        let p = sim.run(&request, TRIALS, 99).unwrap().probability_percent;
        assert!(
            p + 2.0 > last,
            "turn {} estimate {} fell below turn {} estimate {}",
            turn,
            p,
            turn - 1,
            last
        );
        last = p;
    }
}

/// Test report JSON shape end to end.
#[test]
fn test_report_round_trips_through_json() {
    let sim = configured(two_basics_spec(), Vec::new());
    let report = sim
        .run(&CalculationRequest::preferred_opening(["Alpha"]), 1000, 4)
        .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"type\":\"preferred_opening\""));
    assert!(json.contains("\"method\":\"simulation\""));

    let back: pocket_sim::prob::ProbabilityReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
