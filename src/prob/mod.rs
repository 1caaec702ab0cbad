//! Probability questions, answers, and the math that connects them.

pub mod calculator;
pub mod hypergeom;
pub mod report;
pub mod request;

pub use calculator::ProbabilityCalculator;
pub use report::{ClosedFormTerms, Method, ProbabilityReport};
pub use request::{CalculationRequest, MAX_TARGET_CARDS, MAX_TARGET_TURN};
