//! Hypergeometric draw math.
//!
//! Opening-hand questions are draws without replacement, so the
//! closed forms are ratios of binomial coefficients. Everything is
//! computed in `f64`; the multiplicative binomial evaluation stays
//! exact for the card-count scales this crate works at.

/// Binomial coefficient C(n, k).
///
/// Out-of-range `k` gives 0, matching the combinatorial convention.
#[must_use]
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 0..k {
        result *= (n - i) as f64;
        result /= (i + 1) as f64;
    }
    result
}

/// P(X = observed) where X counts successes in `draws` cards taken
/// without replacement from a population with `successes` marked cards.
#[must_use]
pub fn hypergeometric(population: u64, successes: u64, draws: u64, observed: u64) -> f64 {
    if successes > population || draws > population {
        return 0.0;
    }
    if observed > draws || observed > successes {
        return 0.0;
    }
    // The unmarked part of the draw has to fit in the unmarked pool.
    if draws - observed > population - successes {
        return 0.0;
    }
    binomial(successes, observed) * binomial(population - successes, draws - observed)
        / binomial(population, draws)
}

/// P(X >= 1): the chance a draw hits at least one marked card.
#[must_use]
pub fn at_least_one(population: u64, successes: u64, draws: u64) -> f64 {
    if successes == 0 {
        return 0.0;
    }
    1.0 - hypergeometric(population, successes, draws, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_binomial_known_values() {
        assert_eq!(binomial(20, 5), 15504.0);
        assert_eq!(binomial(18, 5), 8568.0);
        assert_eq!(binomial(16, 5), 4368.0);
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
        assert_eq!(binomial(4, 7), 0.0);
    }

    #[test]
    fn test_binomial_symmetry() {
        assert_eq!(binomial(20, 5), binomial(20, 15));
        assert_eq!(binomial(18, 4), binomial(18, 14));
    }

    #[test]
    fn test_hypergeometric_miss_probability() {
        // No Basic among 5 cards from a 20-card deck holding 4.
        let p = hypergeometric(20, 4, 5, 0);
        assert!((p - 4368.0 / 15504.0).abs() < EPS);
    }

    #[test]
    fn test_hypergeometric_sums_to_one() {
        let total: f64 = (0..=5).map(|k| hypergeometric(20, 4, 5, k)).sum();
        assert!((total - 1.0).abs() < EPS);
    }

    #[test]
    fn test_hypergeometric_out_of_support() {
        assert_eq!(hypergeometric(20, 4, 5, 6), 0.0);
        assert_eq!(hypergeometric(20, 2, 5, 3), 0.0);
        // 5 draws but only 4 unmarked cards: at least one hit is forced.
        assert_eq!(hypergeometric(20, 16, 5, 0), 0.0);
    }

    #[test]
    fn test_at_least_one_edges() {
        assert_eq!(at_least_one(20, 0, 5), 0.0);
        assert!((at_least_one(20, 20, 5) - 1.0).abs() < EPS);
        let p = at_least_one(20, 4, 5);
        assert!((p - (1.0 - 4368.0 / 15504.0)).abs() < EPS);
    }
}
