//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover; [`MatingScheme`] determines how the chosen parents are paired.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Fitness, Individual};
use rand::seq::index;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_evosolve::ga::Selection;
///
/// // Tournament of 3 distinct contestants
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Tournament selection: sample `k` **distinct** individuals uniformly,
    /// return the fittest.
    ///
    /// `k` is clamped to the population size.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// The probability of drawing an individual is its fitness divided by the
    /// population total. Negative or non-finite fitness weighs zero. When the
    /// total weight is zero, every individual is equally likely.
    ///
    /// # Complexity
    /// O(n) per selection, O(n + k log n) for [`select_many`](Self::select_many)
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => Wheel::new(population).spin(rng),
        }
    }

    /// Select `count` parent indices independently, with replacement.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select_many<I: Individual, R: Rng>(
        &self,
        population: &[I],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => (0..count)
                .map(|_| tournament(population, *k, rng))
                .collect(),
            Selection::Roulette => {
                let wheel = Wheel::new(population);
                (0..count).map(|_| wheel.spin(rng)).collect()
            }
        }
    }
}

/// How selected parents are turned into the next generation's offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatingScheme {
    /// Select two parents per crossover, on demand, until the population is
    /// full again.
    #[default]
    Independent,

    /// Select every parent up front, then pair parent `i` with parent `i + 1`
    /// (the last parent pairs with itself when the count is odd). Each pair
    /// yields `crossover(p1, p2)` followed by `crossover(p2, p1)`.
    SequentialPairs,
}

/// Tournament selection: sample k distinct individuals, return the fittest.
fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let k = k.clamp(1, n);

    let mut contestants = index::sample(rng, n, k).into_iter();
    let mut best_idx = contestants.next().unwrap_or(0);
    for idx in contestants {
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Cumulative fitness table for roulette draws.
struct Wheel {
    cumulative: Vec<f64>,
}

impl Wheel {
    fn new<I: Individual>(population: &[I]) -> Self {
        let mut total = 0.0;
        let cumulative = population
            .iter()
            .map(|ind| {
                let f = ind.fitness().to_f64();
                if f.is_finite() && f > 0.0 {
                    total += f;
                }
                total
            })
            .collect();
        Self { cumulative }
    }

    fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn spin<R: Rng>(&self, rng: &mut R) -> usize {
        let n = self.cumulative.len();
        let total = self.total();
        if !(total > 0.0 && total.is_finite()) {
            // All-zero fitness: fall back to a uniform draw.
            return rng.random_range(0..n);
        }

        let threshold = rng.random_range(0.0..total);
        self.cumulative
            .partition_point(|&c| c <= threshold)
            .min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct TestInd {
        fit: f64,
    }

    impl Individual for TestInd {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses.iter().map(|&f| TestInd { fit: f }).collect()
    }

    #[test]
    fn test_tournament_full_size_always_picks_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        // Distinct sampling: a tournament of the whole population is exact.
        for _ in 0..1000 {
            assert_eq!(Selection::Tournament(4).select(&pop, &mut rng), 0);
        }
    }

    #[test]
    fn test_tournament_of_three_never_picks_two_worst() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        // Three distinct out of four always include index 0 or index 3.
        for _ in 0..1000 {
            let idx = Selection::Tournament(3).select(&pop, &mut rng);
            assert!(idx == 0 || idx == 3, "picked {idx}");
        }
    }

    #[test]
    fn test_tournament_clamps_to_population() {
        let pop = make_population(&[1.0, 2.0]);
        let mut rng = create_rng(42);
        assert_eq!(Selection::Tournament(10).select(&pop, &mut rng), 1);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let idx = Selection::Tournament(1).select(&pop, &mut rng);
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_proportional() {
        let pop = make_population(&[1.0, 3.0]);
        let mut rng = create_rng(42);

        let picks = Selection::Roulette.select_many(&pop, 10000, &mut rng);
        let ones = picks.iter().filter(|&&i| i == 1).count();
        // Expected 7500.
        assert!(
            (7000..8000).contains(&ones),
            "expected ~75% for the heavier individual, got {ones}/10000"
        );
    }

    #[test]
    fn test_roulette_never_picks_zero_fitness() {
        let pop = make_population(&[0.0, 60.0, 0.0, 40.0]);
        let mut rng = create_rng(7);

        for idx in Selection::Roulette.select_many(&pop, 5000, &mut rng) {
            assert!(idx == 1 || idx == 3, "zero-fitness individual {idx} drawn");
        }
    }

    #[test]
    fn test_roulette_all_zero_falls_back_to_uniform() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for idx in Selection::Roulette.select_many(&pop, 10000, &mut rng) {
            counts[idx] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected uniform fallback, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_ignores_negative_fitness() {
        let pop = make_population(&[-5.0, 2.0]);
        let mut rng = create_rng(1);
        for _ in 0..200 {
            assert_eq!(Selection::Roulette.select(&pop, &mut rng), 1);
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);

        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng), 0);
    }

    #[test]
    fn test_select_many_count() {
        let pop = make_population(&[1.0, 2.0, 3.0]);
        let mut rng = create_rng(42);
        assert_eq!(
            Selection::Tournament(2).select_many(&pop, 17, &mut rng).len(),
            17
        );
        assert_eq!(Selection::Roulette.select_many(&pop, 5, &mut rng).len(), 5);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<TestInd> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
