//! Knapsack problem binding and solve entry points.

use super::scoring::{knapsack_fitness, knapsack_value};
use super::types::{Item, KnapsackSolution, Packing, SelectedItem};
use crate::error::SolveError;
use crate::ga::operators::single_point_crossover;
use crate::ga::{GaConfig, GaProblem, GaRunner};
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, instrument, warn};

/// 0/1 Knapsack as a [`GaProblem`]: uniform random bitstrings, single-point
/// crossover, value-or-zero fitness.
///
/// There is no mutation operator; variation comes from crossover and
/// parent sampling alone.
#[derive(Debug)]
pub struct KnapsackProblem<'a, P = ()> {
    items: &'a [Item<P>],
    max_weight: f64,
}

impl<'a, P> KnapsackProblem<'a, P> {
    /// Creates a problem packing `items` into `max_weight`.
    pub fn new(items: &'a [Item<P>], max_weight: f64) -> Self {
        Self { items, max_weight }
    }

    /// The items on offer.
    pub fn items(&self) -> &'a [Item<P>] {
        self.items
    }

    /// The capacity.
    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }
}

impl<P> GaProblem for KnapsackProblem<'_, P> {
    type Individual = Packing;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Packing {
        Packing::new((0..self.items.len()).map(|_| rng.random_bool(0.5)).collect())
    }

    fn evaluate(&self, packing: &Packing) -> f64 {
        knapsack_fitness(packing.flags(), self.items, self.max_weight)
    }

    fn crossover<R: Rng>(&self, p1: &Packing, p2: &Packing, rng: &mut R) -> Vec<Packing> {
        vec![Packing::new(single_point_crossover(
            p1.flags(),
            p2.flags(),
            rng,
        ))]
    }
}

/// Configurable knapsack solver.
///
/// # Examples
///
/// ```
/// use u_evosolve::knapsack::{Item, KnapsackSolver};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// let solution = KnapsackSolver::new(50).with_seed(42).solve(&items, 50.0).unwrap();
/// assert!(solution.total_weight <= 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct KnapsackSolver {
    config: GaConfig,
}

impl KnapsackSolver {
    /// A solver using [`GaConfig::knapsack`] for `generations` generations.
    pub fn new(generations: usize) -> Self {
        Self {
            config: GaConfig::knapsack().with_generations(generations),
        }
    }

    /// Replaces the whole configuration, generation count included.
    pub fn with_config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Solves with a generator built from the configured seed.
    pub fn solve<P: Clone>(
        &self,
        items: &[Item<P>],
        max_weight: f64,
    ) -> Result<KnapsackSolution<P>, SolveError> {
        let mut rng = rng_from_seed(self.config.seed);
        self.solve_with_rng(items, max_weight, &mut rng)
    }

    /// Solves drawing every random decision from `rng`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(items = items.len(), max_weight = max_weight, generations = self.config.generations)
    )]
    pub fn solve_with_rng<P: Clone, R: Rng>(
        &self,
        items: &[Item<P>],
        max_weight: f64,
        rng: &mut R,
    ) -> Result<KnapsackSolution<P>, SolveError> {
        self.validate(items, max_weight)
            .inspect_err(|err| warn!(%err, "rejected knapsack input"))?;

        let problem = KnapsackProblem::new(items, max_weight);
        let result = GaRunner::run_with_rng(&problem, &self.config, rng)?;

        let (total_value, total_weight) = knapsack_value(result.best.flags(), items);
        if total_weight > max_weight {
            // Every candidate seen was overweight.
            debug!(total_weight, "no feasible packing found");
            return Ok(KnapsackSolution {
                selected_items: Vec::new(),
                total_value: 0.0,
                total_weight: 0.0,
            });
        }

        let selected_items = result
            .best
            .selected()
            .map(|index| {
                let item = &items[index];
                SelectedItem {
                    index,
                    value: item.value,
                    weight: item.weight,
                    payload: item.payload.clone(),
                }
            })
            .collect();
        Ok(KnapsackSolution {
            selected_items,
            total_value,
            total_weight,
        })
    }

    fn validate<P>(&self, items: &[Item<P>], max_weight: f64) -> Result<(), SolveError> {
        if items.is_empty() {
            return Err(SolveError::NoItems);
        }
        if let Some(index) = items.iter().position(|item| !item.is_valid()) {
            return Err(SolveError::InvalidItem { index });
        }
        if !(max_weight.is_finite() && max_weight >= 0.0) {
            return Err(SolveError::InvalidCapacity { max_weight });
        }
        if !items.iter().map(|item| item.value).sum::<f64>().is_finite() {
            return Err(SolveError::NumericOverflow {
                quantity: "total item value",
            });
        }
        if !items.iter().map(|item| item.weight).sum::<f64>().is_finite() {
            return Err(SolveError::NumericOverflow {
                quantity: "total item weight",
            });
        }
        self.config.validate()?;
        Ok(())
    }
}

/// Solves a 0/1 knapsack instance with population 50.
///
/// Returns the most valuable packing within `max_weight` seen over
/// `generations` generations.
pub fn solve_knapsack<P: Clone>(
    items: &[Item<P>],
    max_weight: f64,
    generations: usize,
) -> Result<KnapsackSolution<P>, SolveError> {
    KnapsackSolver::new(generations).solve(items, max_weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::ga::Individual;
    use crate::random::create_rng;
    use std::cell::RefCell;

    fn classic() -> Vec<Item> {
        vec![
            Item::new(60.0, 10.0),
            Item::new(100.0, 20.0),
            Item::new(120.0, 30.0),
        ]
    }

    fn random_items(n: usize, seed: u64) -> Vec<Item> {
        let mut rng = create_rng(seed);
        (0..n)
            .map(|_| Item::new(rng.random_range(1.0..100.0), rng.random_range(1.0..40.0)))
            .collect()
    }

    /// Delegates to [`KnapsackProblem`] and audits every generation.
    struct Audited<'a> {
        inner: KnapsackProblem<'a>,
        bad_lengths: RefCell<usize>,
        generations_seen: RefCell<usize>,
    }

    impl GaProblem for Audited<'_> {
        type Individual = Packing;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Packing {
            self.inner.create_individual(rng)
        }

        fn evaluate(&self, packing: &Packing) -> f64 {
            self.inner.evaluate(packing)
        }

        fn crossover<R: Rng>(&self, p1: &Packing, p2: &Packing, rng: &mut R) -> Vec<Packing> {
            self.inner.crossover(p1, p2, rng)
        }

        fn on_generation(&self, _generation: usize, population: &[Packing], _best: &Packing) {
            let m = self.inner.items().len();
            *self.bad_lengths.borrow_mut() +=
                population.iter().filter(|p| p.flags().len() != m).count();
            *self.generations_seen.borrow_mut() += 1;
        }
    }

    #[test]
    fn test_classic_instance_finds_optimum() {
        let solution = KnapsackSolver::new(50)
            .with_seed(42)
            .solve(&classic(), 50.0)
            .unwrap();
        assert_eq!(solution.total_value, 220.0);
        assert_eq!(solution.total_weight, 50.0);
        let indices: Vec<usize> = solution.selected_items.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_bitstrings_keep_item_count() {
        let items = random_items(13, 4);
        let problem = Audited {
            inner: KnapsackProblem::new(&items, 120.0),
            bad_lengths: RefCell::new(0),
            generations_seen: RefCell::new(0),
        };
        let config = GaConfig::knapsack().with_generations(30).with_seed(8);
        GaRunner::run(&problem, &config).unwrap();
        assert_eq!(*problem.bad_lengths.borrow(), 0);
        assert_eq!(*problem.generations_seen.borrow(), 30);
    }

    #[test]
    fn test_best_value_non_decreasing() {
        let items = random_items(20, 6);
        let problem = KnapsackProblem::new(&items, 150.0);
        let config = GaConfig::knapsack().with_generations(40).with_seed(21);
        let result = GaRunner::run(&problem, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0], "best value fell: {window:?}");
        }
    }

    #[test]
    fn test_returned_packing_is_feasible() {
        for seed in 0..20 {
            let items = random_items(15, seed);
            let max_weight = 60.0 + seed as f64 * 5.0;
            let solution = KnapsackSolver::new(15)
                .with_seed(seed)
                .solve(&items, max_weight)
                .unwrap();
            assert!(
                solution.total_weight <= max_weight,
                "seed {seed}: weight {} over {max_weight}",
                solution.total_weight
            );
            let summed: f64 = solution.selected_items.iter().map(|s| s.value).sum();
            assert!((summed - solution.total_value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_nothing_fits_returns_empty() {
        let items = vec![Item::new(10.0, 5.0), Item::new(20.0, 7.0)];
        let solution = KnapsackSolver::new(10)
            .with_seed(3)
            .solve(&items, 1.0)
            .unwrap();
        assert!(solution.selected_items.is_empty());
        assert_eq!(solution.total_value, 0.0);
        assert_eq!(solution.total_weight, 0.0);
    }

    #[test]
    fn test_all_zero_fitness_population_still_evolves() {
        // Every non-empty packing is overweight, so fitness is zero
        // everywhere and selection must fall back to uniform draws.
        let items = vec![Item::new(5.0, 10.0); 6];
        let solution = KnapsackSolver::new(20)
            .with_seed(12)
            .solve(&items, 0.0)
            .unwrap();
        assert_eq!(solution.total_value, 0.0);
    }

    #[test]
    fn test_payload_is_echoed() {
        let items = vec![
            Item::with_payload(60.0, 10.0, "lamp"),
            Item::with_payload(100.0, 20.0, "tent"),
            Item::with_payload(120.0, 30.0, "stove"),
        ];
        let solution = KnapsackSolver::new(50)
            .with_seed(42)
            .solve(&items, 100.0)
            .unwrap();
        // Everything fits.
        let names: Vec<&str> = solution.selected_items.iter().map(|s| s.payload).collect();
        assert_eq!(names, vec!["lamp", "tent", "stove"]);
        assert_eq!(solution.total_value, 280.0);
    }

    #[test]
    fn test_odd_population_stays_feasible() {
        let config = GaConfig::knapsack()
            .with_population_size(7)
            .with_generations(12)
            .with_seed(5);
        let solution = KnapsackSolver::new(1)
            .with_config(config)
            .solve(&classic(), 50.0)
            .unwrap();
        assert!(solution.total_weight <= 50.0);
    }

    #[test]
    fn test_same_seed_same_packing() {
        let items = random_items(25, 2);
        let a = KnapsackSolver::new(30).with_seed(99).solve(&items, 200.0).unwrap();
        let b = KnapsackSolver::new(30).with_seed(99).solve(&items, 200.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_generation_is_valid() {
        let solution = solve_knapsack(&classic(), 50.0, 1).unwrap();
        assert!(solution.total_weight <= 50.0);
    }

    #[test]
    fn test_single_item() {
        let solution = KnapsackSolver::new(5)
            .with_seed(1)
            .solve(&[Item::new(7.0, 2.0)], 3.0)
            .unwrap();
        assert_eq!(solution.total_value, 7.0);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            solve_knapsack::<()>(&[], 10.0, 5),
            Err(SolveError::NoItems)
        );
        assert_eq!(
            solve_knapsack(&[Item::new(1.0, 1.0), Item::new(1.0, -2.0)], 10.0, 5),
            Err(SolveError::InvalidItem { index: 1 })
        );
        assert!(matches!(
            solve_knapsack(&classic(), -1.0, 5),
            Err(SolveError::InvalidCapacity { .. })
        ));
        assert_eq!(
            solve_knapsack(&classic(), 50.0, 0),
            Err(SolveError::Config(ConfigError::ZeroGenerations))
        );
    }

    #[test]
    fn test_rejects_overflowing_totals() {
        assert_eq!(
            solve_knapsack(&vec![Item::new(1e308, 1.0); 3], 10.0, 5),
            Err(SolveError::NumericOverflow {
                quantity: "total item value",
            })
        );
        assert_eq!(
            solve_knapsack(&vec![Item::new(1.0, 1e308); 3], 10.0, 5),
            Err(SolveError::NumericOverflow {
                quantity: "total item weight",
            })
        );
        // Large but summable values still solve to a finite total.
        let solution = KnapsackSolver::new(5)
            .with_seed(1)
            .solve(&vec![Item::new(1e307, 1.0); 3], 10.0)
            .unwrap();
        assert!(solution.total_value.is_finite());
    }

    #[test]
    fn test_packing_fitness_matches_scoring() {
        let items = classic();
        let problem = KnapsackProblem::new(&items, 50.0);
        let mut packing = Packing::new(vec![true, true, false]);
        let fitness = problem.evaluate(&packing);
        packing.set_fitness(fitness);
        assert_eq!(packing.fitness(), 160.0);
    }
}
