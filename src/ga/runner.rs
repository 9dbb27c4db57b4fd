//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → best tracking → elitism → selection →
//! crossover → mutation → replacement, for a fixed number of generations.

use super::config::GaConfig;
use super::selection::MatingScheme;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best-so-far fitness after each generation.
    pub fitness_history: Vec<f64>,
}

/// Best individual observed so far in one run.
///
/// Replaced only by a strictly fitter individual; ties keep the incumbent.
#[derive(Debug, Clone)]
pub struct BestTracker<I: Individual> {
    best: Option<I>,
}

impl<I: Individual> Default for BestTracker<I> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<I: Individual> BestTracker<I> {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a candidate; clones it in if it beats the incumbent.
    ///
    /// Returns `true` when the tracker was updated.
    pub fn offer(&mut self, candidate: &I) -> bool {
        let improves = match &self.best {
            None => true,
            Some(best) => candidate.fitness() > best.fitness(),
        };
        if improves {
            self.best = Some(candidate.clone());
        }
        improves
    }

    /// The current best, if any candidate was offered.
    pub fn best(&self) -> Option<&I> {
        self.best.as_ref()
    }

    /// Consumes the tracker, returning the best individual.
    pub fn into_best(self) -> Option<I> {
        self.best
    }
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use u_evosolve::ga::{GaConfig, GaRunner};
/// use u_evosolve::tsp::{City, TspProblem};
///
/// let cities = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let problem = TspProblem::new(&cities);
/// let config = GaConfig::tsp().with_generations(50).with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// assert_eq!(result.generations, 50);
/// assert_eq!(result.best.len(), 4);
/// println!("Best fitness: {:?}", result.best_fitness);
/// # Ok::<(), u_evosolve::ConfigError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator built from `config.seed`.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; the caller owns the random source.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            generations = config.generations,
            selection = ?config.selection,
        )
    )]
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        // 1. Initialize population
        let mut population = initial_population(problem, config.population_size, rng);

        let mut tracker = BestTracker::new();
        let mut fitness_history = Vec::with_capacity(config.generations);

        // 2. Generational loop
        for gen in 0..config.generations {
            evaluate_population(problem, &mut population);

            let gen_best = find_best(&population);
            if tracker.offer(gen_best) {
                debug!(
                    generation = gen,
                    best_fitness = gen_best.fitness().to_f64(),
                    "new best"
                );
            }

            let best = tracker.best().unwrap_or(gen_best);
            fitness_history.push(best.fitness().to_f64());
            trace!(
                generation = gen,
                generation_best = gen_best.fitness().to_f64(),
                "generation evaluated"
            );
            problem.on_generation(gen, &population, best);

            // The last generation's successors would be discarded.
            if gen + 1 < config.generations {
                population = next_generation(problem, config, &population, rng);
            }
        }

        let best = tracker.into_best().ok_or(ConfigError::ZeroGenerations)?;
        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Seeded individuals first, then random ones up to `size`.
fn initial_population<P: GaProblem, R: Rng>(
    problem: &P,
    size: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut population = problem.seed_population();
    population.truncate(size);
    while population.len() < size {
        population.push(problem.create_individual(rng));
    }
    population
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Build the successor population: elites, then offspring.
fn next_generation<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &[P::Individual],
    rng: &mut R,
) -> Vec<P::Individual> {
    let size = config.population_size;
    let mut next_gen = elites(population, config.elite_count);

    match config.mating {
        MatingScheme::Independent => {
            while next_gen.len() < size {
                let p1 = config.selection.select(population, rng);
                let p2 = config.selection.select(population, rng);
                for child in breed(problem, config, &population[p1], &population[p2], rng) {
                    if next_gen.len() >= size {
                        break;
                    }
                    next_gen.push(child);
                }
            }
        }
        MatingScheme::SequentialPairs => {
            let count = size - next_gen.len();
            let parents = config.selection.select_many(population, count, rng);
            for i in (0..count).step_by(2) {
                let a = &population[parents[i]];
                let b = &population[parents[(i + 1).min(count - 1)]];
                next_gen.extend(breed(problem, config, a, b, rng));
                next_gen.extend(breed(problem, config, b, a, rng));
            }
            next_gen.truncate(size);
        }
    }

    next_gen
}

/// Crossover (gated by `crossover_rate`) followed by mutation (gated by
/// `mutation_rate`) on each child.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    parent1: &P::Individual,
    parent2: &P::Individual,
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut children = if passes(config.crossover_rate, rng) {
        problem.crossover(parent1, parent2, rng)
    } else {
        vec![parent1.clone()]
    };

    if config.mutation_rate > 0.0 {
        for child in &mut children {
            if passes(config.mutation_rate, rng) {
                problem.mutate(child, rng);
            }
        }
    }
    children
}

/// Bernoulli draw that spends no randomness on certain outcomes.
fn passes<R: Rng>(rate: f64, rng: &mut R) -> bool {
    if rate >= 1.0 {
        true
    } else if rate <= 0.0 {
        false
    } else {
        rng.random_range(0.0..1.0) < rate
    }
}

/// The `count` fittest individuals, best first. Ties keep population order.
fn elites<I: Individual>(population: &[I], count: usize) -> Vec<I> {
    if count == 0 {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        population[b]
            .fitness()
            .partial_cmp(&population[a].fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
        .into_iter()
        .take(count)
        .map(|i| population[i].clone())
        .collect()
}

/// Find the individual with the best (highest) fitness.
///
/// Ties resolve to the earliest individual.
fn find_best<I: Individual>(population: &[I]) -> &I {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() > best.fitness() {
            best = ind;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
