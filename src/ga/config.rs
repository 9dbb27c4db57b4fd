//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::{MatingScheme, Selection};
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, generation count, selection, mating and
/// operator rates. The loop always runs exactly `generations` generations.
///
/// # Presets
///
/// ```
/// use u_evosolve::ga::{GaConfig, Selection};
///
/// let config = GaConfig::tsp();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.selection, Selection::Tournament(3));
///
/// let config = GaConfig::knapsack().with_generations(200).with_seed(7);
/// assert_eq!(config.population_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run. There is no early termination.
    pub generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// How selected parents are paired into offspring.
    pub mating: MatingScheme,

    /// Number of best individuals copied unchanged into the next generation.
    pub elite_count: usize,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, a clone of the first parent is used.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self::tsp()
    }
}

impl GaConfig {
    /// Preset for permutation-encoded tours.
    ///
    /// - Population: 100, Generations: 100
    /// - Tournament of 3, independent mating, 2 elites
    /// - Mutation rate: 0.01
    pub fn tsp() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            selection: Selection::Tournament(3),
            mating: MatingScheme::Independent,
            elite_count: 2,
            crossover_rate: 1.0,
            mutation_rate: 0.01,
            seed: None,
        }
    }

    /// Preset for bitstring-encoded knapsack packings.
    ///
    /// - Population: 50, Generations: 100
    /// - Roulette selection, sequential pairing, no elites
    /// - No mutation
    pub fn knapsack() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            selection: Selection::Roulette,
            mating: MatingScheme::SequentialPairs,
            elite_count: 0,
            crossover_rate: 1.0,
            mutation_rate: 0.0,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the mating scheme.
    pub fn with_mating(mut self, mating: MatingScheme) -> Self {
        self.mating = mating;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.elite_count >= self.population_size {
            return Err(ConfigError::EliteOverflow {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        if self.selection == Selection::Tournament(0) {
            return Err(ConfigError::InvalidTournament);
        }
        Ok(())
    }
}
