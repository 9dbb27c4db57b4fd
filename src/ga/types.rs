//! Core trait definitions for the GA engine.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic generational loop and the problem bindings
//! in [`crate::tsp`] and [`crate::knapsack`].

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization).
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for freshly created, not yet evaluated individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for selection weights and history.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::NEG_INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The runner calls
/// [`GaProblem::evaluate`] at the start of every generation and stores the
/// result via [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// Implementors supply the encoding-specific parts of the search:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents
/// 4. **Mutation**: how to perturb an individual
///
/// Selection, elitism and generational replacement live in
/// [`GaRunner`](super::GaRunner) and are configured through
/// [`GaConfig`](super::GaConfig).
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Individuals to place in the initial population before random ones.
    ///
    /// The runner keeps at most `population_size` of them. The default
    /// contributes nothing.
    fn seed_population(&self) -> Vec<Self::Individual> {
        Vec::new()
    }

    /// Evaluates an individual and returns its fitness.
    ///
    /// Higher fitness values are considered better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces offspring by recombining two parents.
    ///
    /// Returns a `Vec` of children; the runner handles sizing.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place.
    ///
    /// Called only when the runner's mutation-rate draw succeeds.
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called once per generation after evaluation, before breeding.
    ///
    /// `population` is the evaluated generation and `best` the best-so-far
    /// individual. The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _population: &[Self::Individual],
        _best: &Self::Individual,
    ) {
    }
}
