//! TSP problem binding and solve entry points.

use super::scoring::{route_length, tsp_fitness};
use super::types::{City, Route};
use crate::error::SolveError;
use crate::ga::operators::{is_permutation, order_crossover, swap_mutation};
use crate::ga::{GaConfig, GaProblem, GaRunner};
use crate::random::rng_from_seed;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{instrument, warn};

/// The best tour found by a solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspSolution {
    /// Visiting order as indices into the input cities.
    pub route: Vec<usize>,
    /// Closed-tour length of `route`.
    pub distance: f64,
}

/// TSP as a [`GaProblem`]: random permutations, order crossover, swap
/// mutation, reciprocal-length fitness.
#[derive(Debug, Clone, Copy)]
pub struct TspProblem<'a> {
    cities: &'a [City],
    initial_routes: &'a [Vec<usize>],
}

impl<'a> TspProblem<'a> {
    /// Creates a problem over `cities` with a purely random initial population.
    pub fn new(cities: &'a [City]) -> Self {
        Self {
            cities,
            initial_routes: &[],
        }
    }

    /// Places `routes` in the initial population ahead of random ones.
    ///
    /// Routes must be permutations of `0..cities.len()`.
    pub fn with_initial_routes(mut self, routes: &'a [Vec<usize>]) -> Self {
        self.initial_routes = routes;
        self
    }

    /// The cities being toured.
    pub fn cities(&self) -> &'a [City] {
        self.cities
    }
}

impl GaProblem for TspProblem<'_> {
    type Individual = Route;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Route {
        let mut order: Vec<usize> = (0..self.cities.len()).collect();
        order.shuffle(rng);
        Route::new(order)
    }

    fn seed_population(&self) -> Vec<Route> {
        self.initial_routes.iter().cloned().map(Route::new).collect()
    }

    fn evaluate(&self, route: &Route) -> f64 {
        tsp_fitness(route.order(), self.cities)
    }

    fn crossover<R: Rng>(&self, p1: &Route, p2: &Route, rng: &mut R) -> Vec<Route> {
        vec![Route::new(order_crossover(p1.order(), p2.order(), rng))]
    }

    fn mutate<R: Rng>(&self, route: &mut Route, rng: &mut R) {
        swap_mutation(route.order_mut(), rng);
    }
}

/// Configurable TSP solver.
///
/// # Examples
///
/// ```
/// use u_evosolve::tsp::{City, TspSolver};
///
/// let cities = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let solution = TspSolver::new(50).with_seed(42).solve(&cities).unwrap();
/// assert_eq!(solution.route.len(), 4);
/// assert!((solution.distance - 4.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct TspSolver {
    config: GaConfig,
    initial_routes: Vec<Vec<usize>>,
}

impl TspSolver {
    /// A solver using [`GaConfig::tsp`] for `generations` generations.
    pub fn new(generations: usize) -> Self {
        Self {
            config: GaConfig::tsp().with_generations(generations),
            initial_routes: Vec::new(),
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

    /// Seeds the initial population with known tours.
    pub fn with_initial_routes(mut self, routes: Vec<Vec<usize>>) -> Self {
        self.initial_routes = routes;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Solves with a generator built from the configured seed.
    pub fn solve(&self, cities: &[City]) -> Result<TspSolution, SolveError> {
        let mut rng = rng_from_seed(self.config.seed);
        self.solve_with_rng(cities, &mut rng)
    }

    /// Solves drawing every random decision from `rng`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(cities = cities.len(), generations = self.config.generations)
    )]
    pub fn solve_with_rng<R: Rng>(
        &self,
        cities: &[City],
        rng: &mut R,
    ) -> Result<TspSolution, SolveError> {
        self.validate(cities)
            .inspect_err(|err| warn!(%err, "rejected tsp input"))?;

        let problem = TspProblem::new(cities).with_initial_routes(&self.initial_routes);
        let result = GaRunner::run_with_rng(&problem, &self.config, rng)?;

        let route = result.best.into_order();
        let distance = route_length(&route, cities);
        Ok(TspSolution { route, distance })
    }

    fn validate(&self, cities: &[City]) -> Result<(), SolveError> {
        if cities.is_empty() {
            return Err(SolveError::NoCities);
        }
        if let Some(index) = cities.iter().position(|c| !c.is_finite()) {
            return Err(SolveError::NonFiniteCoordinate { index });
        }
        if let Some(index) = self
            .initial_routes
            .iter()
            .position(|r| !is_permutation(r, cities.len()))
        {
            return Err(SolveError::InvalidInitialRoute { index });
        }
        if !tour_length_bound(cities).is_finite() {
            return Err(SolveError::NumericOverflow {
                quantity: "tour length",
            });
        }
        self.config.validate()?;
        Ok(())
    }
}

/// Upper bound on any closed tour: every leg fits inside the bounding box.
fn tour_length_bound(cities: &[City]) -> f64 {
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for city in cities {
        min_x = min_x.min(city.x);
        max_x = max_x.max(city.x);
        min_y = min_y.min(city.y);
        max_y = max_y.max(city.y);
    }
    ((max_x - min_x) + (max_y - min_y)) * cities.len() as f64
}

/// Solves a TSP instance with population 100 and mutation rate 0.01.
///
/// Returns the shortest closed tour seen over `generations` generations.
pub fn solve_tsp(cities: &[City], generations: usize) -> Result<TspSolution, SolveError> {
    TspSolver::new(generations).solve(cities)
}
