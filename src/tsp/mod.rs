//! Traveling Salesman Problem.
//!
//! Tours are permutations of city indices. The search uses tournament
//! selection over three distinct contestants, two elites per generation,
//! order-preserving segment crossover and swap mutation.
//!
//! ```
//! use u_evosolve::tsp::{solve_tsp, City};
//!
//! let cities = [City::new(0.0, 0.0), City::new(4.0, 0.0), City::new(4.0, 3.0)];
//! let solution = solve_tsp(&cities, 10).unwrap();
//! assert_eq!(solution.route.len(), 3);
//! assert!((solution.distance - 12.0).abs() < 1e-9);
//! ```

mod scoring;
mod solver;
mod types;

pub use scoring::{route_length, tsp_fitness, ZERO_LENGTH_FITNESS};
pub use solver::{solve_tsp, TspProblem, TspSolution, TspSolver};
pub use types::{City, Route};
