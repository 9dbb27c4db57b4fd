//! Evolutionary solvers for two classic combinatorial problems.
//!
//! - **Traveling Salesman (TSP)**: permutation-encoded tours, tournament
//!   selection, elitism, order-preserving crossover and swap mutation.
//! - **0/1 Knapsack**: bitstring-encoded packings, fitness-proportionate
//!   selection, sequential pairing and single-point crossover.
//!
//! Both run on the generic generational engine in [`ga`]. Every solve owns
//! its population, best-so-far tracker and random source, so concurrent
//! solves are independent and a fixed seed reproduces a run exactly.
//!
//! # Quick start
//!
//! ```
//! use u_evosolve::knapsack::{solve_knapsack, Item};
//! use u_evosolve::tsp::{solve_tsp, City};
//!
//! let cities = [City::new(0.0, 0.0), City::new(0.0, 1.0), City::new(1.0, 1.0)];
//! let tour = solve_tsp(&cities, 20)?;
//! assert_eq!(tour.route.len(), 3);
//!
//! let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0)];
//! let packing = solve_knapsack(&items, 25.0, 20)?;
//! assert!(packing.total_weight <= 25.0);
//! # Ok::<(), u_evosolve::SolveError>(())
//! ```
//!
//! # Architecture
//!
//! The engine knows nothing about cities or items; [`tsp`] and [`knapsack`]
//! bind it to their encodings. Request parsing, transport and process
//! configuration belong to the caller.

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;
pub mod tsp;

pub use error::{ConfigError, SolveError};
pub use knapsack::solve_knapsack;
pub use tsp::solve_tsp;
