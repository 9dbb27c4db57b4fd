//! 0/1 Knapsack Problem.
//!
//! Packings are bitstrings with one flag per item. The search uses
//! fitness-proportionate selection, sequential pairing with two children
//! per pair, single-point crossover and no elitism. Overweight packings
//! score zero.
//!
//! ```
//! use u_evosolve::knapsack::{solve_knapsack, Item};
//!
//! let items = [Item::new(10.0, 4.0), Item::new(7.0, 9.0)];
//! let solution = solve_knapsack(&items, 5.0, 20).unwrap();
//! assert!(solution.total_weight <= 5.0);
//! ```

mod scoring;
mod solver;
mod types;

pub use scoring::{knapsack_fitness, knapsack_value};
pub use solver::{solve_knapsack, KnapsackProblem, KnapsackSolver};
pub use types::{Item, KnapsackSolution, Packing, SelectedItem};
