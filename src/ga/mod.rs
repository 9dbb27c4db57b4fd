//! Genetic Algorithm engine.
//!
//! A generic generational GA built on trait-based abstractions. Problems
//! plug in by implementing [`GaProblem`], which specifies how to create,
//! evaluate, crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition (initialization, evaluation, operators)
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, presets)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Best individual and best-so-far history
//! - [`BestTracker`]: Strictly-improving best-so-far holder
//!
//! # Submodules
//!
//! - [`operators`]: Permutation and bitstring crossover and mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{BestTracker, GaResult, GaRunner};
pub use selection::{MatingScheme, Selection};
pub use types::{Fitness, GaProblem, Individual};
