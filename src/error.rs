//! Typed failures returned to the caller.
//!
//! Only input-contract violations are errors. A poor generation is never a
//! failure, and numeric corner cases (zero-length tours, all-zero fitness)
//! are resolved inside the engine.

/// Invalid [`GaConfig`](crate::ga::GaConfig) parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("PopulationTooSmall: population_size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },
    #[error("ZeroGenerations: generations must be at least 1")]
    ZeroGenerations,
    #[error("EliteOverflow: elite_count={elite_count} fills population_size={population_size}")]
    EliteOverflow {
        elite_count: usize,
        population_size: usize,
    },
    #[error("InvalidTournament: tournament size must be at least 1")]
    InvalidTournament,
}

/// Rejected solve request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("NoCities: at least one city is required")]
    NoCities,
    #[error("NonFiniteCoordinate: city {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("InvalidInitialRoute: initial route {index} is not a permutation of the cities")]
    InvalidInitialRoute { index: usize },
    #[error("NoItems: at least one item is required")]
    NoItems,
    #[error("InvalidItem: item {index} needs a finite, non-negative value and weight")]
    InvalidItem { index: usize },
    #[error("InvalidCapacity: max_weight must be finite and non-negative, got {max_weight}")]
    InvalidCapacity { max_weight: f64 },
    #[error("NumericOverflow: the {quantity} of this input exceeds the f64 range")]
    NumericOverflow { quantity: &'static str },
    #[error("Config: {0}")]
    Config(#[from] ConfigError),
}
