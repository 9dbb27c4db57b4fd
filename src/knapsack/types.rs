//! Knapsack domain types: items, the bitstring candidate, and results.

use crate::ga::{Fitness, Individual};

/// An item that may be packed.
///
/// `payload` is carried through the solve untouched and echoed in the
/// matching [`SelectedItem`]. With the `serde` feature it is flattened next
/// to `value` and `weight`, so extra fields of an incoming record survive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<P = ()> {
    pub value: f64,
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub payload: P,
}

impl Item {
    /// An item without payload.
    pub fn new(value: f64, weight: f64) -> Self {
        Self {
            value,
            weight,
            payload: (),
        }
    }
}

impl<P> Item<P> {
    /// An item carrying `payload`.
    pub fn with_payload(value: f64, weight: f64, payload: P) -> Self {
        Self {
            value,
            weight,
            payload,
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.value.is_finite() && self.value >= 0.0 && self.weight.is_finite() && self.weight >= 0.0
    }
}

/// A candidate packing: one inclusion flag per item.
#[derive(Debug, Clone, PartialEq)]
pub struct Packing {
    flags: Vec<bool>,
    fitness: f64,
}

impl Packing {
    /// Creates an unevaluated packing.
    pub fn new(flags: Vec<bool>) -> Self {
        Self {
            flags,
            fitness: f64::worst(),
        }
    }

    /// Inclusion flags, indexed like the items.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Indices of the included items, ascending.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }
}

impl Individual for Packing {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// An included item in a [`KnapsackSolution`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedItem<P = ()> {
    /// Position of the item in the input.
    pub index: usize,
    pub value: f64,
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub payload: P,
}

/// The best packing found by a solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct KnapsackSolution<P = ()> {
    /// Included items in input order.
    pub selected_items: Vec<SelectedItem<P>>,
    pub total_value: f64,
    pub total_weight: f64,
}
