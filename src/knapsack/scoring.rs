//! Packing value, weight and fitness.

use super::types::Item;

/// Total `(value, weight)` of the items flagged in `flags`.
///
/// # Panics
/// Panics if `flags` and `items` differ in length.
pub fn knapsack_value<P>(flags: &[bool], items: &[Item<P>]) -> (f64, f64) {
    assert_eq!(flags.len(), items.len(), "one flag per item");

    flags
        .iter()
        .zip(items)
        .filter(|(&on, _)| on)
        .fold((0.0, 0.0), |(v, w), (_, item)| (v + item.value, w + item.weight))
}

/// Total value if the packing fits within `max_weight`, otherwise 0.
///
/// Overweight packings are never scored negative; they simply weigh nothing
/// under fitness-proportionate selection.
///
/// # Examples
///
/// ```
/// use u_evosolve::knapsack::{knapsack_fitness, Item};
///
/// let items = [Item::new(60.0, 10.0), Item::new(100.0, 20.0), Item::new(120.0, 30.0)];
/// assert_eq!(knapsack_fitness(&[false, true, true], &items, 50.0), 220.0);
/// assert_eq!(knapsack_fitness(&[true, true, true], &items, 50.0), 0.0);
/// ```
pub fn knapsack_fitness<P>(flags: &[bool], items: &[Item<P>], max_weight: f64) -> f64 {
    let (value, weight) = knapsack_value(flags, items);
    if weight <= max_weight {
        value
    } else {
        0.0
    }
}
