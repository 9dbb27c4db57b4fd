//! Tour length and fitness.

use super::types::City;

/// Fitness reported for a tour of zero length (all cities coincide).
///
/// Large and finite, so it still compares and sums like any other score.
pub const ZERO_LENGTH_FITNESS: f64 = f64::MAX;

/// Length of the closed tour visiting `cities` in `route` order, including
/// the edge from the last city back to the first.
///
/// # Panics
/// Panics if `route` and `cities` differ in length or `route` holds an index
/// outside `0..cities.len()`.
///
/// # Examples
///
/// ```
/// use u_evosolve::tsp::{route_length, City};
///
/// let square = [
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// assert_eq!(route_length(&[0, 1, 2, 3], &square), 4.0);
/// ```
pub fn route_length(route: &[usize], cities: &[City]) -> f64 {
    assert_eq!(
        route.len(),
        cities.len(),
        "route must visit every city exactly once"
    );

    let n = route.len();
    (0..n)
        .map(|i| cities[route[i]].distance(&cities[route[(i + 1) % n]]))
        .sum()
}

/// Reciprocal tour length; higher is better.
///
/// A zero-length tour scores [`ZERO_LENGTH_FITNESS`].
///
/// # Panics
/// Same preconditions as [`route_length`].
pub fn tsp_fitness(route: &[usize], cities: &[City]) -> f64 {
    let length = route_length(route, cities);
    let fitness = 1.0 / length;
    if length > 0.0 && fitness.is_finite() {
        fitness
    } else {
        ZERO_LENGTH_FITNESS
    }
}
