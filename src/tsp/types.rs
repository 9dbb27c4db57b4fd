//! TSP domain types: input cities and the permutation candidate.

use crate::ga::{Fitness, Individual};

/// A city as a point in the plane.
///
/// With the `serde` feature a city travels as a `[x, y]` pair.
///
/// # Examples
///
/// ```
/// use u_evosolve::tsp::City;
///
/// let c = City::new(3.0, 4.0);
/// assert_eq!(c.distance(&City::new(0.0, 0.0)), 5.0);
/// assert_eq!(City::from([3.0, 4.0]), c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for City {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<City> for [f64; 2] {
    fn from(city: City) -> Self {
        [city.x, city.y]
    }
}

/// A closed tour: a permutation of city indices.
///
/// Fitness is the reciprocal tour length, so higher is better.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    order: Vec<usize>,
    fitness: f64,
}

impl Route {
    /// Creates an unevaluated route from a visiting order.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::worst(),
        }
    }

    /// Returns the visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns a mutable reference to the visiting order.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Consumes the route, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Returns the number of cities in this route.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the route visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Individual for Route {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_distance() {
        let a = City::new(0.0, 0.0);
        let b = City::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_city_conversions() {
        assert_eq!(City::from((1.0, 2.0)), City::new(1.0, 2.0));
        let pair: [f64; 2] = City::new(1.5, -2.0).into();
        assert_eq!(pair, [1.5, -2.0]);
        assert!(!City::new(f64::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_route_starts_unevaluated() {
        let route = Route::new(vec![2, 0, 1]);
        assert_eq!(route.order(), &[2, 0, 1]);
        assert_eq!(route.len(), 3);
        assert_eq!(route.fitness(), f64::NEG_INFINITY);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_city_wire_shape() {
        let cities: Vec<City> = serde_json::from_str("[[0, 0], [1.5, 2]]").unwrap();
        assert_eq!(cities, vec![City::new(0.0, 0.0), City::new(1.5, 2.0)]);
        assert_eq!(
            serde_json::to_string(&City::new(1.0, 2.0)).unwrap(),
            "[1.0,2.0]"
        );
    }
}
