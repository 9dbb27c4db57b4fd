//! Genetic operators for permutation and bitstring chromosomes.
//!
//! These operate on plain slices and are problem-agnostic; the problem
//! bindings in [`crate::tsp`] and [`crate::knapsack`] wrap them.
//!
//! # Crossover Operators
//!
//! - [`order_crossover`]: segment transplant that preserves relative order
//! - [`single_point_crossover`]: head of one parent, tail of the other
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: exchange two distinct random positions, O(1)
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::index;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Order-preserving segment crossover for permutations.
///
/// # Algorithm
///
/// 1. Draw two distinct cut points and sort them into `start < end`
/// 2. Copy `parent1[start..end]` into the child at the same positions
/// 3. Take the elements of `parent2` missing from that segment, in
///    `parent2` order; the first `start` fill `child[..start]`, the rest
///    fill `child[end..]`
///
/// The child is a permutation whenever both parents are permutations of the
/// same value set. Values must lie in `0..n`.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (start, end) = cut_points(n, rng);
    transplant(parent1, parent2, start, end)
}

/// Build one child from `template[start..end]`, filling from `donor`.
fn transplant(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut in_segment = vec![false; n];
    for &v in &template[start..end] {
        in_segment[v] = true;
    }

    let mut remaining = donor.iter().copied().filter(|&v| !in_segment[v]);
    let mut child = Vec::with_capacity(n);
    child.extend(remaining.by_ref().take(start));
    child.extend_from_slice(&template[start..end]);
    child.extend(remaining);
    child
}

/// Single-point crossover for fixed-length chromosomes.
///
/// Draws a cut uniformly from `0..len-1` and returns `parent1[..cut]`
/// followed by `parent2[cut..]`. A chromosome of length 0 or 1 always uses
/// cut 0, so the child equals `parent2`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<T: Clone, R: Rng>(
    parent1: &[T],
    parent2: &[T],
    rng: &mut R,
) -> Vec<T> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let cut = if n > 1 { rng.random_range(0..n - 1) } else { 0 };
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..cut]);
    child.extend_from_slice(&parent2[cut..]);
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// Performs exactly one swap; callers gate it by a mutation rate.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<T, R: Rng>(genes: &mut [T], rng: &mut R) {
    let n = genes.len();
    if n < 2 {
        return;
    }
    let (i, j) = cut_points(n, rng);
    genes.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Draw two distinct positions in `0..n`, returned as `start < end`.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0), picks.index(1));
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns `true` if `perm` holds every value of `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
