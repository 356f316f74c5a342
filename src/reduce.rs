//! Antichain reduction of edge lists.
//!
//! An edge that contains another edge adds no constraint on hitting sets, so a raw edge list can
//! always be replaced by its inclusion-minimal members. [`Antichain`] maintains that form
//! incrementally and is shared by the global [`reduce`] pass and the per-worker accumulators of
//! table derivation.

use crate::vertex_set::VertexSet;
use std::collections::BTreeSet;

// ============================================================================
// Antichain
// ============================================================================

/// A growing set of pairwise incomparable edges.
#[derive(Clone, Debug, Default)]
pub struct Antichain {
    edges: BTreeSet<VertexSet>,
}

impl Antichain {
    /// Creates an empty antichain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers `candidate` to the antichain.
    ///
    /// If an accepted edge is a subset of `candidate` (including an equal one), the candidate is
    /// dominated and dropped. Otherwise every accepted superset of `candidate` is evicted and the
    /// candidate is inserted. Returns `true` if the candidate was inserted.
    pub fn insert(&mut self, candidate: VertexSet) -> bool {
        if self.edges.iter().any(|e| e.is_subset_of(&candidate)) {
            return false;
        }
        self.edges.retain(|e| !candidate.is_subset_of(e));
        self.edges.insert(candidate);
        true
    }

    /// Number of edges currently held.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if no edge has been accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates the accepted edges in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &VertexSet> {
        self.edges.iter()
    }

    /// Consumes the antichain, returning its edges in canonical order.
    pub fn into_edges(self) -> Vec<VertexSet> {
        self.edges.into_iter().collect()
    }
}

impl Extend<VertexSet> for Antichain {
    fn extend<I: IntoIterator<Item = VertexSet>>(&mut self, iter: I) {
        for e in iter {
            self.insert(e);
        }
    }
}

// ============================================================================
// Strategies
// ============================================================================

/// Reduction algorithm selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReduceStrategy {
    /// Incremental antichain maintenance (production path).
    #[default]
    Antichain,
    /// Quadratic pairwise minimizer, kept as a differential-testing baseline.
    Pairwise,
}

/// Reduces `edges` to the inclusion-minimal distinct edges, in canonical order.
pub fn reduce<I: IntoIterator<Item = VertexSet>>(edges: I) -> Vec<VertexSet> {
    let mut antichain = Antichain::new();
    antichain.extend(edges);
    antichain.into_edges()
}

/// Reduces `edges` with the chosen strategy. Both strategies return the same set.
pub fn reduce_with<I: IntoIterator<Item = VertexSet>>(
    edges: I,
    strategy: ReduceStrategy,
) -> Vec<VertexSet> {
    match strategy {
        ReduceStrategy::Antichain => reduce(edges),
        ReduceStrategy::Pairwise => reduce_pairwise(edges),
    }
}

/// Deduplicates, then keeps every edge that has no other edge as a subset.
pub fn reduce_pairwise<I: IntoIterator<Item = VertexSet>>(edges: I) -> Vec<VertexSet> {
    let distinct: Vec<VertexSet> = edges
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    distinct
        .iter()
        .enumerate()
        .filter(|&(i, e)| {
            !distinct
                .iter()
                .enumerate()
                .any(|(j, f)| i != j && f.is_subset_of(e))
        })
        .map(|(_, e)| e.clone())
        .collect()
}

/// Returns `true` if the edges are pairwise distinct and no edge contains another.
pub fn is_antichain(edges: &[VertexSet]) -> bool {
    for (i, a) in edges.iter().enumerate() {
        for b in &edges[i + 1..] {
            if a.is_subset_of(b) || b.is_subset_of(a) {
                return false;
            }
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn set(n: usize, vs: &[usize]) -> VertexSet {
        VertexSet::from_vertices(n, vs.iter().copied())
    }

    fn random_edges<R: Rng>(rng: &mut R, n: usize, m: usize) -> Vec<VertexSet> {
        (0..m)
            .map(|_| {
                let mut e = VertexSet::from_vertices(n, (0..n).filter(|_| rng.random_bool(0.35)));
                if e.is_empty() {
                    e.insert(rng.random_range(0..n));
                }
                e
            })
            .collect()
    }

    fn hits_all(edges: &[VertexSet], h: &VertexSet) -> bool {
        edges.iter().all(|e| e.intersects(h))
    }

    #[test]
    fn dominated_and_duplicate_edges_are_dropped() {
        let edges = vec![
            set(4, &[0, 1, 2]),
            set(4, &[1]),
            set(4, &[1, 3]),
            set(4, &[2, 3]),
            set(4, &[2, 3]),
        ];
        let reduced = reduce(edges);
        assert_eq!(reduced.len(), 2);
        assert!(reduced.contains(&set(4, &[1])));
        assert!(reduced.contains(&set(4, &[2, 3])));
        assert!(is_antichain(&reduced));
    }

    #[test]
    fn insert_reports_acceptance() {
        let mut a = Antichain::new();
        assert!(a.insert(set(3, &[0, 1])));
        assert!(!a.insert(set(3, &[0, 1])));
        assert!(!a.insert(set(3, &[0, 1, 2])));
        assert!(a.insert(set(3, &[0])));
        assert_eq!(a.len(), 1);
        assert!(a.insert(set(3, &[1, 2])));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn reduction_is_idempotent() {
        let mut rng = XorShiftRng::seed_from_u64(0x1DE);
        for _ in 0..100 {
            let n = rng.random_range(1..12);
            let m = rng.random_range(0..25);
            let once = reduce(random_edges(&mut rng, n, m));
            let twice = reduce(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn reduction_is_order_independent() {
        let mut rng = XorShiftRng::seed_from_u64(0x0D3);
        for _ in 0..100 {
            let n = rng.random_range(1..10);
            let mut edges = random_edges(&mut rng, n, 20);
            let a = reduce(edges.clone());
            edges.shuffle(&mut rng);
            let b = reduce(edges);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn pairwise_matches_antichain() {
        let mut rng = XorShiftRng::seed_from_u64(0xBA5E);
        for _ in 0..100 {
            let n = rng.random_range(1..14);
            let edges = random_edges(&mut rng, n, 30);
            assert_eq!(
                reduce_with(edges.clone(), ReduceStrategy::Antichain),
                reduce_with(edges, ReduceStrategy::Pairwise)
            );
        }
    }

    #[test]
    fn reduction_preserves_hitting_sets() {
        let mut rng = XorShiftRng::seed_from_u64(0x417);
        for _ in 0..50 {
            let n = rng.random_range(1..9);
            let edges = random_edges(&mut rng, n, 12);
            let reduced = reduce(edges.clone());
            assert!(is_antichain(&reduced));
            for mask in 0u32..(1 << n) {
                let h = VertexSet::from_vertices(n, (0..n).filter(|&v| mask & (1 << v) != 0));
                assert_eq!(hits_all(&edges, &h), hits_all(&reduced, &h), "mask {mask:b}");
            }
        }
    }

    #[test]
    fn empty_input_reduces_to_empty() {
        assert!(reduce(Vec::new()).is_empty());
        assert!(is_antichain(&[]));
    }
}
