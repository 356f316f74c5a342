//! Level-wise subset search for minimal transversals.
//!
//! Independent of the oracle and used to cross-check it. Level `k` holds the non-hitting
//! candidates of size `k + 1` in lexicographic order of their members; two candidates that
//! agree on all but their last member are joined into a candidate one larger. A candidate
//! containing an already found transversal is dropped, every other hitting candidate is
//! minimal.

use crate::error::{HypergraphError, Result};
use crate::hypergraph::Hypergraph;
use crate::stats::{Discoveries, StatsSink};
use crate::vertex_set::VertexSet;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outer iterations between wall-clock checks.
const CHECK_EVERY: u64 = 1_000;

/// Computes every minimal transversal of `graph`. Without edges, that is the empty set alone.
///
/// # Errors
/// Returns [`HypergraphError::TimeBudgetExceeded`] once `budget` has elapsed; the check is
/// coarse and runs every [`CHECK_EVERY`] outer iterations.
pub fn minimal_hitting_sets(
    graph: &Hypergraph,
    budget: Duration,
    sink: &mut dyn StatsSink,
    trace: bool,
) -> Result<Vec<VertexSet>> {
    let n = graph.num_vertices();
    let started = Instant::now();
    let mut found = Discoveries::new(sink, trace);
    if graph.edge_count() == 0 {
        found.push(VertexSet::new(n));
        return Ok(found.into_sets());
    }

    let mut incomplete = Vec::with_capacity(n);
    for v in 0..n {
        let single = VertexSet::singleton(n, v);
        if graph.is_hitting_set(&single) {
            found.push(single);
        } else {
            incomplete.push(single);
        }
    }

    let mut outer = 0u64;
    for level in 1..n {
        if incomplete.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for (i, a) in incomplete.iter().enumerate() {
            if outer % CHECK_EVERY == 0 {
                let elapsed = started.elapsed();
                if elapsed > budget {
                    warn!(?elapsed, ?budget, level, "brute force aborted");
                    return Err(HypergraphError::TimeBudgetExceeded { elapsed, budget });
                }
            }
            outer += 1;

            let Some(last) = a.last() else { continue };
            let mut prefix = a.clone();
            prefix.remove(last);

            for b in &incomplete[i + 1..] {
                if !prefix.is_subset_of(b) {
                    break;
                }
                let candidate = a | b;
                if found.as_slice().iter().any(|m| m.is_subset_of(&candidate)) {
                    continue;
                }
                if graph.is_hitting_set(&candidate) {
                    found.push(candidate);
                } else {
                    next.push(candidate);
                }
            }
        }
        debug!(level, candidates = next.len(), found = found.as_slice().len(), "level done");
        incomplete = next;
    }

    Ok(found.into_sets())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::NoopSink;
    use std::collections::BTreeSet;

    fn set(n: usize, vs: &[usize]) -> VertexSet {
        VertexSet::from_vertices(n, vs.iter().copied())
    }

    const LONG: Duration = Duration::from_secs(3600);

    #[test]
    fn path_on_five_vertices() {
        let g = Hypergraph::from_edges_reduced(
            5,
            [set(5, &[0, 1]), set(5, &[1, 2]), set(5, &[2, 3]), set(5, &[3, 4])],
        );
        let found: BTreeSet<_> = minimal_hitting_sets(&g, LONG, &mut NoopSink, false)
            .unwrap()
            .into_iter()
            .collect();
        let expected = BTreeSet::from([
            set(5, &[1, 3]),
            set(5, &[1, 2, 4]),
            set(5, &[0, 2, 4]),
            set(5, &[0, 2, 3]),
        ]);
        assert_eq!(found, expected);
    }

    #[test]
    fn results_come_in_size_order() {
        let g = Hypergraph::from_edges_reduced(4, [set(4, &[0, 1]), set(4, &[0, 2]), set(4, &[3])]);
        let found = minimal_hitting_sets(&g, LONG, &mut NoopSink, false).unwrap();
        assert_eq!(found, vec![set(4, &[0, 3]), set(4, &[1, 2, 3])]);
    }

    #[test]
    fn matching_needs_one_vertex_per_edge() {
        // Edges {i, i+3}: 2^3 minimal transversals, each of size 3.
        let g = Hypergraph::from_edges_reduced(6, (0..3).map(|i| set(6, &[i, i + 3])));
        let found = minimal_hitting_sets(&g, LONG, &mut NoopSink, false).unwrap();
        assert_eq!(found.len(), 8);
        assert!(found.iter().all(|h| h.count() == 3 && g.is_minimal_hitting_set(h)));
    }

    #[test]
    fn graph_without_edges_yields_empty_set_only() {
        let g = Hypergraph::from_edges_reduced(3, Vec::new());
        let found = minimal_hitting_sets(&g, LONG, &mut NoopSink, false).unwrap();
        assert_eq!(found, vec![VertexSet::new(3)]);
    }

    #[test]
    fn exhausted_budget_is_an_error() {
        // 2^30 transversals of size 30: level two alone has well over CHECK_EVERY candidates.
        let g = Hypergraph::from_edges_reduced(60, (0..30).map(|i| set(60, &[i, i + 30])));
        let err = minimal_hitting_sets(&g, Duration::ZERO, &mut NoopSink, false).unwrap_err();
        assert!(matches!(err, HypergraphError::TimeBudgetExceeded { .. }));
    }
}
