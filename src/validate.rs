//! Deterministic validation of enumeration results and of the bundled reference graphs.

use crate::enumerate::{enumerate, EnumerateConfig, Strategy};
use crate::hypergraph::Hypergraph;
use crate::reduce::reduce;
use crate::stats::NoopSink;
use crate::vertex_set::VertexSet;
use std::collections::BTreeSet;
use std::time::Duration;

/// Reference graphs with their known number of minimal transversals.
const BUNDLED: [(&str, &str, usize); 5] = [
    ("star.graph", include_str!("../data/star.graph"), 2),
    ("triangle.graph", include_str!("../data/triangle.graph"), 3),
    ("path5.graph", include_str!("../data/path5.graph"), 4),
    ("matching.graph", include_str!("../data/matching.graph"), 4),
    ("fano.graph", include_str!("../data/fano.graph"), 7),
];

// ============================================================================
// Public API
// ============================================================================

/// Validates the bundled reference graphs:
/// - every strategy returns the same transversals,
/// - every transversal is minimal,
/// - the count matches the known value.
///
/// # Errors
/// Returns an error message naming the first graph that fails.
pub fn validate_bundled_graphs() -> Result<(), String> {
    for (name, text, expected) in BUNDLED {
        validate_case(text, name, expected)?;
    }
    Ok(())
}

/// Checks that `found` is exactly a set of distinct minimal transversals of `graph`.
///
/// Completeness is not checked here; see [`cross_check`].
///
/// # Errors
/// Returns an error message describing the first violation.
pub fn validate_transversals(graph: &Hypergraph, found: &[VertexSet]) -> Result<(), String> {
    for h in found {
        if h.len() != graph.num_vertices() {
            return Err(format!(
                "transversal {h} is over {} vertices (expected {})",
                h.len(),
                graph.num_vertices()
            ));
        }
        if !graph.is_hitting_set(h) {
            return Err(format!("{{{h}}} misses an edge"));
        }
        if !graph.is_minimal_hitting_set(h) {
            return Err(format!("{{{h}}} is a hitting set but not minimal"));
        }
    }
    let reduced = reduce(found.iter().cloned());
    if reduced.len() != found.len() {
        return Err(format!(
            "result shrinks from {} to {} sets under reduction",
            found.len(),
            reduced.len()
        ));
    }
    Ok(())
}

/// Runs every strategy on `graph` and compares the results.
///
/// Returns the number of minimal transversals on agreement.
///
/// # Errors
/// Returns an error message if a strategy fails, the results differ, or the standard result does
/// not pass [`validate_transversals`].
pub fn cross_check(graph: &Hypergraph, brute_force_budget: Duration) -> Result<usize, String> {
    let mut reference: Option<(Strategy, BTreeSet<VertexSet>)> = None;
    for strategy in Strategy::ALL {
        let config = EnumerateConfig {
            strategy,
            brute_force_budget,
            ..EnumerateConfig::default()
        };
        let found = enumerate(graph, &config, &mut NoopSink).map_err(|e| format!("{strategy}: {e}"))?;
        validate_transversals(graph, &found).map_err(|e| format!("{strategy}: {e}"))?;

        let found: BTreeSet<VertexSet> = found.into_iter().collect();
        match &reference {
            None => reference = Some((strategy, found)),
            Some((first, expected)) if *expected != found => {
                return Err(format!(
                    "{strategy} found {} transversals, {first} found {}",
                    found.len(),
                    expected.len()
                ));
            }
            Some(_) => {}
        }
    }
    Ok(reference.map_or(0, |(_, sets)| sets.len()))
}

// ============================================================================
// Internal
// ============================================================================

fn validate_case(text: &str, name: &str, expected: usize) -> Result<(), String> {
    let mut graph = Hypergraph::parse(text).map_err(|e| format!("{name}: {e}"))?;
    graph.reduce();
    let count = cross_check(&graph, Duration::from_secs(60)).map_err(|e| format!("{name}: {e}"))?;
    if count != expected {
        return Err(format!(
            "{name}: expected {expected} minimal transversals, found {count}"
        ));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set(n: usize, vs: &[usize]) -> VertexSet {
        VertexSet::from_vertices(n, vs.iter().copied())
    }

    fn star() -> Hypergraph {
        Hypergraph::from_edges_reduced(3, [set(3, &[0, 1]), set(3, &[0, 2])])
    }

    #[test]
    fn bundled_graphs_are_valid() {
        validate_bundled_graphs().unwrap();
    }

    #[test]
    fn fano_plane_is_its_own_transversal_hypergraph() {
        let (_, text, _) = BUNDLED[4];
        let mut fano = Hypergraph::parse(text).unwrap();
        fano.reduce();
        let tr = fano.transversals().unwrap();
        assert_eq!(tr.edge_set(), fano.edge_set());
    }

    #[test]
    fn rejects_non_hitting_set() {
        let result = validate_transversals(&star(), &[set(3, &[1])]);
        assert!(result.unwrap_err().contains("misses"));
    }

    #[test]
    fn rejects_non_minimal_set() {
        let result = validate_transversals(&star(), &[set(3, &[0, 1])]);
        assert!(result.unwrap_err().contains("not minimal"));
    }

    #[test]
    fn rejects_duplicates() {
        let result = validate_transversals(&star(), &[set(3, &[0]), set(3, &[0])]);
        assert!(result.unwrap_err().contains("reduction"));
    }

    #[test]
    fn accepts_complete_answer() {
        assert!(validate_transversals(&star(), &[set(3, &[0]), set(3, &[1, 2])]).is_ok());
        assert_eq!(cross_check(&star(), Duration::from_secs(10)), Ok(2));
    }

    #[test]
    fn cross_check_reports_raw_graph() {
        let raw = Hypergraph::new(2, vec![set(2, &[0])]);
        assert!(cross_check(&raw, Duration::from_secs(1)).is_err());
    }
}
