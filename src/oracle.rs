//! Extension oracle for partial transversals.
//!
//! Given disjoint vertex sets `x` (forced in) and `y` (forced out), the oracle decides whether
//! some minimal transversal contains all of `x` and none of `y`. Each vertex `v` of `x` must keep
//! a *witness*: an edge that `x` hits only through `v`, otherwise `v` would be redundant. The
//! remaining edges untouched by `x` must still be hittable without destroying every witness of
//! some forced vertex, which is checked by trying one witness per forced vertex at a time. That
//! product is exponential in `|x|` in the worst case.
//!
//! The hypergraph must be reduced (an antichain); on a raw edge list the verdicts are not
//! meaningful.

use crate::hypergraph::Hypergraph;
use crate::stats::{OracleExit, OracleRecord, StatsSink};
use crate::vertex_set::{Overlap, VertexSet};
use std::fmt;
use std::time::{Duration, Instant};

// ============================================================================
// Verdict
// ============================================================================

/// Classification of a forced-in / forced-out pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// No minimal transversal respects `(x, y)`.
    NotExtendable,
    /// Some minimal transversal strictly larger than `x` respects `(x, y)`.
    Extendable,
    /// `x` itself is a minimal transversal.
    Minimal,
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Extension::NotExtendable => "not_extendable",
            Extension::Extendable => "extendable",
            Extension::Minimal => "minimal",
        })
    }
}

/// Internal outcome of one classification, before it is turned into a trace row.
#[derive(Clone, Copy, Debug)]
struct Probe {
    verdict: Extension,
    exit: OracleExit,
    iterations: u64,
    product_elapsed: Option<Duration>,
}

impl Probe {
    #[inline(always)]
    fn early(verdict: Extension, exit: OracleExit) -> Self {
        Self {
            verdict,
            exit,
            iterations: 0,
            product_elapsed: None,
        }
    }
}

// ============================================================================
// ExtensionOracle
// ============================================================================

/// Extension oracle bound to one reduced hypergraph.
///
/// Internally reuses the witness and untouched-edge buffers across calls.
#[derive(Clone, Debug)]
pub struct ExtensionOracle<'g> {
    edges: &'g [VertexSet],
    num_vertices: usize,
    /// Edges not touched by `x`, minus `y`.
    untouched: Vec<VertexSet>,
    /// Witness lists, one per forced-in vertex in ascending vertex order.
    witnesses: Vec<Vec<VertexSet>>,
    /// Number of witness lists in use for the current call.
    width: usize,
    /// Vertex id -> witness list index, valid for members of the current `x`.
    slot: Vec<usize>,
    /// Odometer digits for the witness product.
    position: Vec<usize>,
    /// Scratch union of the current witness combination.
    union: VertexSet,
    collect_stats: bool,
}

impl<'g> ExtensionOracle<'g> {
    /// Creates an oracle over `graph` with statistics disabled.
    pub fn new(graph: &'g Hypergraph) -> Self {
        let n = graph.num_vertices();
        Self {
            edges: graph.edges(),
            num_vertices: n,
            untouched: Vec::new(),
            witnesses: Vec::new(),
            width: 0,
            slot: vec![0; n],
            position: Vec::new(),
            union: VertexSet::new(n),
            collect_stats: false,
        }
    }

    /// Enables or disables per-call trace rows.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Classifies `(x, y)`. When statistics are enabled, one [`OracleRecord`] is sent to `sink`.
    pub fn classify(&mut self, x: &VertexSet, y: &VertexSet, sink: &mut dyn StatsSink) -> Extension {
        debug_assert_eq!(x.len(), self.num_vertices);
        debug_assert_eq!(y.len(), self.num_vertices);
        debug_assert!(!x.intersects(y), "forced-in and forced-out sets overlap");

        if !self.collect_stats {
            return self.decide(x, y).verdict;
        }

        let started = Instant::now();
        let probe = self.decide(x, y);
        let elapsed = started.elapsed();
        sink.record_oracle(self.record(x, y, probe, elapsed));
        probe.verdict
    }

    fn decide(&mut self, x: &VertexSet, y: &VertexSet) -> Probe {
        self.untouched.clear();
        for list in &mut self.witnesses {
            list.clear();
        }
        self.width = 0;

        if x.is_empty() {
            // An edge misses the complement of `y` exactly when it lies inside `y`.
            return if self.edges.iter().any(|e| e.is_subset_of(y)) {
                Probe::early(Extension::NotExtendable, OracleExit::Infeasible)
            } else {
                Probe::early(Extension::Extendable, OracleExit::Feasible)
            };
        }

        let k = x.count();
        if self.witnesses.len() < k {
            self.witnesses.resize_with(k, Vec::new);
        }
        self.width = k;
        for (i, v) in x.iter().enumerate() {
            self.slot[v] = i;
        }

        for e in self.edges {
            match e.overlap(x) {
                Overlap::Disjoint => self.untouched.push(e.difference(y)),
                Overlap::One(v) => self.witnesses[self.slot[v]].push(e.difference(y)),
                Overlap::Many => {}
            }
        }

        let witnesses = &self.witnesses[..k];
        if witnesses.iter().any(Vec::is_empty) {
            return Probe::early(Extension::NotExtendable, OracleExit::MissingWitness);
        }
        if self.untouched.is_empty() {
            return Probe::early(Extension::Minimal, OracleExit::AlreadyMinimal);
        }

        let started = self.collect_stats.then(Instant::now);
        self.position.clear();
        self.position.resize(k, 0);
        let mut iterations = 0u64;

        loop {
            iterations += 1;
            self.union.clear();
            let mut carry = true;
            for (i, list) in witnesses.iter().enumerate() {
                self.union.union_with(&list[self.position[i]]);
                if carry {
                    self.position[i] += 1;
                    if self.position[i] == list.len() {
                        self.position[i] = 0;
                    } else {
                        carry = false;
                    }
                }
            }

            if !self.untouched.iter().any(|e| e.is_subset_of(&self.union)) {
                return Probe {
                    verdict: Extension::Extendable,
                    exit: OracleExit::ProductHit,
                    iterations,
                    product_elapsed: started.map(|s| s.elapsed()),
                };
            }
            if carry {
                break;
            }
        }

        Probe {
            verdict: Extension::NotExtendable,
            exit: OracleExit::ProductExhausted,
            iterations,
            product_elapsed: started.map(|s| s.elapsed()),
        }
    }

    fn record(&self, x: &VertexSet, y: &VertexSet, probe: Probe, elapsed: Duration) -> OracleRecord {
        let witnesses = &self.witnesses[..self.width];
        let max_iterations = if witnesses.is_empty() {
            0
        } else {
            witnesses
                .iter()
                .fold(1u64, |acc, list| acc.saturating_mul(list.len() as u64))
        };
        OracleRecord {
            x: x.clone(),
            y: y.clone(),
            verdict: probe.verdict,
            exit: probe.exit,
            elapsed,
            product_elapsed: probe.product_elapsed,
            iterations: probe.iterations,
            max_iterations,
            s_size: witnesses.len(),
            summed_s_sizes: witnesses.iter().map(Vec::len).sum(),
            s_vertices: witnesses.iter().flatten().map(VertexSet::count).sum(),
            t_size: self.untouched.len(),
            t_vertices: self.untouched.iter().map(VertexSet::count).sum(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{NoopSink, TraceTable};
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn set(n: usize, vs: &[usize]) -> VertexSet {
        VertexSet::from_vertices(n, vs.iter().copied())
    }

    fn graph(n: usize, edges: &[&[usize]]) -> Hypergraph {
        Hypergraph::from_edges_reduced(n, edges.iter().map(|e| set(n, e)))
    }

    fn random_graph<R: Rng>(rng: &mut R, n: usize, m: usize) -> Hypergraph {
        let edges: Vec<VertexSet> = (0..m)
            .map(|_| {
                let mut e = VertexSet::from_vertices(n, (0..n).filter(|_| rng.random_bool(0.3)));
                if e.is_empty() {
                    e.insert(rng.random_range(0..n));
                }
                e
            })
            .collect();
        Hypergraph::from_edges_reduced(n, edges)
    }

    /// Reference semantics: enumerate all minimal transversals by subset search, then check
    /// whether one contains `x`, avoids `y`, and (for `Extendable`) is strictly larger than `x`.
    fn brute_classify(g: &Hypergraph, x: &VertexSet, y: &VertexSet) -> Extension {
        let n = g.num_vertices();
        if !x.is_empty() && g.is_minimal_hitting_set(x) {
            return Extension::Minimal;
        }
        for mask in 0u32..(1 << n) {
            let h = VertexSet::from_vertices(n, (0..n).filter(|&v| mask & (1 << v) != 0));
            if x.is_subset_of(&h) && !h.intersects(y) && g.is_minimal_hitting_set(&h) {
                return Extension::Extendable;
            }
        }
        Extension::NotExtendable
    }

    #[test]
    fn empty_x_checks_global_feasibility() {
        let g = graph(3, &[&[0, 1], &[0, 2]]);
        let mut oracle = ExtensionOracle::new(&g);
        let none = VertexSet::new(3);
        assert_eq!(oracle.classify(&none, &none, &mut NoopSink), Extension::Extendable);
        assert_eq!(
            oracle.classify(&none, &set(3, &[0]), &mut NoopSink),
            Extension::Extendable
        );
        assert_eq!(
            oracle.classify(&none, &set(3, &[0, 1]), &mut NoopSink),
            Extension::NotExtendable
        );
    }

    #[test]
    fn star_graph_verdicts() {
        let g = graph(3, &[&[0, 1], &[0, 2]]);
        let mut oracle = ExtensionOracle::new(&g);
        let none = VertexSet::new(3);
        assert_eq!(oracle.classify(&set(3, &[0]), &none, &mut NoopSink), Extension::Minimal);
        assert_eq!(
            oracle.classify(&set(3, &[1]), &set(3, &[0]), &mut NoopSink),
            Extension::Extendable
        );
        assert_eq!(
            oracle.classify(&set(3, &[1, 2]), &set(3, &[0]), &mut NoopSink),
            Extension::Minimal
        );
        // 0 would make 1 redundant.
        assert_eq!(
            oracle.classify(&set(3, &[0, 1]), &none, &mut NoopSink),
            Extension::NotExtendable
        );
        // {1} alone cannot be completed once 2 is excluded.
        assert_eq!(
            oracle.classify(&set(3, &[1]), &set(3, &[0, 2]), &mut NoopSink),
            Extension::NotExtendable
        );
    }

    #[test]
    fn matches_brute_force_semantics() {
        let mut rng = XorShiftRng::seed_from_u64(0x0AC1E);
        for _ in 0..60 {
            let n = rng.random_range(1..8);
            let m = rng.random_range(1..8);
            let g = random_graph(&mut rng, n, m);
            let mut oracle = ExtensionOracle::new(&g);
            for _ in 0..40 {
                let mut x = VertexSet::new(n);
                let mut y = VertexSet::new(n);
                for v in 0..n {
                    match rng.random_range(0..3u32) {
                        0 => {
                            x.insert(v);
                        }
                        1 => {
                            y.insert(v);
                        }
                        _ => {}
                    }
                }
                let expected = brute_classify(&g, &x, &y);
                let got = oracle.classify(&x, &y, &mut NoopSink);
                assert_eq!(got, expected, "edges {:?}, x={x}, y={y}", g.edges());
            }
        }
    }

    #[test]
    fn statistics_do_not_change_verdicts() {
        let mut rng = XorShiftRng::seed_from_u64(0x57A7);
        let g = random_graph(&mut rng, 10, 12);
        let mut quiet = ExtensionOracle::new(&g);
        let mut loud = ExtensionOracle::new(&g).with_stats(true);
        let mut table = TraceTable::new();
        for _ in 0..200 {
            let x = VertexSet::from_vertices(10, (0..10).filter(|_| rng.random_bool(0.2)));
            let y = VertexSet::from_vertices(
                10,
                (0..10).filter(|&v| !x.contains(v) && rng.random_bool(0.3)),
            );
            assert_eq!(
                quiet.classify(&x, &y, &mut NoopSink),
                loud.classify(&x, &y, &mut table)
            );
        }
        assert_eq!(table.oracle.len(), 200);
        for row in &table.oracle {
            assert!(row.iterations <= row.max_iterations || row.max_iterations == 0);
            assert_eq!(row.s_size, row.x.count());
        }
    }

    #[test]
    fn trace_row_reports_product_exit() {
        // x = {1}: witness {1} (from {0,1} minus y={0}); untouched {2,3}. Combination {1} leaves
        // {2,3} unhit, so the product succeeds on the first try.
        let g = graph(4, &[&[0, 1], &[2, 3]]);
        let mut oracle = ExtensionOracle::new(&g).with_stats(true);
        let mut table = TraceTable::new();
        let verdict = oracle.classify(&set(4, &[1]), &set(4, &[0]), &mut table);
        assert_eq!(verdict, Extension::Extendable);
        let row = &table.oracle[0];
        assert_eq!(row.exit, OracleExit::ProductHit);
        assert_eq!(row.iterations, 1);
        assert_eq!(row.max_iterations, 1);
        assert_eq!(row.t_size, 1);
        assert!(row.product_elapsed.is_some());
    }
}
