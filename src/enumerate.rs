//! Backtracking enumeration of minimal transversals.
//!
//! Vertices are decided in id order. At depth `r` the search holds a forced-in set `x` and a
//! forced-out set `y` covering `0..r`, and asks the [`ExtensionOracle`] whether each of the two
//! children can still lead to a minimal transversal.

use crate::brute_force;
use crate::error::{HypergraphError, Result};
use crate::hypergraph::Hypergraph;
use crate::oracle::{Extension, ExtensionOracle};
use crate::stats::{Discoveries, StatsSink};
use crate::vertex_set::VertexSet;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

// ============================================================================
// Configuration
// ============================================================================

/// Enumeration algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Records a transversal as soon as the oracle reports it minimal.
    #[default]
    Standard,
    /// Decides every vertex before recording; visits more nodes.
    Legacy,
    /// Level-wise subset search, independent of the oracle.
    BruteForce,
}

impl Strategy {
    /// All strategies, in cross-check order.
    pub const ALL: [Strategy; 3] = [Strategy::Standard, Strategy::Legacy, Strategy::BruteForce];

    /// Name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::Legacy => "legacy",
            Strategy::BruteForce => "brute_force",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown strategy {0:?} (expected standard, legacy or brute_force)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Strategy::Standard),
            "legacy" => Ok(Strategy::Legacy),
            "brute_force" | "brute-force" | "bruteforce" => Ok(Strategy::BruteForce),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Per-call enumeration settings.
#[derive(Clone, Debug)]
pub struct EnumerateConfig {
    /// Algorithm to run.
    pub strategy: Strategy,
    /// Send one row per oracle call to the sink.
    pub collect_oracle_stats: bool,
    /// Send one row per discovered transversal to the sink.
    pub collect_hitting_set_stats: bool,
    /// Wall-clock limit for [`Strategy::BruteForce`].
    pub brute_force_budget: Duration,
}

impl Default for EnumerateConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Standard,
            collect_oracle_stats: false,
            collect_hitting_set_stats: false,
            brute_force_budget: Duration::from_secs(12 * 60 * 60),
        }
    }
}

impl EnumerateConfig {
    /// Default settings with the given strategy.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Enumerates all minimal transversals of a reduced hypergraph.
///
/// A hypergraph without edges has exactly one minimal transversal, the empty set.
///
/// # Errors
/// Returns [`HypergraphError::NotReduced`] on a raw hypergraph and
/// [`HypergraphError::TimeBudgetExceeded`] if brute force runs out of time.
pub fn enumerate(
    graph: &Hypergraph,
    config: &EnumerateConfig,
    sink: &mut dyn StatsSink,
) -> Result<Vec<VertexSet>> {
    if !graph.is_reduced() {
        return Err(HypergraphError::NotReduced);
    }

    let started = Instant::now();
    let n = graph.num_vertices();
    info!(
        strategy = %config.strategy,
        vertices = n,
        edges = graph.edge_count(),
        "enumerating minimal transversals"
    );

    let found = if graph.edge_count() == 0 {
        let mut found = Discoveries::new(sink, config.collect_hitting_set_stats);
        found.push(VertexSet::new(n));
        found.into_sets()
    } else {
        match config.strategy {
            Strategy::Standard | Strategy::Legacy => {
                let mut search = Search {
                    oracle: ExtensionOracle::new(graph).with_stats(config.collect_oracle_stats),
                    found: Discoveries::new(sink, config.collect_hitting_set_stats),
                    n,
                    nodes: 0,
                };
                let none = VertexSet::new(n);
                if config.strategy == Strategy::Standard {
                    search.standard(&none, &none, 0);
                } else {
                    search.legacy(&none, &none, 0);
                }
                debug!(nodes = search.nodes, "search finished");
                search.found.into_sets()
            }
            Strategy::BruteForce => brute_force::minimal_hitting_sets(
                graph,
                config.brute_force_budget,
                sink,
                config.collect_hitting_set_stats,
            )?,
        }
    };

    info!(
        transversals = found.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "enumeration complete"
    );
    Ok(found)
}

// ============================================================================
// Search
// ============================================================================

struct Search<'g, 's> {
    oracle: ExtensionOracle<'g>,
    found: Discoveries<'s>,
    n: usize,
    nodes: u64,
}

impl Search<'_, '_> {
    #[inline(always)]
    fn classify(&mut self, x: &VertexSet, y: &VertexSet) -> Extension {
        self.oracle.classify(x, y, self.found.sink())
    }

    /// Branch on vertex `r`; a minimal `x ∪ {r}` is recorded without descending further.
    fn standard(&mut self, x: &VertexSet, y: &VertexSet, r: usize) {
        self.nodes += 1;
        if r == self.n {
            return;
        }

        let xv = x.with(r);
        match self.classify(&xv, y) {
            Extension::Minimal => self.found.push(xv),
            Extension::Extendable => self.standard(&xv, y, r + 1),
            Extension::NotExtendable => {}
        }

        let yv = y.with(r);
        if self.classify(x, &yv) != Extension::NotExtendable {
            self.standard(x, &yv, r + 1);
        }
    }

    /// Branch on every vertex; `x` is recorded only once all vertices are decided.
    fn legacy(&mut self, x: &VertexSet, y: &VertexSet, r: usize) {
        self.nodes += 1;
        if r == self.n {
            self.found.push(x.clone());
            return;
        }

        let xv = x.with(r);
        if self.classify(&xv, y) != Extension::NotExtendable {
            self.legacy(&xv, y, r + 1);
        }

        let yv = y.with(r);
        if self.classify(x, &yv) != Extension::NotExtendable {
            self.legacy(x, &yv, r + 1);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
