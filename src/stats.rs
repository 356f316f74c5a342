//! Observational statistics for the oracle and the enumerators.
//!
//! Recording is switched on per call through [`EnumerateConfig`](crate::enumerate::EnumerateConfig)
//! flags; rows are handed to a [`StatsSink`]. Nothing recorded here feeds back into a decision.

use crate::oracle::Extension;
use crate::vertex_set::VertexSet;
use std::time::{Duration, Instant};

// ============================================================================
// Records
// ============================================================================

/// Which step of the oracle produced its verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OracleExit {
    /// Nothing forced in, and the allowed vertices hit every edge.
    Feasible,
    /// Nothing forced in, and some edge lies entirely in the forced-out set.
    Infeasible,
    /// A forced-in vertex has no edge that depends on it alone.
    MissingWitness,
    /// The forced-in set already hits every edge.
    AlreadyMinimal,
    /// A witness combination left every untouched edge unhit.
    ProductHit,
    /// Every witness combination covered some untouched edge.
    ProductExhausted,
}

impl OracleExit {
    /// Stable short label used in trace rows.
    pub fn label(self) -> &'static str {
        match self {
            OracleExit::Feasible => "feasible",
            OracleExit::Infeasible => "infeasible",
            OracleExit::MissingWitness => "missing_witness",
            OracleExit::AlreadyMinimal => "already_minimal",
            OracleExit::ProductHit => "product_hit",
            OracleExit::ProductExhausted => "product_exhausted",
        }
    }
}

/// One oracle invocation.
#[derive(Clone, Debug)]
pub struct OracleRecord {
    /// Forced-in vertices.
    pub x: VertexSet,
    /// Forced-out vertices.
    pub y: VertexSet,
    /// Returned classification.
    pub verdict: Extension,
    /// Step that produced the verdict.
    pub exit: OracleExit,
    /// Wall time of the whole call.
    pub elapsed: Duration,
    /// Wall time spent in the witness product, if it was entered.
    pub product_elapsed: Option<Duration>,
    /// Witness combinations actually tried.
    pub iterations: u64,
    /// Size of the full witness product (saturating).
    pub max_iterations: u64,
    /// Number of witness lists (one per forced-in vertex).
    pub s_size: usize,
    /// Total number of witness edges.
    pub summed_s_sizes: usize,
    /// Total number of vertices across witness edges.
    pub s_vertices: usize,
    /// Number of edges untouched by the forced-in set.
    pub t_size: usize,
    /// Total number of vertices across untouched edges.
    pub t_vertices: usize,
}

/// One minimal transversal as it was found.
#[derive(Clone, Debug)]
pub struct HittingSetRecord {
    /// The transversal.
    pub set: VertexSet,
    /// Time since the previous transversal (or since the run started).
    pub delay: Duration,
}

// ============================================================================
// Sinks
// ============================================================================

/// Receiver for trace rows. Both methods default to discarding the row.
pub trait StatsSink {
    /// Receives one oracle row.
    fn record_oracle(&mut self, _record: OracleRecord) {}

    /// Receives one transversal row.
    fn record_hitting_set(&mut self, _record: HittingSetRecord) {}
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl StatsSink for NoopSink {}

/// Keeps every row in memory.
#[derive(Clone, Debug, Default)]
pub struct TraceTable {
    /// Oracle rows, in call order.
    pub oracle: Vec<OracleRecord>,
    /// Transversal rows, in discovery order.
    pub hitting_sets: Vec<HittingSetRecord>,
}

impl TraceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all rows.
    pub fn clear(&mut self) {
        self.oracle.clear();
        self.hitting_sets.clear();
    }

    /// Renders the oracle rows as a header followed by string rows.
    pub fn oracle_rows(&self) -> Vec<Vec<String>> {
        let header = [
            "x",
            "y",
            "verdict",
            "exit",
            "total_time_ns",
            "product_time_ns",
            "actual_iteration_count",
            "maximum_iteration_count",
            "s_size",
            "summed_sx_sizes",
            "total_number_of_vertices_in_s",
            "t_size",
            "total_number_of_vertices_in_t",
        ];
        let mut rows = vec![header.iter().map(ToString::to_string).collect()];
        for r in &self.oracle {
            rows.push(vec![
                r.x.to_string(),
                r.y.to_string(),
                r.verdict.to_string(),
                r.exit.label().to_string(),
                r.elapsed.as_nanos().to_string(),
                r.product_elapsed
                    .map(|d| d.as_nanos().to_string())
                    .unwrap_or_default(),
                r.iterations.to_string(),
                r.max_iterations.to_string(),
                r.s_size.to_string(),
                r.summed_s_sizes.to_string(),
                r.s_vertices.to_string(),
                r.t_size.to_string(),
                r.t_vertices.to_string(),
            ]);
        }
        rows
    }

    /// Renders the transversal rows as a header followed by string rows.
    pub fn hitting_set_rows(&self) -> Vec<Vec<String>> {
        let mut rows = vec![vec![
            "minimal_hitting_set".to_string(),
            "delay_ns".to_string(),
        ]];
        for r in &self.hitting_sets {
            rows.push(vec![r.set.to_string(), r.delay.as_nanos().to_string()]);
        }
        rows
    }
}

impl StatsSink for TraceTable {
    fn record_oracle(&mut self, record: OracleRecord) {
        self.oracle.push(record);
    }

    fn record_hitting_set(&mut self, record: HittingSetRecord) {
        self.hitting_sets.push(record);
    }
}

// ============================================================================
// Discovery collector
// ============================================================================

/// Accumulates transversals and, when enabled, emits a timed row for each.
pub(crate) struct Discoveries<'s> {
    found: Vec<VertexSet>,
    sink: &'s mut dyn StatsSink,
    trace: bool,
    last: Instant,
}

impl<'s> Discoveries<'s> {
    pub(crate) fn new(sink: &'s mut dyn StatsSink, trace: bool) -> Self {
        Self {
            found: Vec::new(),
            sink,
            trace,
            last: Instant::now(),
        }
    }

    pub(crate) fn push(&mut self, set: VertexSet) {
        if self.trace {
            let now = Instant::now();
            self.sink.record_hitting_set(HittingSetRecord {
                set: set.clone(),
                delay: now - self.last,
            });
            self.last = now;
        }
        self.found.push(set);
    }

    pub(crate) fn as_slice(&self) -> &[VertexSet] {
        &self.found
    }

    pub(crate) fn sink(&mut self) -> &mut dyn StatsSink {
        &mut *self.sink
    }

    pub(crate) fn into_sets(self) -> Vec<VertexSet> {
        self.found
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_accepts_rows() {
        let mut sink = NoopSink;
        sink.record_hitting_set(HittingSetRecord {
            set: VertexSet::new(3),
            delay: Duration::ZERO,
        });
    }

    #[test]
    fn discoveries_trace_only_when_enabled() {
        let mut table = TraceTable::new();
        {
            let mut quiet = Discoveries::new(&mut table, false);
            quiet.push(VertexSet::singleton(2, 0));
            assert_eq!(quiet.as_slice().len(), 1);
        }
        assert!(table.hitting_sets.is_empty());

        let mut loud = Discoveries::new(&mut table, true);
        loud.push(VertexSet::singleton(2, 1));
        loud.push(VertexSet::singleton(2, 0));
        let sets = loud.into_sets();
        assert_eq!(sets.len(), 2);
        assert_eq!(table.hitting_sets.len(), 2);
        assert_eq!(table.hitting_sets[0].set, VertexSet::singleton(2, 1));
    }

    #[test]
    fn hitting_set_rows_have_header() {
        let mut table = TraceTable::new();
        table.record_hitting_set(HittingSetRecord {
            set: VertexSet::from_vertices(4, [1, 3]),
            delay: Duration::from_nanos(42),
        });
        let rows = table.hitting_set_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "minimal_hitting_set");
        assert_eq!(rows[1], vec!["1 3".to_string(), "42".to_string()]);
        table.clear();
        assert_eq!(table.hitting_set_rows().len(), 1);
    }
}
