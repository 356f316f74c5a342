//! Hypergraph model: vertex universe, edge list, flat-file format and vertex relabeling.

use crate::enumerate::{enumerate, EnumerateConfig};
use crate::error::{HypergraphError, Result};
use crate::reduce::{reduce_with, ReduceStrategy};
use crate::stats::{NoopSink, StatsSink};
use crate::table::{DeriveConfig, Table};
use crate::vertex_set::VertexSet;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Largest vertex count accepted from a graph file.
pub const MAX_VERTICES: usize = 1 << 24;

// ============================================================================
// Permutation
// ============================================================================

/// A bijection on vertex ids: vertex `i` is relabeled to `self[i]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    /// Validates that `map` is a bijection on `0..map.len()`.
    ///
    /// # Errors
    /// Returns [`HypergraphError::InvalidPermutation`] on an out-of-range or repeated image.
    pub fn new(map: Vec<usize>) -> Result<Self> {
        let n = map.len();
        let mut seen = vec![false; n];
        for (i, &target) in map.iter().enumerate() {
            if target >= n {
                return Err(HypergraphError::InvalidPermutation(format!(
                    "image {target} of vertex {i} is outside 0..{n}"
                )));
            }
            if std::mem::replace(&mut seen[target], true) {
                return Err(HypergraphError::InvalidPermutation(format!(
                    "image {target} is used twice"
                )));
            }
        }
        Ok(Self(map))
    }

    /// The identity on `0..n`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// `i ↦ n - 1 - i`.
    pub fn reversed(n: usize) -> Self {
        Self((0..n).rev().collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut map: Vec<usize> = (0..n).collect();
        map.shuffle(rng);
        Self(map)
    }

    /// Number of vertices permuted.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the permutation of the empty universe.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// New label of vertex `v`.
    #[inline(always)]
    pub fn image(&self, v: usize) -> usize {
        self.0[v]
    }

    /// The underlying mapping.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The inverse bijection.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.0.len()];
        for (i, &target) in self.0.iter().enumerate() {
            inv[target] = i;
        }
        Self(inv)
    }

    /// Relabels every member of `set`.
    pub fn apply(&self, set: &VertexSet) -> VertexSet {
        debug_assert_eq!(set.len(), self.0.len());
        VertexSet::from_vertices(set.len(), set.iter().map(|v| self.0[v]))
    }

    /// The relabeling that applies `self` first and `next` second.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn then(&self, next: &Permutation) -> Self {
        assert_eq!(self.len(), next.len(), "permutation length mismatch");
        Self(self.0.iter().map(|&v| next.0[v]).collect())
    }
}

/// Parses comma- or space-separated images, e.g. `2,3,0,1`.
impl FromStr for Permutation {
    type Err = HypergraphError;

    fn from_str(s: &str) -> Result<Self> {
        let map = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<usize>().map_err(|_| {
                    HypergraphError::InvalidPermutation(format!("invalid image {t:?}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(map)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Hypergraph
// ============================================================================

/// Whether the edge list is known to be an antichain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeState {
    /// May contain duplicate or dominated edges.
    Raw,
    /// Pairwise distinct, no edge contains another.
    Reduced,
}

/// A vertex universe `0..n` and a list of edges over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hypergraph {
    num_vertices: usize,
    edges: Vec<VertexSet>,
    state: EdgeState,
}

impl Hypergraph {
    /// Creates a raw hypergraph.
    ///
    /// # Panics
    /// Panics if an edge is over a different universe size.
    pub fn new(num_vertices: usize, edges: Vec<VertexSet>) -> Self {
        for e in &edges {
            assert_eq!(e.len(), num_vertices, "edge over wrong universe");
        }
        Self {
            num_vertices,
            edges,
            state: EdgeState::Raw,
        }
    }

    /// Creates a hypergraph and reduces it immediately.
    pub fn from_edges_reduced<I: IntoIterator<Item = VertexSet>>(num_vertices: usize, edges: I) -> Self {
        let mut h = Self::new(num_vertices, edges.into_iter().collect());
        h.reduce();
        h
    }

    /// Wraps edges the caller guarantees to form an antichain.
    pub(crate) fn from_antichain(num_vertices: usize, edges: Vec<VertexSet>) -> Self {
        debug_assert!(crate::reduce::is_antichain(&edges));
        Self {
            num_vertices,
            edges,
            state: EdgeState::Reduced,
        }
    }

    /// Derives the distinguishing-columns hypergraph of `table` and reduces it.
    ///
    /// Vertex `c` is column `c`; every pair of records contributes the set of columns on which
    /// they differ.
    ///
    /// # Errors
    /// Returns [`HypergraphError::EmptyTable`] if the table has no columns.
    pub fn from_table(table: &Table, config: &DeriveConfig) -> Result<Self> {
        let width = table.num_columns();
        if width == 0 {
            return Err(HypergraphError::EmptyTable);
        }
        let raw = table.derive_edges(config);
        debug!(raw_edges = raw.len(), "reducing derived edges");
        let mut h = Self::new(width, raw);
        h.reduce();
        Ok(h)
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// The edges, in storage order.
    #[inline(always)]
    pub fn edges(&self) -> &[VertexSet] {
        &self.edges
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The edges as an ordered set, for order-independent comparison.
    pub fn edge_set(&self) -> BTreeSet<VertexSet> {
        self.edges.iter().cloned().collect()
    }

    /// Current invariant state.
    #[inline]
    pub fn state(&self) -> EdgeState {
        self.state
    }

    /// Returns `true` if the edges are known to form an antichain.
    #[inline]
    pub fn is_reduced(&self) -> bool {
        self.state == EdgeState::Reduced
    }

    /// Consumes the hypergraph, returning its edges.
    pub fn into_edges(self) -> Vec<VertexSet> {
        self.edges
    }

    // ------------------------------------------------------------------------
    // Hitting sets
    // ------------------------------------------------------------------------

    /// Returns `true` if `h` intersects every edge.
    #[inline]
    pub fn is_hitting_set(&self, h: &VertexSet) -> bool {
        self.edges.iter().all(|e| e.intersects(h))
    }

    /// Returns `true` if `h` is a hitting set and no single vertex can be dropped from it.
    ///
    /// Hitting sets are closed upwards, so single-vertex removal suffices for minimality.
    pub fn is_minimal_hitting_set(&self, h: &VertexSet) -> bool {
        if !self.is_hitting_set(h) {
            return false;
        }
        let mut smaller = h.clone();
        for v in h {
            smaller.remove(v);
            if self.is_hitting_set(&smaller) {
                return false;
            }
            smaller.insert(v);
        }
        true
    }

    // ------------------------------------------------------------------------
    // Reduction
    // ------------------------------------------------------------------------

    /// Reduces the edge list to an antichain in place.
    pub fn reduce(&mut self) {
        self.reduce_with(ReduceStrategy::default());
    }

    /// Reduces with an explicit strategy.
    pub fn reduce_with(&mut self, strategy: ReduceStrategy) {
        let before = self.edges.len();
        self.edges = reduce_with(std::mem::take(&mut self.edges), strategy);
        self.state = EdgeState::Reduced;
        debug!(before, after = self.edges.len(), ?strategy, "reduced hypergraph");
    }

    // ------------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------------

    /// Enumerates all minimal transversals with the configured strategy.
    ///
    /// The result is itself a reduced hypergraph over the same universe.
    ///
    /// # Errors
    /// Returns [`HypergraphError::NotReduced`] on a raw hypergraph, and
    /// [`HypergraphError::TimeBudgetExceeded`] if brute force runs out of time.
    pub fn enumerate(&self, config: &EnumerateConfig, sink: &mut dyn StatsSink) -> Result<Self> {
        let sets = enumerate(self, config, sink)?;
        Ok(Self::from_antichain(self.num_vertices, sets))
    }

    /// Enumerates all minimal transversals with the default configuration.
    ///
    /// # Errors
    /// Returns [`HypergraphError::NotReduced`] on a raw hypergraph.
    pub fn transversals(&self) -> Result<Self> {
        self.enumerate(&EnumerateConfig::default(), &mut NoopSink)
    }

    // ------------------------------------------------------------------------
    // Relabeling
    // ------------------------------------------------------------------------

    /// Relabels every edge through `p`.
    ///
    /// # Errors
    /// Returns [`HypergraphError::PermutationLengthMismatch`] if `p` does not cover exactly the
    /// vertex universe; the hypergraph is left unchanged in that case.
    pub fn permute(&mut self, p: &Permutation) -> Result<()> {
        if p.len() != self.num_vertices {
            let err = HypergraphError::PermutationLengthMismatch {
                expected: self.num_vertices,
                actual: p.len(),
            };
            warn!("{err}");
            return Err(err);
        }
        for e in &mut self.edges {
            *e = p.apply(e);
        }
        Ok(())
    }

    /// Relabels vertex `i` as `n - 1 - i`.
    pub fn reverse_vertex_order(&mut self) {
        let p = Permutation::reversed(self.num_vertices);
        self.edges.iter_mut().for_each(|e| *e = p.apply(e));
    }

    /// Number of edges containing each vertex.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.num_vertices];
        for e in &self.edges {
            for v in e {
                degrees[v] += 1;
            }
        }
        degrees
    }

    /// The permutation that sorts vertices by descending degree, ties by ascending id.
    pub fn degree_order(&self) -> Permutation {
        let degrees = self.degrees();
        let mut ranked: Vec<usize> = (0..self.num_vertices).collect();
        ranked.sort_by_key(|&v| (Reverse(degrees[v]), v));
        let mut map = vec![0; self.num_vertices];
        for (rank, &v) in ranked.iter().enumerate() {
            map[v] = rank;
        }
        Permutation(map)
    }

    /// Relabels vertices so that vertex 0 has the highest degree.
    pub fn order_by_degree(&mut self) {
        let p = self.degree_order();
        self.edges.iter_mut().for_each(|e| *e = p.apply(e));
    }

    /// Union of all edges.
    pub fn vertex_union(&self) -> VertexSet {
        let mut union = VertexSet::new(self.num_vertices);
        for e in &self.edges {
            union.union_with(e);
        }
        union
    }

    /// Returns `true` if some edge has no vertex; such a hypergraph has no transversal.
    pub fn has_empty_edge(&self) -> bool {
        self.edges.iter().any(VertexSet::is_empty)
    }

    /// Removes vertices that lie in no edge and renumbers the rest ascending; returns how many
    /// were removed.
    ///
    /// The vertex universe never becomes empty: if no edge has a vertex, nothing is removed.
    pub fn drop_unused_vertices(&mut self) -> usize {
        let used = self.vertex_union();
        if used.is_empty() {
            warn!(
                vertices = self.num_vertices,
                "no edge has a vertex; keeping the vertex universe"
            );
            return 0;
        }
        let mut new_id = vec![usize::MAX; self.num_vertices];
        for (i, v) in used.iter().enumerate() {
            new_id[v] = i;
        }
        let kept = used.count();
        debug!(from = self.num_vertices, to = kept, "dropping unused vertices");
        for e in &mut self.edges {
            *e = VertexSet::from_vertices(kept, e.iter().map(|v| new_id[v]));
        }
        let removed = self.num_vertices - kept;
        self.num_vertices = kept;
        removed
    }

    // ------------------------------------------------------------------------
    // Flat-file format
    // ------------------------------------------------------------------------

    /// Parses the flat edge-list format.
    ///
    /// Line 1 holds the vertex count; every other non-blank line lists one edge as
    /// comma-separated vertex indices. Exact duplicate edges collapse; no further reduction is
    /// applied, so the result is raw.
    ///
    /// # Errors
    /// Returns [`HypergraphError::MalformedGraphFile`] for a missing, non-positive or oversized
    /// (above [`MAX_VERTICES`]) vertex count and for any index that is not an integer in `0..n`.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate();
        let header = lines
            .next()
            .map(|(_, l)| l.trim())
            .ok_or_else(|| malformed(1, "missing vertex count".to_string()))?;
        let n = match header.parse::<i64>() {
            Ok(n) if n > MAX_VERTICES as i64 => {
                return Err(malformed(
                    1,
                    format!("vertex count {n} exceeds the limit of {MAX_VERTICES}"),
                ))
            }
            Ok(n) if n > 0 => n as usize,
            Ok(n) => return Err(malformed(1, format!("vertex count must be positive, got {n}"))),
            Err(_) => return Err(malformed(1, format!("invalid vertex count {header:?}"))),
        };

        let mut edges = BTreeSet::new();
        for (idx, line) in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut e = VertexSet::new(n);
            for token in line.split(',') {
                let token = token.trim();
                let v = token
                    .parse::<i64>()
                    .map_err(|_| malformed(idx + 1, format!("invalid vertex index {token:?}")))?;
                if v < 0 || v as usize >= n {
                    return Err(malformed(
                        idx + 1,
                        format!("vertex index {v} outside 0..{n}"),
                    ));
                }
                e.insert(v as usize);
            }
            edges.insert(e);
        }

        Ok(Self::new(n, edges.into_iter().collect()))
    }

    /// Loads a hypergraph file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a parse error as in [`Self::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HypergraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Writes the flat edge-list format; returns the number of empty edges skipped.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<usize> {
        writeln!(w, "{}", self.num_vertices)?;
        let mut skipped = 0;
        for e in &self.edges {
            if e.is_empty() {
                warn!("graph contains an empty edge; it is not written");
                skipped += 1;
                continue;
            }
            let mut first = true;
            for v in e {
                if !first {
                    w.write_all(b",")?;
                }
                write!(w, "{v}")?;
                first = false;
            }
            writeln!(w)?;
        }
        Ok(skipped)
    }

    /// Saves the hypergraph to `path`; returns the number of empty edges skipped.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let io_err = |source| HypergraphError::Io {
            path: path.to_path_buf(),
            source,
        };
        let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
        let skipped = self.write_to(&mut w).map_err(io_err)?;
        w.flush().map_err(io_err)?;
        Ok(skipped)
    }
}

fn malformed(line: usize, reason: String) -> HypergraphError {
    HypergraphError::MalformedGraphFile { line, reason }
}

/// One edge per line, members space-separated.
impl fmt::Display for Hypergraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.edges.len().saturating_sub(1).to_string().len();
        for (i, e) in self.edges.iter().enumerate() {
            writeln!(f, "{i:>width$}: {e}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    fn set(n: usize, vs: &[usize]) -> VertexSet {
        VertexSet::from_vertices(n, vs.iter().copied())
    }

    fn edges_of(h: &Hypergraph) -> BTreeSet<Vec<usize>> {
        h.edges().iter().map(|e| e.iter().collect()).collect()
    }

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parse_dedups_exact_duplicates_only() {
        let h = Hypergraph::parse("4\n0,1\n1,0\n0,1,2\n\n3\n").unwrap();
        assert_eq!(h.num_vertices(), 4);
        assert_eq!(h.state(), EdgeState::Raw);
        assert_eq!(
            edges_of(&h),
            BTreeSet::from([vec![0, 1], vec![0, 1, 2], vec![3]])
        );
    }

    #[test]
    fn parse_rejects_bad_vertex_count() {
        for text in ["0\n0\n", "-3\n", "abc\n", "", "9223372036854775807\n0\n", "16777217\n"] {
            let err = Hypergraph::parse(text).unwrap_err();
            assert!(
                matches!(err, HypergraphError::MalformedGraphFile { line: 1, .. }),
                "{text:?} -> {err}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range_index() {
        let err = Hypergraph::parse("3\n0,1\n1,3\n").unwrap_err();
        assert!(matches!(err, HypergraphError::MalformedGraphFile { line: 3, .. }));
        let err = Hypergraph::parse("3\n-1\n").unwrap_err();
        assert!(matches!(err, HypergraphError::MalformedGraphFile { line: 2, .. }));
        let err = Hypergraph::parse("3\n1,x\n").unwrap_err();
        assert!(matches!(err, HypergraphError::MalformedGraphFile { line: 2, .. }));
    }

    #[test]
    fn write_and_parse_roundtrip() {
        let h = Hypergraph::from_edges_reduced(5, [set(5, &[0, 4]), set(5, &[1, 2, 3])]);
        let mut buf = Vec::new();
        assert_eq!(h.write_to(&mut buf).unwrap(), 0);
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("5\n"));
        let mut back = Hypergraph::parse(&text).unwrap();
        back.reduce();
        assert_eq!(back.edge_set(), h.edge_set());
    }

    #[test]
    fn write_skips_empty_edges() {
        let h = Hypergraph::new(3, vec![set(3, &[0]), VertexSet::new(3), set(3, &[1, 2])]);
        let mut buf = Vec::new();
        assert_eq!(h.write_to(&mut buf).unwrap(), 1);
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n0\n1,2\n");
    }

    // -------------------------------------------------------------------------
    // Relabeling
    // -------------------------------------------------------------------------

    #[test]
    fn permutation_rejects_non_bijections() {
        assert!(Permutation::new(vec![0, 2, 1]).is_ok());
        assert!(matches!(
            Permutation::new(vec![0, 0, 1]),
            Err(HypergraphError::InvalidPermutation(_))
        ));
        assert!(matches!(
            Permutation::new(vec![0, 3, 1]),
            Err(HypergraphError::InvalidPermutation(_))
        ));
    }

    #[test]
    fn permutation_inverse_roundtrips() {
        let mut rng = XorShiftRng::seed_from_u64(0x9E);
        let p = Permutation::random(17, &mut rng);
        let s = VertexSet::from_vertices(17, [0, 5, 16]);
        assert_eq!(p.inverse().apply(&p.apply(&s)), s);
        assert_eq!(p.len(), 17);
        assert_eq!(p.then(&p.inverse()), Permutation::identity(17));
    }

    #[test]
    fn permutation_parses_from_image_list() {
        let p: Permutation = "2,3,0,1".parse().unwrap();
        assert_eq!(p.as_slice(), &[2, 3, 0, 1]);
        assert_eq!(" 1 0 ".parse::<Permutation>().unwrap(), Permutation::reversed(2));
        for bad in ["0,0", "0,2", "1,x"] {
            assert!(matches!(
                bad.parse::<Permutation>(),
                Err(HypergraphError::InvalidPermutation(_))
            ));
        }
    }

    #[test]
    fn composed_permutation_matches_sequential_relabeling() {
        let mut rng = XorShiftRng::seed_from_u64(0xC0);
        let a = Permutation::random(9, &mut rng);
        let b = Permutation::random(9, &mut rng);
        let s = VertexSet::from_vertices(9, [1, 4, 8]);
        assert_eq!(a.then(&b).apply(&s), b.apply(&a.apply(&s)));
    }

    #[test]
    fn permute_remaps_bits() {
        let mut h = Hypergraph::from_edges_reduced(3, [set(3, &[0, 1]), set(3, &[2])]);
        let p = Permutation::new(vec![2, 0, 1]).unwrap();
        h.permute(&p).unwrap();
        assert_eq!(edges_of(&h), BTreeSet::from([vec![0, 2], vec![1]]));
        assert!(h.is_reduced());
    }

    #[test]
    fn permute_with_wrong_length_leaves_graph_untouched() {
        let mut h = Hypergraph::from_edges_reduced(3, [set(3, &[0, 1]), set(3, &[2])]);
        let before = h.clone();
        let err = h.permute(&Permutation::identity(4)).unwrap_err();
        assert!(matches!(
            err,
            HypergraphError::PermutationLengthMismatch { expected: 3, actual: 4 }
        ));
        assert_eq!(h, before);
    }

    #[test]
    fn reverse_vertex_order_mirrors_ids() {
        let mut h = Hypergraph::new(4, vec![set(4, &[0, 1]), set(4, &[3])]);
        h.reverse_vertex_order();
        assert_eq!(edges_of(&h), BTreeSet::from([vec![2, 3], vec![0]]));
    }

    #[test]
    fn order_by_degree_sorts_descending_with_stable_ties() {
        // degrees: v0=1, v1=3, v2=1, v3=2
        let mut h = Hypergraph::new(
            4,
            vec![set(4, &[1, 3]), set(4, &[0, 1]), set(4, &[1, 2, 3])],
        );
        assert_eq!(h.degrees(), vec![1, 3, 1, 2]);
        assert_eq!(h.degree_order().as_slice(), &[2, 0, 3, 1]);
        h.order_by_degree();
        assert_eq!(h.degrees(), vec![3, 2, 1, 1]);
    }

    #[test]
    fn drop_unused_vertices_renumbers_ascending() {
        let mut h = Hypergraph::new(6, vec![set(6, &[1, 4]), set(6, &[4, 5])]);
        assert_eq!(h.drop_unused_vertices(), 3);
        assert_eq!(h.num_vertices(), 3);
        assert_eq!(edges_of(&h), BTreeSet::from([vec![0, 1], vec![1, 2]]));
        assert!(h.edges().iter().all(|e| e.len() == 3));
    }

    #[test]
    fn drop_unused_vertices_keeps_universe_when_only_empty_edges() {
        let mut h = Hypergraph::from_edges_reduced(2, [VertexSet::new(2), set(2, &[0])]);
        assert!(h.has_empty_edge());
        assert_eq!(h.drop_unused_vertices(), 0);
        assert_eq!(h.num_vertices(), 2);
        assert_eq!(h.edges(), &[VertexSet::new(2)][..]);

        let mut buf = Vec::new();
        assert_eq!(h.write_to(&mut buf).unwrap(), 1);
        let back = Hypergraph::parse(&String::from_utf8(buf).unwrap()).unwrap();
        assert_eq!(back.num_vertices(), 2);
    }

    // -------------------------------------------------------------------------
    // Hitting sets
    // -------------------------------------------------------------------------

    #[test]
    fn minimal_hitting_set_check() {
        let h = Hypergraph::from_edges_reduced(3, [set(3, &[0, 1]), set(3, &[0, 2])]);
        assert!(h.is_minimal_hitting_set(&set(3, &[0])));
        assert!(h.is_minimal_hitting_set(&set(3, &[1, 2])));
        assert!(!h.is_minimal_hitting_set(&set(3, &[0, 1])));
        assert!(!h.is_minimal_hitting_set(&set(3, &[1])));
    }

    #[test]
    fn enumerate_refuses_raw_graph() {
        let h = Hypergraph::new(2, vec![set(2, &[0]), set(2, &[0, 1])]);
        assert!(matches!(h.transversals(), Err(HypergraphError::NotReduced)));
    }

    #[test]
    fn display_numbers_edges() {
        let h = Hypergraph::new(3, vec![set(3, &[0, 2]), set(3, &[1])]);
        assert_eq!(h.to_string(), "0: 0 2\n1: 1\n");
    }
}
