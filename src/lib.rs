//! # Minimal Transversal Enumeration
//!
//! Enumerates all inclusion-minimal hitting sets (minimal transversals) of a finite hypergraph,
//! and derives hypergraphs from tabular data so that the transversals are exactly the minimal
//! column sets that tell every pair of rows apart.
//!
//! This crate provides:
//! - A fixed-length bit-vector [`VertexSet`](vertex_set::VertexSet) used for edges and candidates.
//! - Antichain reduction of raw edge lists.
//! - A parallel difference-edge derivation from string tables.
//! - An **extension oracle** that decides whether a partial candidate can still grow into a
//!   minimal transversal.
//! - Two backtracking enumerators built on the oracle, plus an independent level-wise brute
//!   force for cross-checking.
//!
//! ## Quick Start
//!
//! ```
//! use transversal::prelude::*;
//!
//! // Star: edges {0,1} and {0,2}.
//! let edges = [
//!     VertexSet::from_vertices(3, [0, 1]),
//!     VertexSet::from_vertices(3, [0, 2]),
//! ];
//! let graph = Hypergraph::from_edges_reduced(3, edges);
//!
//! let tr = graph.transversals().unwrap();
//! assert_eq!(tr.edge_count(), 2);
//! assert!(tr.edges().contains(&VertexSet::from_vertices(3, [0])));
//! assert!(tr.edges().contains(&VertexSet::from_vertices(3, [1, 2])));
//! ```
//!
//! ## Choosing a Strategy
//!
//! ```
//! use transversal::prelude::*;
//!
//! let mut graph = Hypergraph::parse("4\n0,1\n2,3\n").unwrap();
//! graph.reduce();
//!
//! let mut trace = TraceTable::new();
//! let config = EnumerateConfig {
//!     strategy: Strategy::Legacy,
//!     collect_hitting_set_stats: true,
//!     ..Default::default()
//! };
//! let tr = graph.enumerate(&config, &mut trace).unwrap();
//! assert_eq!(tr.edge_count(), 4);
//! assert_eq!(trace.hitting_sets.len(), 4);
//! ```
//!
//! ## Validating Reference Graphs
//!
//! ```
//! use transversal::validate::validate_bundled_graphs;
//!
//! validate_bundled_graphs().expect("all reference graphs should validate");
//! ```
//!
//! ## Modules
//!
//! - [`vertex_set`]: Bit-vector vertex sets.
//! - [`hypergraph`]: Hypergraph model, flat-file format, permutations.
//! - [`reduce`]: Antichain reduction.
//! - [`table`]: String tables and edge derivation.
//! - [`oracle`]: Extension oracle.
//! - [`enumerate`]: Enumeration strategies and configuration.
//! - [`brute_force`]: Level-wise reference enumeration.
//! - [`stats`]: Statistics sinks.
//! - [`validate`]: Result checks and bundled reference graphs.
//!
//! ## Performance Notes
//!
//! - The oracle's witness product is exponential in the size of the forced-in set; enumeration
//!   is not polynomial-delay.
//! - Only edge derivation runs in parallel. For large tables set
//!   [`DeriveConfig::workers`](table::DeriveConfig::workers) to the number of cores.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::inline_always)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod brute_force;
pub mod enumerate;
pub mod error;
pub mod hypergraph;
pub mod oracle;
pub mod reduce;
pub mod stats;
pub mod table;
pub mod validate;
pub mod vertex_set;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::enumerate::{enumerate, EnumerateConfig, Strategy};
    pub use crate::error::{HypergraphError, Result};
    pub use crate::hypergraph::{EdgeState, Hypergraph, Permutation};
    pub use crate::oracle::{Extension, ExtensionOracle};
    pub use crate::reduce::{reduce, Antichain, ReduceStrategy};
    pub use crate::stats::{NoopSink, StatsSink, TraceTable};
    pub use crate::table::{DeriveConfig, Table};
    pub use crate::vertex_set::VertexSet;
}
