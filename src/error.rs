//! Error type shared by loading, derivation, relabeling and enumeration.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors raised by hypergraph and table operations.
#[derive(Error, Debug)]
pub enum HypergraphError {
    /// A file could not be opened, read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A hypergraph file has a bad vertex count or an invalid vertex index.
    #[error("malformed graph file at line {line}: {reason}")]
    MalformedGraphFile {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// A table record has a different number of fields than the header.
    #[error("record in line {line} appears to be broken: expected {expected} fields but found {actual}")]
    MismatchedRecordWidth {
        /// 1-based line number of the offending record.
        line: u64,
        /// Header width.
        expected: usize,
        /// Width of the offending record.
        actual: usize,
    },

    /// The delimited-text reader failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A permutation does not match the vertex count it is applied to.
    #[error("cannot apply permutation of length {actual} to graph with {expected} vertices")]
    PermutationLengthMismatch {
        /// Vertex count of the hypergraph.
        expected: usize,
        /// Length of the permutation.
        actual: usize,
    },

    /// A vertex mapping is not a bijection on `0..n`.
    #[error("not a permutation: {0}")]
    InvalidPermutation(String),

    /// The brute-force validator ran past its wall-clock budget.
    #[error("brute force aborted after {elapsed:?} (budget {budget:?})")]
    TimeBudgetExceeded {
        /// Time spent before aborting.
        elapsed: Duration,
        /// Configured budget.
        budget: Duration,
    },

    /// Enumeration was requested on a hypergraph that is not an antichain.
    #[error("hypergraph must be reduced before enumerating transversals")]
    NotReduced,

    /// A table with no columns cannot define a vertex universe.
    #[error("table has no columns")]
    EmptyTable,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HypergraphError>;
