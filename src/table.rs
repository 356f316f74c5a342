//! String tables and the distinguishing-columns edge derivation.

use crate::error::{HypergraphError, Result};
use crate::reduce::Antichain;
use crate::vertex_set::VertexSet;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

// ============================================================================
// Configuration
// ============================================================================

/// Settings for [`Table::derive_edges`].
#[derive(Clone, Debug)]
pub struct DeriveConfig {
    /// Number of row slices compared in parallel.
    pub workers: usize,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        let workers = std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(4);
        Self { workers }
    }
}

// ============================================================================
// Table
// ============================================================================

/// A header row and equally wide records of string fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table with the given column names and no records.
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            records: Vec::new(),
        }
    }

    /// Creates a table from a header and records.
    ///
    /// # Errors
    /// Returns [`HypergraphError::MismatchedRecordWidth`] for the first record whose width differs
    /// from the header; line numbers count the header as line 1.
    pub fn from_records(header: Vec<String>, records: Vec<Vec<String>>) -> Result<Self> {
        let mut table = Self::new(header);
        for (i, record) in records.into_iter().enumerate() {
            table.push_record(record, i as u64 + 2)?;
        }
        Ok(table)
    }

    /// Loads delimited text whose first row is the header.
    ///
    /// At most `max_records` data rows are read when a limit is given.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be opened, and the errors of
    /// [`Self::from_reader`].
    pub fn load(path: impl AsRef<Path>, delimiter: u8, max_records: Option<usize>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| HypergraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, delimiter, max_records)?;
        info!(
            path = %path.display(),
            records = table.num_records(),
            columns = table.num_columns(),
            "loaded table"
        );
        Ok(table)
    }

    /// Reads delimited text whose first row is the header.
    ///
    /// # Errors
    /// Returns [`HypergraphError::Csv`] on malformed input and
    /// [`HypergraphError::MismatchedRecordWidth`] on a record of the wrong width.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8, max_records: Option<usize>) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);

        let mut rows = rdr.records();
        let header = match rows.next() {
            Some(row) => row?.iter().map(str::to_string).collect(),
            None => return Ok(Self::default()),
        };
        let mut table = Self::new(header);

        let limit = max_records.unwrap_or(usize::MAX);
        for row in rows {
            if table.records.len() >= limit {
                break;
            }
            let row = row?;
            let line = row.position().map_or(0, csv::Position::line);
            table.push_record(row.iter().map(str::to_string).collect(), line)?;
        }
        Ok(table)
    }

    fn push_record(&mut self, record: Vec<String>, line: u64) -> Result<()> {
        if record.len() != self.header.len() {
            return Err(HypergraphError::MismatchedRecordWidth {
                line,
                expected: self.header.len(),
                actual: record.len(),
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Column names.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows.
    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Number of data rows.
    pub fn num_records(&self) -> usize {
        self.records.len()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// Number of distinct values in `column`.
    ///
    /// # Panics
    /// Panics if `column >= self.num_columns()` and the table has records.
    pub fn num_uniques(&self, column: usize) -> usize {
        self.records
            .iter()
            .map(|r| r[column].as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Removes every column with fewer than two distinct values; returns how many were removed.
    pub fn delete_static_columns(&mut self) -> usize {
        let keep: Vec<usize> = (0..self.num_columns())
            .filter(|&c| self.num_uniques(c) > 1)
            .collect();
        let removed = self.num_columns() - keep.len();
        self.select_columns(&keep);
        debug!(removed, "deleted static columns");
        removed
    }

    /// Reorders columns by number of distinct values, ties by original position.
    ///
    /// Descending order is the exact reverse of ascending order.
    pub fn sort_columns_by_uniqueness(&mut self, ascending: bool) {
        let uniques: Vec<usize> = (0..self.num_columns()).map(|c| self.num_uniques(c)).collect();
        let mut order: Vec<usize> = (0..self.num_columns()).collect();
        order.sort_by_key(|&c| (uniques[c], c));
        if !ascending {
            order.reverse();
        }
        self.select_columns(&order);
    }

    /// Sorts records lexicographically.
    pub fn sort_records(&mut self) {
        self.records.sort();
    }

    fn select_columns(&mut self, columns: &[usize]) {
        self.header = columns.iter().map(|&c| self.header[c].clone()).collect();
        for record in &mut self.records {
            let picked: Vec<String> = columns.iter().map(|&c| std::mem::take(&mut record[c])).collect();
            *record = picked;
        }
    }

    // ------------------------------------------------------------------------
    // Edge derivation
    // ------------------------------------------------------------------------

    /// Derives one edge per pair of records: the columns on which they differ.
    ///
    /// Records are split into `config.workers` contiguous slices; each slice is compared against
    /// every later record on the rayon pool and reduced locally. The slices are then merged by
    /// exact-duplicate union only, so the result is not yet an antichain.
    pub fn derive_edges(&self, config: &DeriveConfig) -> Vec<VertexSet> {
        let len = self.records.len();
        let width = self.num_columns();
        let workers = config.workers.max(1);
        let records = &self.records;

        let partials: Vec<Vec<VertexSet>> = (0..workers)
            .into_par_iter()
            .map(|w| {
                let lo = w * len / workers;
                let hi = (w + 1) * len / workers;
                let mut local = Antichain::new();
                for i in lo..hi {
                    for j in i + 1..len {
                        local.insert(difference_edge(&records[i], &records[j], width));
                    }
                }
                local.into_edges()
            })
            .collect();

        let merged: BTreeSet<VertexSet> = partials.into_iter().flatten().collect();
        debug!(records = len, workers, edges = merged.len(), "derived difference edges");
        merged.into_iter().collect()
    }
}

/// Columns on which two records disagree.
#[inline]
fn difference_edge(a: &[String], b: &[String], width: usize) -> VertexSet {
    VertexSet::from_vertices(width, (0..width).filter(|&c| a[c] != b[c]))
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.join(","))?;
        for record in &self.records {
            writeln!(f, "{}", record.join(","))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
