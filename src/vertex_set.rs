//! Fixed-length vertex bitsets.
//!
//! Every edge, candidate transversal and forced-in/forced-out set is a [`VertexSet`] over the
//! same universe `0..n`. Storage is a `Vec<u64>`; bits at positions `>= n` are always clear so
//! that equality, ordering and population counts only ever see real vertices.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not, Sub};

const WORD_BITS: usize = u64::BITS as usize;

#[inline(always)]
const fn word_count(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

#[inline(always)]
const fn location(v: usize) -> (usize, u64) {
    (v / WORD_BITS, 1u64 << (v % WORD_BITS))
}

/// Mask of the valid bits in the last storage word of a set of length `len`.
#[inline(always)]
const fn tail_mask(len: usize) -> u64 {
    match len % WORD_BITS {
        0 => u64::MAX,
        r => (1u64 << r) - 1,
    }
}

// ============================================================================
// Overlap
// ============================================================================

/// How many vertices two sets share, capped at "more than one".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlap {
    /// The sets are disjoint.
    Disjoint,
    /// The sets share exactly this vertex.
    One(usize),
    /// The sets share at least two vertices.
    Many,
}

// ============================================================================
// VertexSet
// ============================================================================

/// A subset of the vertex universe `0..len`.
///
/// The derived ordering compares the declared length first and then the storage words, which
/// gives a canonical total order suitable for `BTreeSet` keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexSet {
    len: usize,
    words: Vec<u64>,
}

impl VertexSet {
    /// Creates an empty set over `len` vertices.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            words: vec![0u64; word_count(len)],
        }
    }

    /// Creates the set containing every vertex in `0..len`.
    pub fn full(len: usize) -> Self {
        let mut set = Self {
            len,
            words: vec![u64::MAX; word_count(len)],
        };
        set.clear_tail();
        set
    }

    /// Creates `{v}` over `len` vertices.
    pub fn singleton(len: usize, v: usize) -> Self {
        let mut set = Self::new(len);
        set.insert(v);
        set
    }

    /// Creates a set over `len` vertices from the given members.
    ///
    /// # Panics
    /// Panics if a member is `>= len`.
    pub fn from_vertices<I: IntoIterator<Item = usize>>(len: usize, vertices: I) -> Self {
        let mut set = Self::new(len);
        for v in vertices {
            set.insert(v);
        }
        set
    }

    /// Declared universe size.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn clear_tail(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last &= tail_mask(self.len);
        }
    }

    /// Returns whether `v` is a member.
    #[inline(always)]
    pub fn contains(&self, v: usize) -> bool {
        if v >= self.len {
            return false;
        }
        let (w, mask) = location(v);
        self.words[w] & mask != 0
    }

    /// Adds `v`; returns `true` if it was not already present.
    ///
    /// # Panics
    /// Panics if `v >= len`.
    #[inline]
    pub fn insert(&mut self, v: usize) -> bool {
        assert!(v < self.len, "vertex {v} outside universe of {} vertices", self.len);
        let (w, mask) = location(v);
        let before = self.words[w];
        self.words[w] = before | mask;
        before & mask == 0
    }

    /// Removes `v`; returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, v: usize) -> bool {
        if v >= self.len {
            return false;
        }
        let (w, mask) = location(v);
        let before = self.words[w];
        self.words[w] = before & !mask;
        before & mask != 0
    }

    /// Removes every member.
    #[inline]
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns a copy with `v` added.
    #[inline]
    pub fn with(&self, v: usize) -> Self {
        let mut out = self.clone();
        out.insert(v);
        out
    }

    /// Returns `true` if no vertex is a member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of members.
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    // ------------------------------------------------------------------------
    // Set algebra
    // ------------------------------------------------------------------------

    /// In-place union.
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        debug_assert_eq!(self.len, other.len, "universe mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
    }

    /// In-place intersection.
    #[inline]
    pub fn intersect_with(&mut self, other: &Self) {
        debug_assert_eq!(self.len, other.len, "universe mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= b;
        }
    }

    /// In-place difference (`self \ other`).
    #[inline]
    pub fn difference_with(&mut self, other: &Self) {
        debug_assert_eq!(self.len, other.len, "universe mismatch");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !b;
        }
    }

    /// `self ∪ other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.union_with(other);
        out
    }

    /// `self ∩ other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.intersect_with(other);
        out
    }

    /// `self \ other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = self.clone();
        out.difference_with(other);
        out
    }

    /// All vertices of the universe not in `self`.
    pub fn complement(&self) -> Self {
        let mut out = Self {
            len: self.len,
            words: self.words.iter().map(|w| !w).collect(),
        };
        out.clear_tail();
        out
    }

    /// Returns `true` if every member of `self` is also in `other`.
    #[inline]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        debug_assert_eq!(self.len, other.len, "universe mismatch");
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & !b == 0)
    }

    /// Returns `true` if the sets share at least one vertex.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        debug_assert_eq!(self.len, other.len, "universe mismatch");
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }

    /// Classifies `self ∩ other` as empty, a single vertex, or larger, without allocating.
    #[inline]
    pub fn overlap(&self, other: &Self) -> Overlap {
        debug_assert_eq!(self.len, other.len, "universe mismatch");
        let mut found = None;
        for (i, (a, b)) in self.words.iter().zip(&other.words).enumerate() {
            let common = a & b;
            if common == 0 {
                continue;
            }
            if found.is_some() || common & (common - 1) != 0 {
                return Overlap::Many;
            }
            found = Some(i * WORD_BITS + common.trailing_zeros() as usize);
        }
        match found {
            Some(v) => Overlap::One(v),
            None => Overlap::Disjoint,
        }
    }

    // ------------------------------------------------------------------------
    // Iteration
    // ------------------------------------------------------------------------

    /// Smallest member, if any.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        self.words
            .iter()
            .position(|&w| w != 0)
            .map(|i| i * WORD_BITS + self.words[i].trailing_zeros() as usize)
    }

    /// Smallest member strictly greater than `v`, if any.
    #[inline]
    pub fn next_after(&self, v: usize) -> Option<usize> {
        let start = v.checked_add(1)?;
        if start >= self.len {
            return None;
        }
        let (mut w, _) = location(start);
        let mut word = self.words[w] & (u64::MAX << (start % WORD_BITS));
        loop {
            if word != 0 {
                return Some(w * WORD_BITS + word.trailing_zeros() as usize);
            }
            w += 1;
            if w == self.words.len() {
                return None;
            }
            word = self.words[w];
        }
    }

    /// Largest member, if any.
    #[inline]
    pub fn last(&self) -> Option<usize> {
        self.words
            .iter()
            .rposition(|&w| w != 0)
            .map(|i| i * WORD_BITS + (WORD_BITS - 1 - self.words[i].leading_zeros() as usize))
    }

    /// Iterates members in ascending order.
    #[inline]
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

// ============================================================================
// Iterator
// ============================================================================

/// Ascending iterator over the members of a [`VertexSet`].
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    words: &'a [u64],
    index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.index += 1;
            if self.index >= self.words.len() {
                return None;
            }
            self.current = self.words[self.index];
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + bit)
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter()
    }
}

// ============================================================================
// Operators and formatting
// ============================================================================

impl BitOr for &VertexSet {
    type Output = VertexSet;

    fn bitor(self, rhs: &VertexSet) -> VertexSet {
        self.union(rhs)
    }
}

impl BitAnd for &VertexSet {
    type Output = VertexSet;

    fn bitand(self, rhs: &VertexSet) -> VertexSet {
        self.intersection(rhs)
    }
}

impl Sub for &VertexSet {
    type Output = VertexSet;

    fn sub(self, rhs: &VertexSet) -> VertexSet {
        self.difference(rhs)
    }
}

impl Not for &VertexSet {
    type Output = VertexSet;

    fn not(self) -> VertexSet {
        self.complement()
    }
}

/// Space-separated ascending members, e.g. `0 3 5`.
impl fmt::Display for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for v in self {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexSet<{}>", self.len)?;
        f.debug_set().entries(self.iter()).finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
