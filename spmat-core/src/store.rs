//! Sparse coordinate store
//!
//! [`SparseStore`] maps `(row, col)` coordinates to non-zero values. It holds
//! three invariants at every point of its life:
//!
//! - no stored value is zero; an absent coordinate reads as zero
//! - every stored coordinate lies inside the declared dimensions
//! - every coordinate appears at most once
//!
//! The entry map is ordered, so iteration is always row-major without a sort.

use alloc::collections::btree_map::{self, BTreeMap};
use core::iter::FusedIterator;

use crate::{MatrixElement, Result, SparseMatrix, SpmatError};

/// Sparse matrix of integer elements with fixed dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseStore<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    entries: BTreeMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseStore<T> {
    /// Create an empty store with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: BTreeMap::new(),
        }
    }

    /// Build a store from `(row, col, value)` triples
    ///
    /// Every triple goes through [`set_element`](Self::set_element): zeros are
    /// dropped, later triples overwrite earlier ones at the same coordinate,
    /// and the first out-of-range coordinate aborts the build.
    pub fn from_entries<I>(rows: usize, cols: usize, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut store = Self::new(rows, cols);
        for (row, col, value) in entries {
            store.set_element(row, col, value)?;
        }
        Ok(store)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no entry is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the value at `(row, col)`, zero when nothing is stored
    pub fn get_element(&self, row: usize, col: usize) -> Result<T> {
        self.check_bounds(row, col)?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or(T::ZERO))
    }

    /// Write the value at `(row, col)`
    ///
    /// A zero value removes the entry; removing an absent entry is a no-op.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_bounds(row, col)?;
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
        Ok(())
    }

    /// Iterate over stored entries in row-major order
    ///
    /// Calling this again without an intervening mutation yields the same
    /// sequence.
    pub fn non_zero_entries(&self) -> Entries<'_, T> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over the `(col, value)` pairs of a single row in column order
    pub fn row(&self, row: usize) -> Result<RowEntries<'_, T>> {
        if row >= self.rows {
            return Err(SpmatError::out_of_bounds(row, 0, self.rows, self.cols));
        }
        Ok(RowEntries {
            inner: self.entries.range((row, 0)..=(row, usize::MAX)),
        })
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(SpmatError::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(())
    }
}

impl<T: MatrixElement> SparseMatrix for SparseStore<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Result<T> {
        SparseStore::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseStore::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseStore::nnz(self)
    }
}

impl<'a, T: MatrixElement> IntoIterator for &'a SparseStore<T> {
    type Item = (usize, usize, T);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.non_zero_entries()
    }
}

/// Row-major iterator over the entries of a [`SparseStore`]
#[derive(Debug, Clone)]
pub struct Entries<'a, T> {
    inner: btree_map::Iter<'a, (usize, usize), T>,
}

impl<T: Copy> Iterator for Entries<'_, T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Copy> ExactSizeIterator for Entries<'_, T> {}

impl<T: Copy> FusedIterator for Entries<'_, T> {}

/// Column-ordered iterator over one row of a [`SparseStore`]
#[derive(Debug, Clone)]
pub struct RowEntries<'a, T> {
    inner: btree_map::Range<'a, (usize, usize), T>,
}

impl<T: Copy> Iterator for RowEntries<'_, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&(_, col), &value)| (col, value))
    }
}

impl<T: Copy> FusedIterator for RowEntries<'_, T> {}
