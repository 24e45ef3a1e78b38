//! Row-grouping index used by sparse multiplication

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::{MatrixElement, SparseStore};

/// Non-zero `(col, value)` pairs of a matrix grouped by row
///
/// Rows without entries have no bucket. Pairs inside a bucket are in column
/// order because they are collected from a row-major walk of the store.
#[derive(Debug, Clone)]
pub struct RowIndex<T> {
    rows: HashMap<usize, Vec<(usize, T)>>,
}

impl<T: MatrixElement> RowIndex<T> {
    /// Group every stored entry of `store` by its row
    pub fn build(store: &SparseStore<T>) -> Self {
        let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (row, col, value) in store.non_zero_entries() {
            rows.entry(row).or_default().push((col, value));
        }
        Self { rows }
    }

    /// The `(col, value)` pairs stored in `row`, empty when it has none
    pub fn row(&self, row: usize) -> &[(usize, T)] {
        self.rows.get(&row).map(Vec::as_slice).unwrap_or(&[])
    }
}
