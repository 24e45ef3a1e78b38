//! Core matrix abstraction traits
//!
//! This module defines the read-side interface shared by every sparse matrix
//! in the workspace. Mutation is not part of the trait; a
//! [`SparseStore`](crate::SparseStore) changes only through `set_element`.

use super::element::MatrixElement;
use crate::Result;

/// Core sparse matrix trait for format-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns the element's zero value when nothing is stored and
    /// `OutOfBounds` when the position lies outside the dimensions.
    fn get_element(&self, row: usize, col: usize) -> Result<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}
