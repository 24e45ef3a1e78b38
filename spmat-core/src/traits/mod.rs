//! Abstract interfaces for sparse matrices
//!
//! This module defines the trait abstractions used across the workspace.

pub mod element;
pub mod matrix;

pub use element::{DataType, MatrixElement};
pub use matrix::SparseMatrix;
