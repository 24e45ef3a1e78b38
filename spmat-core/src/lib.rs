#![no_std]

//! spmat-core - Sparse Integer Matrix Store and Algebra
//!
//! This crate provides the sparse matrix store, the add/subtract/multiply
//! algorithms and the coordinate-list text format definitions. It performs no
//! I/O; the `spmat` crate reads and writes files on top of it.

extern crate alloc;

pub mod error;
pub mod format;
pub mod ops;
pub mod store;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Decoded, Decoder, EntryLine, Header};
pub use ops::{add, multiply, negate, subtract, RowIndex};
pub use store::{Entries, RowEntries, SparseStore};
pub use traits::*;
