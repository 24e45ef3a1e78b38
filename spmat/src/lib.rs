//! spmat - Sparse Integer Matrices in Coordinate-List Text
//!
//! This library loads sparse integer matrices from the line-oriented
//! coordinate-list format, combines them with the algebra in `spmat-core`, and
//! writes the result back in the same format.
//!
//! ## Architecture
//!
//! - **spmat-core**: store, operations, format grammar and validation (no I/O)
//! - **spmat**: file codec, error reporting, command line configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{SparseStore, TextCodec};
//!
//! fn example() -> spmat::Result<()> {
//!     let a: SparseStore = TextCodec::load("a.txt")?;
//!     let b: SparseStore = TextCodec::load("b.txt")?;
//!
//!     let product = spmat::multiply(&a, &b)?;
//!     TextCodec::save(&product, "product.txt")?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions
pub use spmat_core::{
    // Store and traits
    SparseStore, SparseMatrix, MatrixElement, DataType,
    // Operations
    add, subtract, multiply, negate, RowIndex,
    // Error classification
    SpmatError, ErrorCategory,
};

pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod operation;

pub use codec::TextCodec;
pub use config::{Cli, ElementType, RunConfig};
pub use error::{Error, Result};
pub use operation::Operation;
