//! Coordinate-list text format definitions
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (r, c, v)
//! ...
//! ```
//!
//! This module contains the line types and the decoding state machine. No I/O
//! happens here; callers feed lines in and write formatted lines out.

pub mod constants;
pub mod decoder;

pub use decoder::{DecodeState, Decoded, Decoder};

use core::fmt;

use constants::{
    COLS_KEY, ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR, HEADER_SEPARATOR, ROWS_KEY,
};

/// The two header lines of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rows: usize,
    pub cols: usize,
}

impl Header {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for Header {
    /// Renders both header lines separated by a newline, without a trailing one
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ROWS_KEY}{HEADER_SEPARATOR}{}\n{COLS_KEY}{HEADER_SEPARATOR}{}",
            self.rows, self.cols
        )
    }
}

/// One `(row, col, value)` entry line
///
/// Coordinates are signed because that is how they appear in text; a parsed
/// line has not yet been checked against any dimensions. `i128` holds every
/// `usize` coordinate exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLine<T> {
    pub row: i128,
    pub col: i128,
    pub value: T,
}

impl<T: fmt::Display> fmt::Display for EntryLine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ENTRY_OPEN}{}{FIELD_SEPARATOR} {}{FIELD_SEPARATOR} {}{ENTRY_CLOSE}",
            self.row, self.col, self.value
        )
    }
}

impl<T> From<(usize, usize, T)> for EntryLine<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self {
            row: row as i128,
            col: col as i128,
            value,
        }
    }
}
