//! Line-driven decoder for the coordinate-list format
//!
//! The decoder walks `ExpectRows -> ExpectCols -> ReadingEntries`. It owns the
//! store being built and hands it over from [`Decoder::finish`]. Lines are fed
//! one at a time so the caller decides where they come from and can attach
//! line numbers to any error.

use super::constants::{COLS_KEY, ROWS_KEY};
use super::Header;
use crate::validation::{is_blank, parse_entry, parse_header, validate_coordinate};
use crate::{MatrixElement, Result, SparseStore, SpmatError};

/// Position of the decoder in the file grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeState<T: MatrixElement> {
    /// Waiting for the `rows=` line
    ExpectRows,
    /// Waiting for the `cols=` line
    ExpectCols { rows: usize },
    /// Header complete, every further non-blank line is an entry
    ReadingEntries(SparseStore<T>),
}

/// What a single line contributed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded<T> {
    /// Whitespace-only line, ignored
    Blank,
    /// The `rows=` line
    Rows(usize),
    /// The `cols=` line; the header is now complete
    Cols(Header),
    /// A non-zero entry, stored
    Entry { row: usize, col: usize, value: T },
    /// A zero-valued entry, accepted and not stored
    ZeroEntry { row: usize, col: usize },
}

/// Incremental decoder producing a [`SparseStore`]
#[derive(Debug, Clone)]
pub struct Decoder<T: MatrixElement> {
    state: DecodeState<T>,
}

impl<T: MatrixElement> Default for Decoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement> Decoder<T> {
    pub fn new() -> Self {
        Self {
            state: DecodeState::ExpectRows,
        }
    }

    /// Current grammar state
    pub fn state(&self) -> &DecodeState<T> {
        &self.state
    }

    /// Feed one line, without its terminator
    ///
    /// Blank lines are skipped in every state. A failed line leaves the
    /// decoder unusable for a meaningful result; callers stop at the first
    /// error.
    pub fn process_line(&mut self, line: &str) -> Result<Decoded<T>> {
        if is_blank(line) {
            return Ok(Decoded::Blank);
        }

        match &mut self.state {
            DecodeState::ExpectRows => {
                let rows = parse_header(line, ROWS_KEY)?;
                self.state = DecodeState::ExpectCols { rows };
                Ok(Decoded::Rows(rows))
            }
            DecodeState::ExpectCols { rows } => {
                let header = Header::new(*rows, parse_header(line, COLS_KEY)?);
                let store = SparseStore::new(header.rows, header.cols);
                self.state = DecodeState::ReadingEntries(store);
                Ok(Decoded::Cols(header))
            }
            DecodeState::ReadingEntries(store) => {
                let entry = parse_entry::<T>(line)?;
                let (rows, cols) = store.dimensions();
                let (row, col) = validate_coordinate(entry.row, entry.col, rows, cols)?;
                if entry.value.is_zero() {
                    return Ok(Decoded::ZeroEntry { row, col });
                }
                store.set_element(row, col, entry.value)?;
                Ok(Decoded::Entry {
                    row,
                    col,
                    value: entry.value,
                })
            }
        }
    }

    /// Finish decoding and return the store
    ///
    /// Fails with `InvalidHeader` when input ended before both header lines
    /// were seen.
    pub fn finish(self) -> Result<SparseStore<T>> {
        match self.state {
            DecodeState::ReadingEntries(store) => Ok(store),
            DecodeState::ExpectRows => Err(SpmatError::InvalidHeader { expected: ROWS_KEY }),
            DecodeState::ExpectCols { .. } => {
                Err(SpmatError::InvalidHeader { expected: COLS_KEY })
            }
        }
    }
}
