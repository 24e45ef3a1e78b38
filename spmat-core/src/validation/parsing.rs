//! Parsing utilities for coordinate-list lines
//!
//! Pure functions over a single line of text. Whitespace around every token is
//! ignored; anything else that does not fit the grammar is rejected.

use crate::format::constants::{ENTRY_CLOSE, ENTRY_OPEN, FIELD_SEPARATOR, HEADER_SEPARATOR};
use crate::format::EntryLine;
use crate::{MatrixElement, SpmatError};

/// Parse a `key=<integer>` header line and return the integer
///
/// `key` is one of [`ROWS_KEY`](crate::format::constants::ROWS_KEY) or
/// [`COLS_KEY`](crate::format::constants::COLS_KEY). Negative or non-integer
/// values are rejected.
pub fn parse_header(line: &str, key: &'static str) -> Result<usize, SpmatError> {
    let err = SpmatError::InvalidHeader { expected: key };

    let value = line
        .trim()
        .strip_prefix(key)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix(HEADER_SEPARATOR))
        .ok_or(err)?;

    value.trim().parse::<usize>().map_err(|_| err)
}

/// Parse a `(row, col, value)` entry line
///
/// Coordinates are returned signed and unchecked; bounds are validated
/// against the header separately.
pub fn parse_entry<T: MatrixElement>(line: &str) -> Result<EntryLine<T>, SpmatError> {
    let inner = line
        .trim()
        .strip_prefix(ENTRY_OPEN)
        .and_then(|rest| rest.strip_suffix(ENTRY_CLOSE))
        .ok_or(SpmatError::MalformedEntry {
            reason: "entry must be enclosed in parentheses",
        })?;

    let mut fields = inner.split(FIELD_SEPARATOR).map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(SpmatError::MalformedEntry {
            reason: "entry must have exactly three fields",
        });
    };

    let coordinate = |field: &str| {
        field.parse::<i128>().map_err(|_| SpmatError::MalformedEntry {
            reason: "coordinate is not an integer",
        })
    };

    Ok(EntryLine {
        row: coordinate(row)?,
        col: coordinate(col)?,
        value: value.parse::<T>().map_err(|_| SpmatError::MalformedEntry {
            reason: "value is not an integer of the element type",
        })?,
    })
}

/// True for lines holding nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
