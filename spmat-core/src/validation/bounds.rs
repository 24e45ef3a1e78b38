//! Coordinate bounds validation
//!
//! Entry lines carry signed coordinates; these functions decide whether a
//! coordinate addresses a cell of a `rows x cols` matrix.

use crate::SpmatError;

/// Validate a signed coordinate against matrix dimensions
///
/// Returns the coordinate as `(usize, usize)` when
/// `0 <= row < rows` and `0 <= col < cols`.
pub fn validate_coordinate(
    row: i128,
    col: i128,
    rows: usize,
    cols: usize,
) -> Result<(usize, usize), SpmatError> {
    let err = SpmatError::OutOfBounds {
        row,
        col,
        rows,
        cols,
    };

    let row = usize::try_from(row).map_err(|_| err)?;
    let col = usize::try_from(col).map_err(|_| err)?;
    if row >= rows || col >= cols {
        return Err(err);
    }

    Ok((row, col))
}
