//! Error types for sparse matrix operations

/// Broad classification of an error, stable across the core and I/O crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed header or entry line
    Format,
    /// Coordinate outside the declared dimensions
    OutOfBounds,
    /// Operand shapes incompatible with the requested operation
    DimensionMismatch,
    /// Integer arithmetic left the range of the element type
    Overflow,
    /// Underlying read or write failure
    Io,
}

impl core::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ErrorCategory::Format => "format",
            ErrorCategory::OutOfBounds => "out of bounds",
            ErrorCategory::DimensionMismatch => "dimension mismatch",
            ErrorCategory::Overflow => "overflow",
            ErrorCategory::Io => "io",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while building, combining or parsing sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpmatError {
    /// Coordinate outside `[0, rows) x [0, cols)`
    ///
    /// Coordinates are signed so that negative indices read from text can be
    /// reported as they were written.
    OutOfBounds {
        row: i128,
        col: i128,
        rows: usize,
        cols: usize,
    },
    /// Operand shapes do not fit the operation
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Accumulated value does not fit the element type
    ArithmeticOverflow { row: usize, col: usize },
    /// Header line missing, without the expected key, or with a bad integer
    InvalidHeader { expected: &'static str },
    /// Entry line that is not a `(row, col, value)` triple
    MalformedEntry { reason: &'static str },
}

impl SpmatError {
    /// Build an `OutOfBounds` error from unsigned coordinates
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        SpmatError::OutOfBounds {
            row: row as i128,
            col: col as i128,
            rows,
            cols,
        }
    }

    /// Classify this error
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SpmatError::OutOfBounds { .. } => ErrorCategory::OutOfBounds,
            SpmatError::DimensionMismatch { .. } => ErrorCategory::DimensionMismatch,
            SpmatError::ArithmeticOverflow { .. } => ErrorCategory::Overflow,
            SpmatError::InvalidHeader { .. } | SpmatError::MalformedEntry { .. } => {
                ErrorCategory::Format
            }
        }
    }
}

impl core::fmt::Display for SpmatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SpmatError::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "Matrix coordinates out of bounds: ({row}, {col}) outside {rows}x{cols}"
            ),
            SpmatError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "Matrix dimensions do not match for {op}: {}x{} and {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            SpmatError::ArithmeticOverflow { row, col } => {
                write!(f, "Arithmetic overflow at ({row}, {col})")
            }
            SpmatError::InvalidHeader { expected } => {
                write!(f, "Input file has wrong format: expected `{expected}=<integer>`")
            }
            SpmatError::MalformedEntry { reason } => {
                write!(f, "Input file has wrong format: {reason}")
            }
        }
    }
}

impl core::error::Error for SpmatError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SpmatError>;
